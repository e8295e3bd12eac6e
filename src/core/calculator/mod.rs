//! Allocation engine building blocks.
//! Every function here is pure: inputs in, values out, no I/O.

pub mod bucket;
pub mod manpower;
pub mod status;
pub mod takt;
pub mod work_content;
