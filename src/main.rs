//! LAPS main entrypoint.

use laps::run;

fn main() {
    if let Err(e) = run() {
        laps::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
