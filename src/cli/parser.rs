use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for LAPS
/// Line Allocation Planning System backed by SQLite
#[derive(Parser, Debug)]
#[command(
    name = "laps",
    version = env!("CARGO_PKG_VERSION"),
    about = "Line allocation planning: derive takt time and assign line activities to operators",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Line master: add, list, show or delete assembly lines
    Line {
        #[command(subcommand)]
        action: LineAction,
    },

    /// Activities of a line: add or delete
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// Compute the daily operator allocation for one or more lines
    Plan {
        /// Plan date (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Shift duration in minutes (defaults to the configured shift)
        #[arg(long = "shift", allow_negative_numbers = true)]
        shift: Option<i64>,

        /// Plan quantity per line, repeatable: --qty "LINE A=200"
        #[arg(long = "qty", value_name = "LINE=QTY", required = true)]
        qty: Vec<String>,

        /// Write the results to this file
        #[arg(long = "export", value_name = "FILE")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Overwrite the export file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace the database with a backup (developer role only)
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LineAction {
    /// Add a new line
    Add { name: String },

    /// List all lines with activity count and work content
    List,

    /// Show the ordered activities of a line
    Show { name: String },

    /// Delete a line and all its activities
    Del { name: String },
}

#[derive(Subcommand, Debug)]
pub enum ActivityAction {
    /// Add an activity to a line
    Add {
        line: String,

        #[arg(long = "seq", help = "Sequence number (processing order)")]
        seq: i64,

        #[arg(long = "text", help = "Activity description")]
        text: String,

        #[arg(long = "time", allow_negative_numbers = true, help = "Standard time in seconds (> 0)")]
        time: f64,
    },

    /// Delete an activity by sequence number
    Del {
        line: String,

        #[arg(long = "seq")]
        seq: i64,
    },
}
