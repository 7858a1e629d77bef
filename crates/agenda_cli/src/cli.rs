use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "club-agenda")]
#[command(version)]
#[command(about = "Edit and print club meeting agendas")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// SQLite file holding saved agendas
    #[arg(long, global = true, value_name = "PATH", default_value = "club_agenda.sqlite3")]
    pub db: PathBuf,

    /// Storage namespace inside the database
    #[arg(long, global = true, value_name = "NAME")]
    pub namespace: Option<String>,

    /// Absolute directory for rolling log files (logging is off when absent)
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); needs --log-dir
    #[arg(long, global = true, value_name = "LEVEL", requires = "log_dir")]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prints the agenda with computed start times
    Show {
        /// Prints the full page layout instead of the table
        #[arg(long)]
        print: bool,
    },
    /// Inserts a placeholder row at a position
    Insert {
        /// Zero-based position; equal to the row count appends
        index: usize,
        /// Inserts a section header instead of an activity
        #[arg(long)]
        section: bool,
    },
    /// Deletes a row by ID
    Delete {
        #[arg(value_name = "ITEM_ID")]
        id: String,
    },
    /// Swaps a row with its neighbour
    Move {
        /// Zero-based row position
        index: usize,
        #[arg(value_enum)]
        direction: Direction,
    },
    /// Replaces one field of a row
    SetItem {
        #[arg(value_name = "ITEM_ID")]
        id: String,
        #[arg(value_enum)]
        field: ItemField,
        value: String,
    },
    /// Replaces one meeting field (meeting-number, theme, time, ...)
    SetMeeting { field: String, value: String },
    /// Renames the officer at a roster position
    SetOfficer {
        /// Zero-based roster position
        index: usize,
        name: String,
    },
    /// Manage meeting reminders
    Reminder {
        #[command(subcommand)]
        command: ReminderCommands,
    },
    /// Writes the print layout to a text file
    Export {
        /// Output file; defaults to the image-style name with a .txt suffix
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Clears saved data and restores the default agenda
    Reset {
        /// Confirms the destructive reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Appends a reminder
    Add { text: String },
    /// Replaces the reminder at a position
    Set { index: usize, text: String },
    /// Removes the reminder at a position
    Remove { index: usize },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ItemField {
    Activity,
    Role,
    Duration,
    /// `true` or `false`
    Section,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, Direction};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_requires_log_dir() {
        assert!(Cli::try_parse_from(["club-agenda", "--log-level", "debug", "show"]).is_err());

        let cli = Cli::try_parse_from([
            "club-agenda",
            "show",
            "--log-dir",
            "/tmp/agenda-logs",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.global.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn move_parses_direction_value() {
        let cli = Cli::try_parse_from(["club-agenda", "move", "3", "down"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Move {
                index: 3,
                direction: Direction::Down
            }
        ));
    }
}
