//! Command-line definitions for `eduhub`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Study tracker: tasks, notes and a daily study tip.
#[derive(Parser, Debug)]
#[command(name = "eduhub")]
#[command(author, version = eduhub_core::core_version(), long_about = None)]
pub struct Cli {
    /// Data file holding the task and note slots.
    /// Defaults to `<data dir>/eduhub/eduhub.sqlite3`.
    #[arg(long = "data", global = true, env = "EDUHUB_DATA")]
    pub data_path: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true, env = "EDUHUB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files.
    /// Defaults to a `logs` directory next to the data file.
    #[arg(long, global = true, env = "EDUHUB_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per page.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Task counts, note count and the tip of the day
    Dashboard,

    /// Study planner
    Tasks {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Study notes
    Notes {
        #[command(subcommand)]
        command: NoteCommands,
    },

    /// Subject filter options for notes
    Subjects,

    /// Subjects studied, notes written and tasks completed
    Profile,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Show the planner table
    List,

    /// Add a pending task
    Add {
        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        topic: String,

        /// Due date, e.g. 2024-05-01
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Mark the task in row N done
    Done {
        /// Row number shown by `tasks list`
        row: usize,
    },

    /// Delete the task in row N
    Delete {
        /// Row number shown by `tasks list`
        row: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Show note cards, optionally for one subject
    List {
        /// Exact subject, or `all`
        #[arg(short, long, default_value = "all")]
        subject: String,
    },

    /// Add a note
    Add {
        #[arg(long)]
        title: String,

        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        content: String,
    },

    /// Delete card N of the shown view
    Delete {
        /// Card number shown by `notes list`
        card: usize,

        /// The subject filter the card number refers to
        #[arg(short, long, default_value = "all")]
        subject: String,
    },
}
