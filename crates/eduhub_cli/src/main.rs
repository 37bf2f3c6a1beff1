//! `eduhub` command-line front end.
//!
//! Each subcommand opens exactly one page over the SQLite slot store, runs
//! the requested action and prints the page view.

mod cli;
mod render;

use anyhow::{anyhow, bail, Context, Result};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands, NoteCommands, TaskCommands};
use eduhub_core::db::open_db;
use eduhub_core::{
    default_log_level, init_logging, Page, PageSession, SqliteSlotStore, SubjectFilter,
};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DATA_DIR_NAME: &str = "eduhub";
const DATA_FILE_NAME: &str = "eduhub.sqlite3";

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_path = resolve_data_path(cli.data_path)?;
    let data_dir = data_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory `{}`", data_dir.display()))?;

    let log_dir = resolve_log_dir(cli.log_dir, &data_dir)?;
    let log_level = cli
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    if let Err(err) = init_logging(&log_level, &log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let conn = open_db(&data_path)
        .with_context(|| format!("failed to open data file `{}`", data_path.display()))?;
    let store = SqliteSlotStore::new(&conn);
    let today = Local::now().date_naive();

    let page = page_for(&cli.command);
    info!("event=cli_command module=cli status=start page={page}");
    let mut session = PageSession::open(page, store, today)
        .with_context(|| format!("failed to open {page} page"))?;

    match cli.command {
        Commands::Dashboard => {
            let summary = session
                .dashboard()
                .ok_or_else(|| inactive(page, "dashboard"))?;
            print!("{}", render::dashboard(summary));
        }
        Commands::Profile => {
            let summary = session.profile().ok_or_else(|| inactive(page, "profile"))?;
            print!("{}", render::profile(summary));
        }
        Commands::Subjects => {
            let board = session.notes().ok_or_else(|| inactive(page, "notes"))?;
            print!("{}", render::filter_options(&board.filter_options()));
        }
        Commands::Tasks { command } => {
            let planner = session
                .planner_mut()
                .ok_or_else(|| inactive(page, "planner"))?;
            match command {
                TaskCommands::List => {}
                TaskCommands::Add {
                    subject,
                    topic,
                    date,
                } => {
                    planner.create(&subject, &topic, date.as_deref())?;
                }
                TaskCommands::Done { row } => {
                    planner.mark_done_at(row_index(row)?)?;
                }
                TaskCommands::Delete { row } => {
                    planner.delete_at(row_index(row)?)?;
                }
            }
            print!("{}", render::task_table(&planner.render()));
        }
        Commands::Notes { command } => {
            let board = session
                .notes_mut()
                .ok_or_else(|| inactive(page, "notes"))?;
            let filter = match command {
                NoteCommands::List { subject } => SubjectFilter::parse(&subject),
                NoteCommands::Add {
                    title,
                    subject,
                    content,
                } => {
                    board.create(&title, &subject, &content)?;
                    SubjectFilter::All
                }
                NoteCommands::Delete { card, subject } => {
                    let filter = SubjectFilter::parse(&subject);
                    board.delete_visible_at(&filter, row_index(card)?)?;
                    filter
                }
            };
            print!("{}", render::note_list(&board.render(&filter)));
        }
    }

    info!("event=cli_command module=cli status=ok page={page}");
    Ok(())
}

fn page_for(command: &Commands) -> Page {
    match command {
        Commands::Dashboard => Page::Dashboard,
        Commands::Tasks { .. } => Page::Planner,
        Commands::Notes { .. } | Commands::Subjects => Page::Notes,
        Commands::Profile => Page::Profile,
    }
}

/// Absolute data file path; relative paths resolve against the working directory.
fn resolve_data_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let Some(base) = dirs::data_dir() else {
                bail!("cannot determine a data directory; pass --data or set EDUHUB_DATA");
            };
            base.join(DATA_DIR_NAME).join(DATA_FILE_NAME)
        }
    };
    absolute(path)
}

/// Absolute log directory, `<data dir>/logs` unless given.
fn resolve_log_dir(explicit: Option<PathBuf>, data_dir: &Path) -> Result<PathBuf> {
    match explicit {
        Some(dir) => absolute(dir),
        None => absolute(data_dir.join("logs")),
    }
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    std::path::absolute(&path)
        .with_context(|| format!("failed to resolve path `{}`", path.display()))
}

fn row_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("row numbers start at 1"))
}

fn inactive(page: Page, controller: &str) -> anyhow::Error {
    anyhow!("{controller} controller is not active on the {page} page")
}

#[cfg(test)]
mod tests {
    use super::{page_for, resolve_data_path, resolve_log_dir, row_index};
    use crate::cli::{Commands, TaskCommands};
    use eduhub_core::Page;
    use std::path::{Path, PathBuf};

    #[test]
    fn subcommands_route_to_their_page() {
        assert_eq!(page_for(&Commands::Dashboard), Page::Dashboard);
        assert_eq!(page_for(&Commands::Subjects), Page::Notes);
        assert_eq!(
            page_for(&Commands::Tasks {
                command: TaskCommands::List
            }),
            Page::Planner
        );
    }

    #[test]
    fn row_numbers_are_one_based() {
        assert_eq!(row_index(1).unwrap(), 0);
        assert!(row_index(0).is_err());
    }

    #[test]
    fn relative_data_path_resolves_against_working_directory() {
        let resolved = resolve_data_path(Some(PathBuf::from("study.db"))).unwrap();

        assert!(resolved.is_absolute());
        assert_eq!(resolved, std::env::current_dir().unwrap().join("study.db"));
    }

    #[test]
    fn default_log_dir_is_absolute_for_relative_data_dir() {
        let data_dir = resolve_data_path(Some(PathBuf::from("study.db")))
            .unwrap()
            .parent()
            .map(Path::to_path_buf)
            .unwrap();

        let log_dir = resolve_log_dir(None, &data_dir).unwrap();

        assert!(log_dir.is_absolute());
        assert_eq!(log_dir, data_dir.join("logs"));
    }

    #[test]
    fn explicit_relative_log_dir_is_made_absolute() {
        let log_dir = resolve_log_dir(Some(PathBuf::from("logs")), Path::new("/data")).unwrap();

        assert_eq!(log_dir, std::env::current_dir().unwrap().join("logs"));
    }
}
