use log::{debug, info, warn};

use snafu::{prelude::*, ErrorCompat, Snafu};
use survey_engine::*;

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use serde_json::json;
use serde_json::Value as JSValue;

use crate::args::{Args, Command};
use crate::survey::admin::{run_admin, run_export};
use crate::survey::config_reader::*;
use crate::survey::console::Console;
use crate::survey::gateway::PersistenceGateway;
use crate::survey::io_fallback::FallbackFile;
use crate::survey::io_sheets::{RemoteError, SheetsStore};
use crate::survey::wizard::run_questionnaire;

pub mod admin;
pub mod config_reader;
pub mod console;
pub mod gateway;
pub mod io_common;
pub mod io_export;
pub mod io_fallback;
pub mod io_sheets;
pub mod wizard;

#[derive(Debug, Snafu)]
pub enum SurveyError {
    #[snafu(display("Error opening the configuration file {path}"))]
    OpeningConfig {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the configuration file {path}"))]
    ParsingConfig {
        source: serde_json::Error,
        path: String,
    },

    #[snafu(display("Could not open the backup file {path}"))]
    FallbackOpen {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Could not write to the backup file {path}"))]
    FallbackWrite { source: csv::Error, path: String },
    #[snafu(display("Could not flush the backup file {path}"))]
    FallbackFlush {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Could not load the responses"))]
    RemoteStore { source: RemoteError },

    #[snafu(display("Error writing the CSV export"))]
    CsvExport { source: csv::Error },
    #[snafu(display("Error finishing the CSV export"))]
    CsvBuffer { source: std::io::Error },
    #[snafu(display("Error writing the Excel export"))]
    XlsxExport {
        source: rust_xlsxwriter::XlsxError,
    },
    #[snafu(display("Error writing the export file {path}"))]
    WritingExport {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Terminal error"))]
    Console { source: std::io::Error },
    #[snafu(display("The input was closed"))]
    InputClosed {},

    #[snafu(context(false), display("Invalid questionnaire state"))]
    Session { source: SessionError },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SurveyResult<T> = Result<T, SurveyError>;

/// A remote worksheet holding one response per row, below a header row.
pub trait ResponseStore {
    /// Appends one row. The header row is written first if the worksheet is new.
    fn append_row(&self, row: &ResponseRow) -> Result<(), RemoteError>;

    /// All the values of the worksheet, header row first.
    ///
    /// Returns `None` when the worksheet does not exist yet.
    fn read_all(&self) -> Result<Option<Vec<Vec<String>>>, RemoteError>;
}

/// Runs the command given on the command line against the terminal.
pub fn run_command<R: BufRead, W: Write>(
    args: &Args,
    console: &mut Console<R, W>,
) -> SurveyResult<()> {
    let settings = load_settings(args)?;
    debug!("run_command: settings: {:?}", settings);
    let store = SheetsStore::new(&settings);
    match &args.command {
        Command::Fill => {
            let fallback = FallbackFile::new(&settings.backup_file);
            let gateway = PersistenceGateway::new(store, fallback);
            let n = run_questionnaire(console, &gateway, || chrono::Local::now().naive_local())?;
            info!("run_command: {} responses submitted", n);
            Ok(())
        }
        Command::Admin => run_admin(console, &store, &settings),
        Command::Export {
            username,
            password,
            format,
            out,
        } => {
            let path = run_export(
                &store,
                &settings,
                username,
                password,
                format.as_deref(),
                out.as_deref(),
            )?;
            console.say(&format!("Responses exported to {}", path.display()))
        }
    }
}

/// The error message followed by each of its causes, one per line.
pub fn error_report(e: &SurveyError) -> String {
    let mut lines: Vec<String> = vec![e.to_string()];
    for cause in ErrorCompat::iter_chain(e).skip(1) {
        lines.push(format!("  caused by: {}", cause));
    }
    lines.join("\n")
}
