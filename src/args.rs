use clap::{Parser, Subcommand};

/// This is the M&E soccer club questionnaire.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,

    /// (file path, optional) A JSON file with the settings of the survey (spreadsheet name, worksheet,
    /// credential file, backup file, export directory). Every setting is optional.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (default M&E_Soccer_Clubs_Responses) The name of the Google Sheets document. Setting this option
    /// overrides what may be specified with the --config option.
    #[clap(long, value_parser)]
    pub spreadsheet: Option<String>,

    /// (default responses) The worksheet holding the responses. It is created on the first submission.
    #[clap(long, value_parser)]
    pub worksheet: Option<String>,

    /// (file path, default service_account.json) The service account key in JSON format.
    #[clap(long, value_parser)]
    pub credentials: Option<String>,

    /// (file path, default responses_backup.csv) The CSV file receiving the responses when the
    /// spreadsheet cannot be reached.
    #[clap(long, value_parser)]
    pub backup_file: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fill in the questionnaire.
    Fill,
    /// Log in and browse the collected responses.
    Admin,
    /// Export all the collected responses to a file.
    Export {
        #[clap(long, value_parser)]
        username: String,
        #[clap(long, value_parser)]
        password: String,
        /// (csv or xlsx, default csv) The format of the export.
        #[clap(long, value_parser)]
        format: Option<String>,
        /// (file path, optional) Where to write the export. Defaults to M&E_responses.csv or
        /// M&E_responses.xlsx in the export directory.
        #[clap(short, long, value_parser)]
        out: Option<String>,
    },
}
