use crate::survey::*;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SPREADSHEET_NAME: &str = "M&E_Soccer_Clubs_Responses";
pub const DEFAULT_WORKSHEET_NAME: &str = "responses";
pub const DEFAULT_SERVICE_ACCOUNT_FILE: &str = "service_account.json";
pub const DEFAULT_BACKUP_FILE: &str = "responses_backup.csv";

/// The settings as they appear in the JSON configuration file.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyConfig {
    #[serde(rename = "spreadsheetName")]
    pub spreadsheet_name: Option<String>,
    #[serde(rename = "worksheetName")]
    pub worksheet_name: Option<String>,
    #[serde(rename = "serviceAccountFile")]
    pub service_account_file: Option<String>,
    #[serde(rename = "backupFile")]
    pub backup_file: Option<String>,
    #[serde(rename = "exportDirectory")]
    pub export_directory: Option<String>,
}

/// The settings after applying the defaults and the command line overrides.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Settings {
    pub spreadsheet_name: String,
    pub worksheet_name: String,
    pub service_account_file: String,
    pub backup_file: String,
    pub export_directory: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_config(SurveyConfig::default())
    }
}

impl Settings {
    pub fn from_config(config: SurveyConfig) -> Settings {
        Settings {
            spreadsheet_name: config
                .spreadsheet_name
                .unwrap_or_else(|| DEFAULT_SPREADSHEET_NAME.to_string()),
            worksheet_name: config
                .worksheet_name
                .unwrap_or_else(|| DEFAULT_WORKSHEET_NAME.to_string()),
            service_account_file: config
                .service_account_file
                .unwrap_or_else(|| DEFAULT_SERVICE_ACCOUNT_FILE.to_string()),
            backup_file: config
                .backup_file
                .unwrap_or_else(|| DEFAULT_BACKUP_FILE.to_string()),
            export_directory: config.export_directory,
        }
    }
}

pub fn read_config(path: &str) -> SurveyResult<SurveyConfig> {
    let contents = fs::read_to_string(path).context(OpeningConfigSnafu { path })?;
    debug!("read_config: {:?}", contents);
    let config: SurveyConfig =
        serde_json::from_str(contents.as_str()).context(ParsingConfigSnafu { path })?;
    Ok(config)
}

/// Reads the configuration file if one is given, then applies the command line overrides.
pub fn load_settings(args: &Args) -> SurveyResult<Settings> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => SurveyConfig::default(),
    };
    info!("config: {:?}", config);
    let mut settings = Settings::from_config(config);
    if let Some(x) = &args.spreadsheet {
        settings.spreadsheet_name = x.clone();
    }
    if let Some(x) = &args.worksheet {
        settings.worksheet_name = x.clone();
    }
    if let Some(x) = &args.credentials {
        settings.service_account_file = x.clone();
    }
    if let Some(x) = &args.backup_file {
        settings.backup_file = x.clone();
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Command;
    use std::io::Write;

    fn args(config: Option<String>) -> Args {
        Args {
            command: Command::Fill,
            config,
            spreadsheet: None,
            worksheet: Some("wave_2".to_string()),
            credentials: None,
            backup_file: None,
            verbose: false,
        }
    }

    #[test]
    fn defaults_follow_the_survey_constants() {
        let s = Settings::default();
        assert_eq!(s.spreadsheet_name, "M&E_Soccer_Clubs_Responses");
        assert_eq!(s.worksheet_name, "responses");
        assert_eq!(s.service_account_file, "service_account.json");
        assert_eq!(s.backup_file, "responses_backup.csv");
        assert_eq!(s.export_directory, None);
    }

    #[test]
    fn file_then_command_line() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"spreadsheetName": "Pilot", "worksheetName": "ignored", "backupFile": "/tmp/b.csv"}}"#
        )
        .unwrap();
        let path = f.path().display().to_string();
        let s = load_settings(&args(Some(path))).unwrap();
        assert_eq!(s.spreadsheet_name, "Pilot");
        assert_eq!(s.worksheet_name, "wave_2");
        assert_eq!(s.backup_file, "/tmp/b.csv");
        assert_eq!(s.service_account_file, "service_account.json");
    }

    #[test]
    fn malformed_config_is_reported() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{ not json").unwrap();
        let path = f.path().display().to_string();
        let err = load_settings(&args(Some(path))).unwrap_err();
        assert!(matches!(err, SurveyError::ParsingConfig { .. }));
    }

    #[test]
    fn missing_config_is_reported() {
        let err = read_config("/nonexistent/survey.json").unwrap_err();
        assert!(matches!(err, SurveyError::OpeningConfig { .. }));
    }
}
