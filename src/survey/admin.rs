// The admin viewer: a login gate in front of the collected responses.

use std::io::{BufRead, Write};

use crate::survey::console::Console;
use crate::survey::io_common::ResponseTable;
use crate::survey::io_export::{write_export, ExportFormat};
use crate::survey::*;

pub const ADMIN_USERNAME: &str = "Bigkev";
pub const ADMIN_PASSWORD: &str = "kevlise";

/// The login flag of one admin interaction.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct AdminSession {
    logged_in: bool,
}

impl AdminSession {
    pub fn new() -> AdminSession {
        AdminSession::default()
    }

    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    /// Exact comparison with the fixed credentials. A failure leaves the flag as it was.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            info!("login: admin logged in");
            self.logged_in = true;
            true
        } else {
            warn!("login: invalid credentials for user {:?}", username);
            false
        }
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
    }
}

/// All the responses of the remote worksheet. A missing worksheet means no responses.
pub fn list_responses<S: ResponseStore>(store: &S) -> SurveyResult<ResponseTable> {
    let values = store.read_all().context(RemoteStoreSnafu {})?;
    let table = values.map(ResponseTable::from_values).unwrap_or_default();
    debug!("list_responses: {} responses", table.len());
    Ok(table)
}

/// The interactive admin panel. An empty username leaves the panel.
pub fn run_admin<R: BufRead, W: Write, S: ResponseStore>(
    console: &mut Console<R, W>,
    store: &S,
    settings: &Settings,
) -> SurveyResult<()> {
    let mut session = AdminSession::new();
    loop {
        console.say("Admin Panel")?;
        let username = console.ask("Username (empty to quit):")?;
        if username.is_empty() {
            return Ok(());
        }
        let password = console.ask("Password:")?;
        if !session.login(&username, &password) {
            console.say("Invalid credentials.")?;
            continue;
        }
        while session.logged_in() {
            if !dashboard(console, store, settings, &mut session)? {
                return Ok(());
            }
        }
    }
}

// One pass over the dashboard. Returns false when the admin quits.
fn dashboard<R: BufRead, W: Write, S: ResponseStore>(
    console: &mut Console<R, W>,
    store: &S,
    settings: &Settings,
    session: &mut AdminSession,
) -> SurveyResult<bool> {
    let table = list_responses(store)?;
    let prompt = if table.is_empty() {
        console.say("No responses yet.")?;
        "[l]ogout or [q]uit:"
    } else {
        console.say(&format!("{} responses loaded.", table.len()))?;
        console.say(&table.to_text())?;
        "[c]sv, [x]lsx, [l]ogout or [q]uit:"
    };
    loop {
        let action = console.ask(prompt)?.trim().to_lowercase();
        let format = match action.as_str() {
            "c" | "csv" if !table.is_empty() => ExportFormat::Csv,
            "x" | "xlsx" if !table.is_empty() => ExportFormat::Xlsx,
            "l" | "logout" => {
                session.logout();
                return Ok(true);
            }
            "q" | "quit" => return Ok(false),
            _ => continue,
        };
        let path = write_export(&table, format, None, settings)?;
        console.say(&format!("Saved {}", path.display()))?;
        return Ok(true);
    }
}

/// Logs in, then writes all the responses to a file in one go.
pub fn run_export<S: ResponseStore>(
    store: &S,
    settings: &Settings,
    username: &str,
    password: &str,
    format: Option<&str>,
    out: Option<&str>,
) -> SurveyResult<PathBuf> {
    let mut session = AdminSession::new();
    if !session.login(username, password) {
        whatever!("Invalid credentials.")
    }
    let format = match format {
        Some(f) => ExportFormat::parse(f)?,
        None => ExportFormat::Csv,
    };
    let table = list_responses(store)?;
    if table.is_empty() {
        warn!("run_export: no responses yet, the export has no data rows");
    }
    write_export(&table, format, out, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::gateway::tests::{MemoryStore, UnreachableStore};
    use calamine::{Reader, Xlsx};
    use chrono::NaiveDate;
    use std::io::Cursor;
    use survey_engine::RowBuilder;

    fn store_with(clubs: &[&str]) -> MemoryStore {
        let store = MemoryStore::default();
        for (idx, club) in clubs.iter().enumerate() {
            let at = NaiveDate::from_ymd_opt(2024, 8, 1)
                .unwrap()
                .and_hms_opt(9, idx as u32, 0)
                .unwrap();
            let row = RowBuilder::new(at)
                .fields(vec![("club_name".to_string(), club.to_string())])
                .unwrap()
                .build();
            store.append_row(&row).unwrap();
        }
        store
    }

    fn settings_in(dir: &tempfile::TempDir) -> Settings {
        Settings {
            export_directory: Some(dir.path().display().to_string()),
            ..Settings::default()
        }
    }

    #[test]
    fn only_the_fixed_credentials_log_in() {
        let mut s = AdminSession::new();
        for (u, p) in [
            ("bigkev", "kevlise"),
            ("Bigkev", "Kevlise"),
            ("Bigkev ", "kevlise"),
            ("", ""),
            ("kevlise", "Bigkev"),
        ] {
            assert!(!s.login(u, p));
            assert!(!s.logged_in());
        }
        assert!(s.login("Bigkev", "kevlise"));
        assert!(s.logged_in());
        s.logout();
        assert!(!s.logged_in());
    }

    #[test]
    fn failed_login_does_not_log_out() {
        let mut s = AdminSession::new();
        assert!(s.login(ADMIN_USERNAME, ADMIN_PASSWORD));
        assert!(!s.login("intruder", "guess"));
        assert!(s.logged_in());
    }

    #[test]
    fn missing_worksheet_is_no_responses() {
        let table = list_responses(&MemoryStore::default()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn unreachable_store_is_an_error() {
        let err = list_responses(&UnreachableStore).unwrap_err();
        assert!(matches!(err, SurveyError::RemoteStore { .. }));
    }

    #[test]
    fn responses_are_listed_with_the_header_as_columns() {
        let table = list_responses(&store_with(&["Gor Mahia", "Bandari FC"])).unwrap();
        assert_eq!(table.columns, vec!["timestamp", "club_name"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], vec!["2024-08-01 09:01:00", "Bandari FC"]);
    }

    #[test]
    fn admin_panel_session() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);
        let store = store_with(&["Gor Mahia"]);
        let script = "Bigkev\nwrong\nBigkev\nkevlise\nz\nc\nl\n\n";
        let mut console = Console::new(Cursor::new(script), Vec::new());
        run_admin(&mut console, &store, &settings).unwrap();

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("Invalid credentials.").count(), 1);
        assert_eq!(out.matches("1 responses loaded.").count(), 2);
        assert!(out.contains("Gor Mahia"));
        let csv = fs::read_to_string(dir.path().join("M&E_responses.csv")).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["timestamp,club_name", "2024-08-01 09:00:00,Gor Mahia"]);
    }

    #[test]
    fn empty_panel_offers_no_export() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);
        let script = "Bigkev\nkevlise\nc\nq\n";
        let mut console = Console::new(Cursor::new(script), Vec::new());
        run_admin(&mut console, &MemoryStore::default(), &settings).unwrap();

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("No responses yet."));
        assert!(!dir.path().join("M&E_responses.csv").exists());
    }

    #[test]
    fn export_command_checks_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);
        let store = store_with(&["Gor Mahia"]);
        let res = run_export(&store, &settings, "Bigkev", "nope", None, None);
        assert!(matches!(res, Err(SurveyError::Whatever { .. })));
        assert!(!dir.path().join("M&E_responses.csv").exists());
    }

    #[test]
    fn export_command_writes_excel() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);
        let store = store_with(&["Gor Mahia", "AFC Leopards", "Bandari FC"]);
        let path = run_export(
            &store,
            &settings,
            ADMIN_USERNAME,
            ADMIN_PASSWORD,
            Some("xlsx"),
            None,
        )
        .unwrap();
        assert_eq!(path, dir.path().join("M&E_responses.xlsx"));
        let mut workbook: Xlsx<_> = calamine::open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap().unwrap();
        assert_eq!(range.height(), 4);
        assert_eq!(range.width(), 2);
    }
}
