// The local CSV file receiving the responses when the remote store fails.

use std::fs::OpenOptions;
use std::path::Path;

use crate::survey::*;

pub struct FallbackFile {
    path: String,
}

impl FallbackFile {
    pub fn new(path: &str) -> FallbackFile {
        FallbackFile {
            path: path.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Appends one row, preceded by the header line if the file does not exist yet.
    ///
    /// The file is opened and closed for each row, without any locking.
    pub fn append(&self, row: &ResponseRow) -> SurveyResult<()> {
        let path = self.path.as_str();
        let file_exists = Path::new(path).is_file();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .context(FallbackOpenSnafu { path })?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if !file_exists {
            debug!("append: writing header to new file {}", path);
            writer
                .write_record(row.headers())
                .context(FallbackWriteSnafu { path })?;
        }
        writer
            .write_record(row.values())
            .context(FallbackWriteSnafu { path })?;
        writer
            .flush()
            .context(FallbackFlushSnafu { path })?;
        info!("append: saved response of {} to {}", row.timestamp(), path);
        Ok(())
    }
}
