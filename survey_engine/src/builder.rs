pub use crate::config::*;

use chrono::NaiveDateTime;

/// Format of the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A builder for assembling a response row.
///
/// The session uses it when the last data step is submitted. It is public
/// so that rows can be assembled outside of an interactive session.
///
/// ```
/// use survey_engine::builder::RowBuilder;
/// use chrono::NaiveDate;
/// # use survey_engine::SessionError;
///
/// let at = NaiveDate::from_ymd_opt(2024, 5, 1)
///     .unwrap()
///     .and_hms_opt(10, 30, 0)
///     .unwrap();
/// let row = RowBuilder::new(at)
///     .fields(vec![("club_name".to_string(), "Gor Mahia".to_string())])?
///     .build();
///
/// assert_eq!(row.headers(), vec!["timestamp", "club_name"]);
/// assert_eq!(row.timestamp(), "2024-05-01 10:30:00");
/// # Ok::<(), SessionError>(())
/// ```
pub struct RowBuilder {
    columns: Vec<(String, String)>,
}

impl RowBuilder {
    pub fn new(at: NaiveDateTime) -> RowBuilder {
        RowBuilder {
            columns: vec![(
                TIMESTAMP_KEY.to_string(),
                at.format(TIMESTAMP_FORMAT).to_string(),
            )],
        }
    }

    /// Appends the answers accumulated so far, in their insertion order.
    pub fn answers(self, answers: &AnswerMapping) -> Result<RowBuilder, SessionError> {
        self.fields(answers.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    /// Appends fields after the existing columns.
    ///
    /// A key can only appear once in a row.
    pub fn fields<I: IntoIterator<Item = (String, String)>>(
        mut self,
        fields: I,
    ) -> Result<RowBuilder, SessionError> {
        for (k, v) in fields {
            if self.columns.iter().any(|(existing, _)| *existing == k) {
                return Err(SessionError::DuplicateKey { key: k });
            }
            self.columns.push((k, v));
        }
        Ok(self)
    }

    pub fn build(self) -> ResponseRow {
        ResponseRow {
            columns: self.columns,
        }
    }
}
