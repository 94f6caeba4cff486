// The result set shown to the admin.

/// All the responses, with the first row of the worksheet as column names.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct ResponseTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResponseTable {
    /// Splits the raw values of a worksheet into header and data rows.
    ///
    /// Google trims trailing empty cells, so short rows are padded to the
    /// header width. Cells beyond the header are dropped.
    pub fn from_values(values: Vec<Vec<String>>) -> ResponseTable {
        let mut iter = values.into_iter();
        let columns = match iter.next() {
            Some(header) => header,
            None => return ResponseTable::default(),
        };
        let width = columns.len();
        let rows = iter
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        ResponseTable { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A plain-text rendering, one line per row, columns separated by `|`.
    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in self.rows.iter() {
            for (idx, cell) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.chars().count());
            }
        }
        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(widths.iter())
                .map(|(c, w)| format!("{:<width$}", c, width = *w))
                .collect::<Vec<String>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };
        let mut out = vec![line(&self.columns)];
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<String>>()
                .join("-+-"),
        );
        for row in self.rows.iter() {
            out.push(line(row));
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_values_make_an_empty_table() {
        let t = ResponseTable::from_values(vec![]);
        assert!(t.is_empty());
        assert!(t.columns.is_empty());
    }

    #[test]
    fn header_only_means_no_responses() {
        let t = ResponseTable::from_values(vec![strings(&["timestamp", "club_name"])]);
        assert_eq!(t.columns, strings(&["timestamp", "club_name"]));
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn short_rows_are_padded() {
        let t = ResponseTable::from_values(vec![
            strings(&["timestamp", "club_name", "league"]),
            strings(&["2024-01-01 00:00:00", "Gor Mahia"]),
            strings(&["2024-01-02 00:00:00", "Ulinzi", "Kenya Premier League", "extra"]),
        ]);
        assert_eq!(t.rows[0], strings(&["2024-01-01 00:00:00", "Gor Mahia", ""]));
        assert_eq!(t.rows[1].len(), 3);
    }

    #[test]
    fn text_rendering_aligns_columns() {
        let t = ResponseTable::from_values(vec![
            strings(&["club_name", "role"]),
            strings(&["Gor Mahia", "Coach"]),
        ]);
        assert_eq!(
            t.to_text(),
            "club_name | role\n----------+------\nGor Mahia | Coach"
        );
    }
}
