// Downloads offered to the admin: CSV and Excel.

use rust_xlsxwriter::{Format, Workbook};

use crate::survey::io_common::ResponseTable;
use crate::survey::*;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn parse(s: &str) -> SurveyResult<ExportFormat> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            x => whatever!("Unknown export format {:?}, expected csv or xlsx", x),
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "M&E_responses.csv",
            ExportFormat::Xlsx => "M&E_responses.xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

/// Serializes the whole table in the given format.
pub fn export(table: &ResponseTable, format: ExportFormat) -> SurveyResult<Vec<u8>> {
    debug!("export: {} rows as {:?}", table.len(), format);
    match format {
        ExportFormat::Csv => to_csv(table),
        ExportFormat::Xlsx => to_xlsx(table),
    }
}

fn to_csv(table: &ResponseTable) -> SurveyResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(&table.columns)
        .context(CsvExportSnafu {})?;
    for row in table.rows.iter() {
        writer.write_record(row).context(CsvExportSnafu {})?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context(CsvBufferSnafu {})?;
    Ok(bytes)
}

fn to_xlsx(table: &ResponseTable) -> SurveyResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1").context(XlsxExportSnafu {})?;
    for (col, name) in table.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name.as_str(), &header_format)
            .context(XlsxExportSnafu {})?;
    }
    for (idx, row) in table.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write_string((idx + 1) as u32, col as u16, cell.as_str())
                .context(XlsxExportSnafu {})?;
        }
    }
    workbook.save_to_buffer().context(XlsxExportSnafu {})
}

/// Writes the export where requested, or to the default file name in the export directory.
pub fn write_export(
    table: &ResponseTable,
    format: ExportFormat,
    out: Option<&str>,
    settings: &Settings,
) -> SurveyResult<PathBuf> {
    let path: PathBuf = match (out, &settings.export_directory) {
        (Some(p), _) => PathBuf::from(p),
        (None, Some(dir)) => [dir.as_str(), format.default_file_name()].iter().collect(),
        (None, None) => PathBuf::from(format.default_file_name()),
    };
    let bytes = export(table, format)?;
    fs::write(&path, bytes).context(WritingExportSnafu {
        path: path.display().to_string(),
    })?;
    info!(
        "write_export: {} responses written to {:?} ({})",
        table.len(),
        path,
        format.mime_type()
    );
    Ok(path)
}
