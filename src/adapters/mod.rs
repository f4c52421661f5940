// Adapters layer: concrete collaborators for spreadsheet input and document output.

pub mod csv_reader;
pub mod docx_writer;
pub mod xlsx_reader;

use crate::domain::ports::WorkbookReader;
use crate::utils::error::{ListingError, Result};
use std::path::Path;

pub use csv_reader::CsvWorkbookReader;
pub use docx_writer::DocxWriter;
pub use xlsx_reader::XlsxWorkbookReader;

pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv", "tsv"];

/// 依副檔名挑選讀取器
pub fn reader_for_path(path: &str) -> Result<Box<dyn WorkbookReader>> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => Ok(Box::new(CsvWorkbookReader::new())),
        Some("tsv") => Ok(Box::new(CsvWorkbookReader::with_delimiter(b'\t'))),
        Some(ext) if WORKBOOK_EXTENSIONS.contains(&ext) => Ok(Box::new(XlsxWorkbookReader::new())),
        _ => Err(ListingError::UnsupportedInputError {
            path: path.to_string(),
        }),
    }
}
