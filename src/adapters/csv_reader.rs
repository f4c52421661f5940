use crate::domain::model::{Sheet, Workbook};
use crate::domain::ports::WorkbookReader;
use crate::utils::error::Result;
use std::path::Path;

/// 單一工作表的 CSV 來源，工作表名稱取自檔名
#[derive(Debug, Clone, Copy)]
pub struct CsvWorkbookReader {
    delimiter: u8,
}

impl CsvWorkbookReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvWorkbookReader {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbookReader for CsvWorkbookReader {
    fn read(&self, source_name: &str, bytes: &[u8]) -> Result<Workbook> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        let name = Path::new(source_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("Sheet1")
            .to_string();

        tracing::debug!("CSV '{}': {} columns, {} rows", name, columns.len(), rows.len());
        Ok(Workbook {
            sheets: vec![Sheet {
                name,
                columns,
                rows,
            }],
        })
    }
}
