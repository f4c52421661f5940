use crate::domain::model::{Sheet, Workbook};
use crate::domain::ports::WorkbookReader;
use crate::utils::error::Result;
use calamine::{open_workbook_auto_from_rs, Data, ExcelDateTime, Reader};
use chrono::NaiveTime;
use std::io::Cursor;

/// Reads any workbook format calamine can detect (xlsx, xlsm, xlsb, xls, ods).
///
/// The first non-empty row of every sheet is its header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWorkbookReader;

impl XlsxWorkbookReader {
    pub fn new() -> Self {
        Self
    }
}

impl WorkbookReader for XlsxWorkbookReader {
    fn read(&self, source_name: &str, bytes: &[u8]) -> Result<Workbook> {
        tracing::debug!("Opening workbook '{}' ({} bytes)", source_name, bytes.len());
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&name)?;

            // calamine 的範圍從第一個非空儲存格開始；補回左側空欄以維持欄位位置
            let leading_columns = range.start().map(|(_, col)| col as usize).unwrap_or(0);
            let mut rows = range.rows().map(|cells| {
                let mut row = vec![String::new(); leading_columns];
                row.extend(cells.iter().map(cell_to_text));
                row
            });

            let columns: Vec<String> = rows
                .next()
                .map(|header| header.iter().map(|name| name.trim().to_string()).collect())
                .unwrap_or_default();
            let rows: Vec<Vec<String>> = rows.collect();

            tracing::debug!("Sheet '{}': {} data rows", name, rows.len());
            sheets.push(Sheet {
                name,
                columns,
                rows,
            });
        }

        Ok(Workbook { sheets })
    }
}

fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => format_datetime(dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// 日期格式的儲存格輸出為日期文字；午夜時間只留日期部分
fn format_datetime(value: &ExcelDateTime) -> String {
    if value.is_duration() {
        return format_number(value.as_f64());
    }

    match value.as_datetime() {
        Some(datetime) if datetime.time() == NaiveTime::MIN => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_number(value.as_f64()),
    }
}

/// 整數值的浮點數（年份欄常見）不帶 `.0`
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook as XlsxBook};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2019.0), "2019");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_read_sheets_in_order() {
        let mut book = XlsxBook::new();

        let mills = book.add_worksheet();
        mills.set_name("Mills").unwrap();
        for (col, header) in [" Item ", "Make", "Model", "Year", "S/N", "Specs"].iter().enumerate() {
            mills.write_string(0, col as u16, *header).unwrap();
        }
        mills.write_number(1, 0, 1.0).unwrap();
        mills.write_string(1, 1, "Haas").unwrap();
        mills.write_string(1, 2, "VF-2").unwrap();
        mills.write_number(1, 3, 2019.0).unwrap();
        mills.write_string(1, 4, "sn001").unwrap();
        mills.write_string(1, 5, "cnc mill").unwrap();

        let notes = book.add_worksheet();
        notes.set_name("Notes").unwrap();
        notes.write_string(0, 0, "Only a header").unwrap();

        let bytes = book.save_to_buffer().unwrap();
        let workbook = XlsxWorkbookReader::new().read("stock.xlsx", &bytes).unwrap();

        assert_eq!(workbook.sheets.len(), 2);
        let first = &workbook.sheets[0];
        assert_eq!(first.name, "Mills");
        assert_eq!(first.columns[0], "Item");
        assert_eq!(first.rows.len(), 1);
        assert_eq!(first.rows[0][0], "1");
        assert_eq!(first.rows[0][3], "2019");
        assert_eq!(first.rows[0][5], "cnc mill");

        assert_eq!(workbook.sheets[1].name, "Notes");
        assert!(workbook.sheets[1].is_empty());
    }

    #[test]
    fn test_empty_leading_column_keeps_positions() {
        let mut book = XlsxBook::new();
        let sheet = book.add_worksheet();
        for (col, header) in ["Make", "Model", "Year", "S/N", "Specs"].iter().enumerate() {
            sheet.write_string(0, col as u16 + 1, *header).unwrap();
        }
        sheet.write_string(1, 1, "Okuma").unwrap();
        sheet.write_string(1, 5, "lathe").unwrap();

        let bytes = book.save_to_buffer().unwrap();
        let workbook = XlsxWorkbookReader::new().read("stock.xlsx", &bytes).unwrap();
        let sheet = &workbook.sheets[0];

        assert_eq!(sheet.columns.len(), 6);
        assert_eq!(sheet.columns[0], "");
        assert_eq!(sheet.rows[0][1], "Okuma");
        assert_eq!(sheet.rows[0][5], "lathe");
    }

    #[test]
    fn test_date_cells_render_as_dates() {
        let mut book = XlsxBook::new();
        let sheet = book.add_worksheet();
        for (col, header) in ["Item", "Make", "Model", "Year", "S/N", "Specs"].iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }

        let year_only = Format::new().set_num_format("yyyy");
        let stamped = Format::new().set_num_format("yyyy-mm-dd hh:mm");
        let new_year = ExcelDateTime::from_ymd(2019, 1, 1).unwrap();
        let delivered = ExcelDateTime::from_ymd(2021, 6, 15)
            .unwrap()
            .and_hms(10, 30, 0)
            .unwrap();
        sheet.write_datetime_with_format(1, 3, &new_year, &year_only).unwrap();
        sheet.write_datetime_with_format(2, 3, &delivered, &stamped).unwrap();

        let bytes = book.save_to_buffer().unwrap();
        let workbook = XlsxWorkbookReader::new().read("stock.xlsx", &bytes).unwrap();
        let rows = &workbook.sheets[0].rows;

        assert_eq!(rows[0][3], "2019-01-01");
        assert_eq!(rows[1][3], "2021-06-15 10:30:00");
    }

    #[test]
    fn test_unreadable_bytes() {
        let result = XlsxWorkbookReader::new().read("broken.xlsx", b"not a workbook");
        assert!(result.is_err());
    }
}
