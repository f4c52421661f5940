use crate::utils::error::{ListingError, Result};
use serde::{Deserialize, Serialize};

/// 一張工作表：標題列 + 資料列（皆已轉成文字）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Sheet {
    /// 非全空白的資料列
    pub fn data_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.rows
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
    }

    pub fn is_empty(&self) -> bool {
        self.data_rows().next().is_none()
    }

    /// Checks the column count once and maps every data row positionally.
    pub fn input_rows(&self) -> Result<Vec<InputRow>> {
        if self.columns.len() < InputRow::REQUIRED_COLUMNS {
            return Err(ListingError::MissingColumnsError {
                sheet: self.name.clone(),
                found: self.columns.len(),
                required: InputRow::REQUIRED_COLUMNS,
            });
        }

        Ok(self.data_rows().map(|row| InputRow::from_cells(row)).collect())
    }
}

/// 來源列。第 0 欄（項次）不參與處理。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    pub make: String,
    pub model: String,
    pub year: String,
    pub serial: String,
    pub description: String,
}

impl InputRow {
    pub const REQUIRED_COLUMNS: usize = 6;

    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |index: usize| cells.get(index).cloned().unwrap_or_default();
        Self {
            make: cell(1),
            model: cell(2),
            year: cell(3),
            serial: cell(4),
            description: cell(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub year: String,
    pub make: String,
    pub model: String,
    pub description: String,
    pub serial: String,
}

impl NormalizedRow {
    pub fn key(&self) -> GroupKey {
        GroupKey {
            year: self.year.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub year: String,
    pub make: String,
    pub model: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub key: GroupKey,
    pub serials: Vec<String>,
}

impl AggregateRecord {
    pub fn quantity(&self) -> usize {
        self.serials.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    #[default]
    Standard,
    DateAfterSn,
}

impl Template {
    /// 未知的名稱一律退回 `standard`
    pub fn from_name(name: &str) -> Self {
        match name {
            "date_after_sn" => Template::DateAfterSn,
            "standard" => Template::Standard,
            other => {
                tracing::warn!("Unknown template '{}', falling back to standard", other);
                Template::Standard
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Standard => "standard",
            Template::DateAfterSn => "date_after_sn",
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    Preview,
    Export,
    #[default]
    Both,
}

impl OutputMode {
    pub fn writes_preview(&self) -> bool {
        matches!(self, OutputMode::Preview | OutputMode::Both)
    }

    pub fn writes_document(&self) -> bool {
        matches!(self, OutputMode::Export | OutputMode::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSection {
    pub heading: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDocument {
    pub title: String,
    pub sections: Vec<ListingSection>,
}

impl ListingDocument {
    pub const DEFAULT_TITLE: &'static str = "Formatted Inventory";

    pub fn new(sections: Vec<ListingSection>) -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            sections,
        }
    }

    /// 預覽模式：所有工作表的行依序攤平
    pub fn preview_lines(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|section| section.lines.iter().cloned())
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|section| section.lines.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub document: ListingDocument,
    pub rows_processed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_input_row_from_cells_positional() {
        let row = InputRow::from_cells(&cells(&["1", "Haas", "VF-2", "2019", "sn001", "cnc mill"]));
        assert_eq!(row.make, "Haas");
        assert_eq!(row.model, "VF-2");
        assert_eq!(row.year, "2019");
        assert_eq!(row.serial, "sn001");
        assert_eq!(row.description, "cnc mill");
    }

    #[test]
    fn test_input_row_absent_cells_are_empty() {
        let row = InputRow::from_cells(&cells(&["1", "Haas"]));
        assert_eq!(row.make, "Haas");
        assert_eq!(row.model, "");
        assert_eq!(row.description, "");
    }

    #[test]
    fn test_sheet_requires_six_columns() {
        let sheet = Sheet {
            name: "Short".to_string(),
            columns: cells(&["Item", "Make", "Model"]),
            rows: vec![cells(&["1", "Haas", "VF-2"])],
        };

        match sheet.input_rows() {
            Err(ListingError::MissingColumnsError { sheet, found, required }) => {
                assert_eq!(sheet, "Short");
                assert_eq!(found, 3);
                assert_eq!(required, 6);
            }
            other => panic!("expected MissingColumnsError, got {:?}", other),
        }
    }

    #[test]
    fn test_sheet_skips_blank_rows() {
        let sheet = Sheet {
            name: "Mills".to_string(),
            columns: cells(&["Item", "Make", "Model", "Year", "S/N", "Specs"]),
            rows: vec![
                cells(&["", "", "", "", "", ""]),
                cells(&["1", "Haas", "VF-2", "2019", "A1", "mill"]),
                cells(&["  ", "", "", "", "", ""]),
            ],
        };

        assert!(!sheet.is_empty());
        assert_eq!(sheet.input_rows().unwrap().len(), 1);
    }

    #[test]
    fn test_header_only_sheet_is_empty() {
        let sheet = Sheet {
            name: "Empty".to_string(),
            columns: cells(&["Item", "Make"]),
            rows: vec![],
        };
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_template_from_name() {
        assert_eq!(Template::from_name("date_after_sn"), Template::DateAfterSn);
        assert_eq!(Template::from_name("standard"), Template::Standard);
        assert_eq!(Template::from_name("fancy"), Template::Standard);
        assert_eq!(Template::from_name(""), Template::Standard);
        assert_eq!(Template::from_name(" date_after_sn "), Template::Standard);
        assert_eq!(Template::from_name("DATE_AFTER_SN"), Template::Standard);
    }

    #[test]
    fn test_preview_lines_flatten_in_section_order() {
        let document = ListingDocument::new(vec![
            ListingSection {
                heading: "Mills".to_string(),
                lines: vec!["a".to_string(), "b".to_string()],
            },
            ListingSection {
                heading: "Lathes".to_string(),
                lines: vec!["c".to_string()],
            },
        ]);

        assert_eq!(document.title, "Formatted Inventory");
        assert_eq!(document.preview_lines(), vec!["a", "b", "c"]);
        assert_eq!(document.line_count(), 3);
    }
}
