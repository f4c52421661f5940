use crate::domain::model::{
    AggregateRecord, GroupKey, InputRow, ListingDocument, ListingSection, NormalizedRow, Template,
    Workbook,
};
use crate::domain::services::canonicalizer::Canonicalizer;
use crate::utils::error::Result;
use std::collections::HashMap;

/// Groups duplicate equipment rows and renders one listing line per group.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    canonicalizer: Canonicalizer,
}

impl Aggregator {
    pub fn new(canonicalizer: Canonicalizer) -> Self {
        Self { canonicalizer }
    }

    pub fn normalize(&self, row: &InputRow) -> NormalizedRow {
        NormalizedRow {
            year: row.year.trim().to_string(),
            make: row.make.trim().to_string(),
            model: row.model.trim().to_string(),
            description: self.canonicalizer.canonicalize_description(&row.description),
            serial: row.serial.trim().to_uppercase(),
        }
    }

    /// 依 (year, make, model, description) 分組；群組順序與序號順序都依第一次出現
    pub fn group<I>(&self, rows: I) -> Vec<AggregateRecord>
    where
        I: IntoIterator<Item = NormalizedRow>,
    {
        let mut positions: HashMap<GroupKey, usize> = HashMap::new();
        let mut records: Vec<AggregateRecord> = Vec::new();

        for row in rows {
            let key = row.key();
            match positions.get(&key) {
                Some(&index) => records[index].serials.push(row.serial),
                None => {
                    positions.insert(key.clone(), records.len());
                    records.push(AggregateRecord {
                        key,
                        serials: vec![row.serial],
                    });
                }
            }
        }

        records
    }

    pub fn render(&self, record: &AggregateRecord, template: Template) -> String {
        let key = &record.key;
        let quantity_prefix = if record.quantity() > 1 {
            format!("({}) ", record.quantity())
        } else {
            String::new()
        };
        let formatted_model = self
            .canonicalizer
            .canonicalize(&format!("{} {}", key.make, key.model));
        let mut serial_str = format!("S/N: {}", record.serials.join(", ").to_uppercase());

        match template {
            Template::DateAfterSn => {
                if !key.year.is_empty() {
                    serial_str.push_str(&format!(", New in {}", key.year));
                }
                format!(
                    "{}{}, {}, {}",
                    quantity_prefix, formatted_model, key.description, serial_str
                )
            }
            Template::Standard => format!(
                "{}{} {}, {}, {}",
                quantity_prefix, key.year, formatted_model, key.description, serial_str
            ),
        }
    }

    pub fn aggregate_records(&self, rows: &[InputRow]) -> Vec<AggregateRecord> {
        self.group(rows.iter().map(|row| self.normalize(row)))
    }

    pub fn aggregate(&self, rows: &[InputRow], template: Template) -> Vec<String> {
        self.aggregate_records(rows)
            .iter()
            .map(|record| self.render(record, template))
            .collect()
    }

    /// Builds one section per non-empty sheet, in workbook order.
    ///
    /// Fails on the first sheet that lacks the required columns; nothing is
    /// returned for the sheets that did succeed.
    pub fn build_listing(&self, workbook: &Workbook, template: Template) -> Result<ListingDocument> {
        let mut sections = Vec::new();

        for sheet in &workbook.sheets {
            if sheet.is_empty() {
                tracing::debug!("Skipping empty sheet '{}'", sheet.name);
                continue;
            }

            let rows = sheet.input_rows()?;
            let lines = self.aggregate(&rows, template);
            tracing::debug!(
                "Sheet '{}': {} rows grouped into {} lines",
                sheet.name,
                rows.len(),
                lines.len()
            );

            sections.push(ListingSection {
                heading: sheet.name.clone(),
                lines,
            });
        }

        Ok(ListingDocument::new(sections))
    }
}
