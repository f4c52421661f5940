use crate::adapters::{reader_for_path, DocxWriter};
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult, Workbook};
use crate::domain::ports::DocumentWriter;
use crate::domain::services::{Aggregator, Canonicalizer, Vocabulary};
use crate::utils::error::Result;
use serde::Serialize;
use std::path::Path;

pub const PREVIEW_FILE_NAME: &str = "preview.json";

#[derive(Debug, Serialize)]
struct PreviewPayload<'a> {
    preview: &'a [String],
}

pub struct InventoryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    aggregator: Aggregator,
    writer: Box<dyn DocumentWriter>,
}

impl<S: Storage, C: ConfigProvider> InventoryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_vocabulary(storage, config, Vocabulary::default())
    }

    pub fn with_vocabulary(storage: S, config: C, vocabulary: Vocabulary) -> Self {
        Self {
            storage,
            config,
            aggregator: Aggregator::new(Canonicalizer::new(vocabulary)),
            writer: Box::new(DocxWriter::new()),
        }
    }

    pub fn with_writer(mut self, writer: Box<dyn DocumentWriter>) -> Self {
        self.writer = writer;
        self
    }

    fn output_location(&self, file_name: &str) -> String {
        Path::new(self.config.output_path())
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for InventoryPipeline<S, C> {
    async fn extract(&self) -> Result<Workbook> {
        let input = self.config.input_path();
        let reader = reader_for_path(input)?;

        tracing::debug!("Reading input file: {}", input);
        let bytes = self.storage.read_file(input).await?;

        reader.read(input, &bytes)
    }

    async fn transform(&self, workbook: Workbook) -> Result<TransformResult> {
        let template = self.config.template();
        tracing::debug!("Using template: {}", template);

        let rows_processed = workbook
            .sheets
            .iter()
            .map(|sheet| sheet.data_rows().count())
            .sum();
        let document = self.aggregator.build_listing(&workbook, template)?;

        Ok(TransformResult {
            document,
            rows_processed,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<Vec<String>> {
        let mode = self.config.output_mode();
        let mut outputs = Vec::new();

        if mode.writes_preview() {
            let lines = result.document.preview_lines();
            let json = serde_json::to_string_pretty(&PreviewPayload { preview: &lines })?;

            tracing::debug!("Writing preview with {} lines", lines.len());
            self.storage
                .write_file(PREVIEW_FILE_NAME, json.as_bytes())
                .await?;
            outputs.push(self.output_location(PREVIEW_FILE_NAME));
        }

        if mode.writes_document() {
            let data = self.writer.render(&result.document)?;
            let file_name = self.writer.file_name();

            tracing::debug!("Writing {} ({} bytes)", file_name, data.len());
            self.storage.write_file(file_name, &data).await?;
            outputs.push(self.output_location(file_name));
        }

        Ok(outputs)
    }
}
