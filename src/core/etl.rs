use crate::core::Pipeline;
use crate::utils::error::Result;

/// 一次執行的結果：預覽行與寫出的檔案
#[derive(Debug, Clone, Default)]
pub struct ListingOutcome {
    pub preview_lines: Vec<String>,
    pub output_paths: Vec<String>,
}

pub struct ListingEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ListingEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ListingOutcome> {
        tracing::info!("Starting inventory listing run");

        // Extract
        let workbook = self.pipeline.extract().await?;
        tracing::info!("Read {} sheets", workbook.sheets.len());

        // Transform
        let result = self.pipeline.transform(workbook).await?;
        tracing::info!(
            "Grouped {} rows into {} listing lines",
            result.rows_processed,
            result.document.line_count()
        );
        let preview_lines = result.document.preview_lines();

        // Load
        let output_paths = self.pipeline.load(result).await?;
        for path in &output_paths {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(ListingOutcome {
            preview_lines,
            output_paths,
        })
    }
}
