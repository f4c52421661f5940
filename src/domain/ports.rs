use crate::domain::model::{ListingDocument, OutputMode, Template, TransformResult, Workbook};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn template(&self) -> Template;
    fn output_mode(&self) -> OutputMode;
}

/// 試算表讀取器：把上傳的位元組轉成具名工作表
pub trait WorkbookReader: Send + Sync {
    fn read(&self, source_name: &str, bytes: &[u8]) -> Result<Workbook>;
}

/// 文件輸出器：把清單序列化成可下載的檔案
pub trait DocumentWriter: Send + Sync {
    fn file_name(&self) -> &str;
    fn render(&self, document: &ListingDocument) -> Result<Vec<u8>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Workbook>;
    async fn transform(&self, workbook: Workbook) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<Vec<String>>;
}
