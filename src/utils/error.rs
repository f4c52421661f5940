use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Sheet '{sheet}' has {found} columns, at least {required} are required")]
    MissingColumnsError {
        sheet: String,
        found: usize,
        required: usize,
    },

    #[error("Workbook could not be read: {0}")]
    WorkbookError(#[from] calamine::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unsupported input format: {path}")]
    UnsupportedInputError { path: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Document error: {message}")]
    DocumentError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，讓邊界層不必解析錯誤字串就能決定回應方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 上傳的資料本身有問題（欄位不足、無法解析）
    MalformedInput,
    /// 外部協作者失敗（檔案系統、文件序列化）
    Collaborator,
    Configuration,
}

impl ListingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListingError::MissingColumnsError { .. }
            | ListingError::WorkbookError(_)
            | ListingError::CsvError(_)
            | ListingError::UnsupportedInputError { .. } => ErrorKind::MalformedInput,
            ListingError::ZipError(_)
            | ListingError::IoError(_)
            | ListingError::SerializationError(_)
            | ListingError::DocumentError { .. } => ErrorKind::Collaborator,
            ListingError::ConfigError { .. } | ListingError::InvalidConfigValueError { .. } => {
                ErrorKind::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.kind() {
            ErrorKind::MalformedInput => format!("The uploaded inventory could not be processed: {}", self),
            ErrorKind::Collaborator => format!("Writing the inventory listing failed: {}", self),
            ErrorKind::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Configuration => 1,
            ErrorKind::MalformedInput => 2,
            ErrorKind::Collaborator => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListingError>;
