use async_trait::async_trait;

use crate::domain::RawFile;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, file: &RawFile) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("file is {size_bytes} bytes, limit is {limit_bytes} bytes")]
    TooLarge { size_bytes: u64, limit_bytes: u64 },
}
