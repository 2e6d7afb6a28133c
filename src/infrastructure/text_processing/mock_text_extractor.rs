use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::RawFile;

pub struct MockTextExtractor;

#[async_trait::async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract_text(&self, file: &RawFile) -> Result<String, ExtractionError> {
        String::from_utf8(file.bytes.clone())
            .map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))
    }
}
