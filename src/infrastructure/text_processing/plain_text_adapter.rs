use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{MediaType, RawFile};

pub struct PlainTextAdapter;

impl PlainTextAdapter {
    /// Decodes UTF-8, dropping any byte sequence that is not valid UTF-8.
    pub fn decode_lossy(data: &[u8]) -> String {
        let mut text = String::with_capacity(data.len());
        for chunk in data.utf8_chunks() {
            text.push_str(chunk.valid());
        }
        text
    }
}

#[async_trait]
impl TextExtractor for PlainTextAdapter {
    async fn extract_text(&self, file: &RawFile) -> Result<String, ExtractionError> {
        if file.kind() != MediaType::PlainText {
            return Err(ExtractionError::UnsupportedMediaType(file.media_type.clone()));
        }

        Ok(Self::decode_lossy(&file.bytes))
    }
}
