use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{MediaType, RawFile};

use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

pub struct CompositeTextExtractor {
    adapters: HashMap<MediaType, Arc<dyn TextExtractor>>,
    max_file_size_bytes: Option<u64>,
}

impl CompositeTextExtractor {
    pub fn new(adapters: Vec<(MediaType, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
            max_file_size_bytes: None,
        }
    }

    /// Plain text, PDF and Word document adapters sharing one parse timeout.
    pub fn standard(timeout: Duration) -> Self {
        let plain_text: Arc<dyn TextExtractor> = Arc::new(PlainTextAdapter);
        let pdf: Arc<dyn TextExtractor> = Arc::new(PdfAdapter::with_timeout(timeout));
        let word: Arc<dyn TextExtractor> = Arc::new(DocxAdapter::with_timeout(timeout));

        Self::new(vec![
            (MediaType::PlainText, plain_text),
            (MediaType::Pdf, pdf),
            (MediaType::WordDocument, word),
        ])
    }

    pub fn with_max_file_size(mut self, max_file_size_bytes: u64) -> Self {
        self.max_file_size_bytes = Some(max_file_size_bytes);
        self
    }
}

#[async_trait]
impl TextExtractor for CompositeTextExtractor {
    async fn extract_text(&self, file: &RawFile) -> Result<String, ExtractionError> {
        let adapter = self
            .adapters
            .get(&file.kind())
            .ok_or_else(|| ExtractionError::UnsupportedMediaType(file.media_type.clone()))?;

        if let Some(limit_bytes) = self.max_file_size_bytes {
            let size_bytes = file.size_bytes();
            if size_bytes > limit_bytes {
                return Err(ExtractionError::TooLarge {
                    size_bytes,
                    limit_bytes,
                });
            }
        }

        tracing::debug!(media_type = %file.kind(), filename = %file.filename, "Dispatching extraction");

        adapter.extract_text(file).await
    }
}
