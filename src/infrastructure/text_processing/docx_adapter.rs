use std::io::{Cursor, Read};
use std::time::Duration;

use async_trait::async_trait;
use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{MediaType, RawFile};

use super::pdf_adapter::DEFAULT_EXTRACTION_TIMEOUT;

const DOCUMENT_PART: &str = "word/document.xml";
const WORDPROCESSING_NS: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Reads the body paragraphs of an OOXML word-processing document.
///
/// Every direct child paragraph of `w:body` is emitted followed by `\n`.
/// Paragraphs inside tables, content controls and text boxes are skipped, as
/// is anything that is not run text.
pub struct DocxAdapter {
    timeout: Duration,
}

impl Default for DocxAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxAdapter {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn read_document_part(data: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to open document package: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
        })?;

        Ok(xml)
    }

    /// Text of the direct `w:body` paragraphs. Only WordprocessingML elements
    /// count; DrawingML, math and other namespaces are ignored.
    pub fn paragraphs_text(xml: &str) -> Result<String, ExtractionError> {
        let mut reader = NsReader::from_str(xml);
        let mut text = String::new();
        let mut paragraph: Option<String> = None;
        let mut depth = 0usize;
        let mut body_depth: Option<usize> = None;
        let mut open_paragraphs = 0usize;
        let mut open_runs = 0usize;
        let mut in_text = false;

        loop {
            let (namespace, event) = reader.read_resolved_event().map_err(|e| {
                ExtractionError::ExtractionFailed(format!("malformed document XML: {e}"))
            })?;

            let wordprocessing = matches!(
                namespace,
                ResolveResult::Bound(Namespace(ns)) if ns == WORDPROCESSING_NS
            );

            match event {
                Event::Start(e) => {
                    depth += 1;
                    if wordprocessing {
                        let body_child = body_depth.is_some_and(|b| depth == b + 1);
                        match e.local_name().as_ref() {
                            b"body" if body_depth.is_none() => body_depth = Some(depth),
                            b"p" => {
                                open_paragraphs += 1;
                                if body_child {
                                    paragraph = Some(String::new());
                                }
                            }
                            b"r" => open_runs += 1,
                            b"t" => in_text = true,
                            _ => {}
                        }
                    }
                }
                Event::End(e) => {
                    if wordprocessing {
                        let body_child = body_depth.is_some_and(|b| depth == b + 1);
                        match e.local_name().as_ref() {
                            b"p" => {
                                open_paragraphs = open_paragraphs.saturating_sub(1);
                                if body_child {
                                    if let Some(content) = paragraph.take() {
                                        text.push_str(&content);
                                        text.push('\n');
                                    }
                                }
                            }
                            b"r" => open_runs = open_runs.saturating_sub(1),
                            b"t" => in_text = false,
                            _ => {}
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Empty(e) if wordprocessing => {
                    let body_child = body_depth == Some(depth);
                    let in_own_run = open_paragraphs == 1 && open_runs > 0;
                    match (e.local_name().as_ref(), paragraph.as_mut()) {
                        (b"p", _) if body_child => text.push('\n'),
                        (b"tab", Some(content)) if in_own_run => content.push('\t'),
                        (b"br" | b"cr", Some(content)) if in_own_run => content.push('\n'),
                        _ => {}
                    }
                }
                // Nested paragraphs (text boxes) belong to another story.
                Event::Text(t) if in_text && open_paragraphs == 1 => {
                    if let Some(content) = paragraph.as_mut() {
                        let unescaped = t.unescape().map_err(|e| {
                            ExtractionError::ExtractionFailed(format!(
                                "invalid text in document XML: {e}"
                            ))
                        })?;
                        content.push_str(&unescaped);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(text)
    }

    fn extract(data: &[u8]) -> Result<String, ExtractionError> {
        let xml = Self::read_document_part(data)?;
        Self::paragraphs_text(&xml)
    }
}

#[async_trait]
impl TextExtractor for DocxAdapter {
    #[tracing::instrument(
        skip(self, file),
        fields(
            filename = %file.filename,
            size_bytes = file.size_bytes(),
        )
    )]
    async fn extract_text(&self, file: &RawFile) -> Result<String, ExtractionError> {
        if file.kind() != MediaType::WordDocument {
            return Err(ExtractionError::UnsupportedMediaType(file.media_type.clone()));
        }

        let data = file.bytes.clone();

        let text = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract(&data)),
        )
        .await
        .map_err(|_| {
            ExtractionError::ExtractionFailed("Word document extraction timed out".to_string())
        })?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            line_count = text.lines().count(),
            "Word document text extraction complete"
        );

        Ok(text)
    }
}
