mod composite_text_extractor;
mod docx_adapter;
mod mock_text_extractor;
mod pdf_adapter;
mod plain_text_adapter;

pub use composite_text_extractor::CompositeTextExtractor;
pub use docx_adapter::DocxAdapter;
pub use mock_text_extractor::MockTextExtractor;
pub use pdf_adapter::{DEFAULT_EXTRACTION_TIMEOUT, PdfAdapter};
pub use plain_text_adapter::PlainTextAdapter;
