use pdf_oxide::PdfDocument;
use solution_advisor::application::ports::{ExtractionError, TextExtractor};
use solution_advisor::domain::{PDF_MIME, RawFile};
use solution_advisor::infrastructure::text_processing::PdfAdapter;

fn pdf_file(filename: &str, bytes: &[u8]) -> RawFile {
    RawFile::new(filename.to_string(), PDF_MIME.to_string(), bytes.to_vec())
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_pages_appear_in_order() {
    let adapter = PdfAdapter::new();
    let file = pdf_file("roadmap.pdf", include_bytes!("../../fixtures/roadmap.pdf"));

    let text = adapter.extract_text(&file).await.unwrap();

    let first = text.find("Week 1 kickoff").expect("first page text");
    let second = text.find("Week 2 rollout").expect("second page text");
    assert!(first < second);
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_page_texts_are_joined_without_separator() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/roadmap.pdf");
    let mut doc = PdfDocument::open(fixture).unwrap();
    let page_count = doc.page_count().unwrap();
    let pages: Vec<String> = (0..page_count)
        .map(|page_index| doc.extract_text(page_index).unwrap())
        .collect();
    let adapter = PdfAdapter::new();
    let file = pdf_file("roadmap.pdf", include_bytes!("../../fixtures/roadmap.pdf"));

    let text = adapter.extract_text(&file).await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(text, pages.concat());
    assert_eq!(text.len(), pages[0].len() + pages[1].len());
}

#[tokio::test]
async fn given_pdf_without_text_when_extracting_then_returns_blank_text() {
    let adapter = PdfAdapter::new();
    let file = pdf_file("blank.pdf", include_bytes!("../../fixtures/blank.pdf"));

    let text = adapter.extract_text(&file).await.unwrap();

    assert!(text.trim().is_empty());
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let file = pdf_file("corrupt.pdf", b"not a pdf at all");

    let result = adapter.extract_text(&file).await;

    assert!(matches!(result, Err(ExtractionError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_pdf_media_type_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let file = RawFile::new(
        "notes.txt".to_string(),
        "text/plain".to_string(),
        b"some data".to_vec(),
    );

    let result = adapter.extract_text(&file).await;

    assert!(matches!(
        result,
        Err(ExtractionError::UnsupportedMediaType(_))
    ));
}
