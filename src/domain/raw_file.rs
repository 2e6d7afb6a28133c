use std::fmt;

pub const PDF_MIME: &str = "application/pdf";
pub const PLAIN_TEXT_MIME: &str = "text/plain";
pub const WORD_DOCUMENT_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// An uploaded roadmap document, exactly as it was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub filename: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    PlainText,
    Pdf,
    WordDocument,
    Unsupported,
}

impl MediaType {
    /// Classifies a declared media type. Parameters such as `charset` are ignored.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim();

        if essence.eq_ignore_ascii_case(PLAIN_TEXT_MIME) {
            Self::PlainText
        } else if essence.eq_ignore_ascii_case(PDF_MIME) {
            Self::Pdf
        } else if essence.eq_ignore_ascii_case(WORD_DOCUMENT_MIME) {
            Self::WordDocument
        } else {
            Self::Unsupported
        }
    }

    pub fn as_mime(&self) -> Option<&'static str> {
        match self {
            Self::PlainText => Some(PLAIN_TEXT_MIME),
            Self::Pdf => Some(PDF_MIME),
            Self::WordDocument => Some(WORD_DOCUMENT_MIME),
            Self::Unsupported => None,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PlainText => "plain text",
            Self::Pdf => "PDF",
            Self::WordDocument => "Word document",
            Self::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

impl RawFile {
    pub fn new(filename: String, media_type: String, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            media_type,
            bytes,
        }
    }

    pub fn kind(&self) -> MediaType {
        MediaType::from_mime(&self.media_type)
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}
