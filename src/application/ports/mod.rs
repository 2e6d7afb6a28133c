mod advisor_client;
mod text_extractor;

pub use advisor_client::{AdvisorClient, AdvisorClientError, AdvisorResponse};
pub use text_extractor::{ExtractionError, TextExtractor};
