pub mod advisor;
pub mod observability;
pub mod text_processing;
