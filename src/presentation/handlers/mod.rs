mod health;
mod options;
mod submission;

pub use health::health_handler;
pub use options::options_handler;
pub use submission::{SubmissionResponse, submission_handler, submission_response};
