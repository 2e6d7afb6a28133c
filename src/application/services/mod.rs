mod response_interpreter;
mod submission_service;

pub use response_interpreter::interpret_response;
pub use submission_service::{Rejection, RoadmapResolution, SubmissionService};
