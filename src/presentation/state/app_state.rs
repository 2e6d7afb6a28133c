use std::sync::Arc;

use crate::application::ports::{AdvisorClient, TextExtractor};
use crate::application::services::SubmissionService;

pub struct AppState<E, C>
where
    E: TextExtractor + ?Sized,
    C: AdvisorClient + ?Sized,
{
    pub submission_service: Arc<SubmissionService<E, C>>,
    /// Largest request body accepted on the submission route.
    pub upload_limit_bytes: usize,
}

impl<E, C> Clone for AppState<E, C>
where
    E: TextExtractor + ?Sized,
    C: AdvisorClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            submission_service: Arc::clone(&self.submission_service),
            upload_limit_bytes: self.upload_limit_bytes,
        }
    }
}
