use async_trait::async_trait;

use crate::domain::ResolvedRequest;

/// Status and raw body of the advisor service's reply, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait AdvisorClient: Send + Sync {
    /// Sends one room request. Only transport-level failures are errors; every
    /// HTTP status is returned as a response.
    async fn create_room(
        &self,
        request: &ResolvedRequest,
    ) -> Result<AdvisorResponse, AdvisorClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AdvisorClientError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("transport failure: {0}")]
    Transport(String),
}
