use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{AdvisorClient, AdvisorClientError, AdvisorResponse};
use crate::domain::ResolvedRequest;

use super::wire::AdvisorPayload;

pub const DEFAULT_ADVISOR_ENDPOINT: &str = "https://sol-advisor.cloudjiffy.net/";

pub struct HttpAdvisorClient {
    client: Client,
    endpoint: String,
    include_session_time: bool,
}

impl HttpAdvisorClient {
    pub fn new(
        endpoint: &str,
        timeout: Duration,
        include_session_time: bool,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            include_session_time,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn transport_error(error: reqwest::Error) -> AdvisorClientError {
    if error.is_timeout() {
        AdvisorClientError::Timeout(error.to_string())
    } else {
        AdvisorClientError::Transport(error.to_string())
    }
}

#[async_trait]
impl AdvisorClient for HttpAdvisorClient {
    #[tracing::instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn create_room(
        &self,
        request: &ResolvedRequest,
    ) -> Result<AdvisorResponse, AdvisorClientError> {
        let payload = AdvisorPayload::from_request(request, self.include_session_time);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        tracing::debug!(status, body_len = body.len(), "Advisor response received");

        Ok(AdvisorResponse { status, body })
    }
}
