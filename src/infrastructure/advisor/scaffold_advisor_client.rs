use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{AdvisorClient, AdvisorClientError, AdvisorResponse};
use crate::domain::ResolvedRequest;

/// Offline stand-in for the advisor service that always opens a fake room.
pub struct ScaffoldAdvisorClient {
    room_base_url: String,
    response_delay: Duration,
}

impl ScaffoldAdvisorClient {
    pub fn new(room_base_url: &str, response_delay: Duration) -> Self {
        Self {
            room_base_url: room_base_url.trim_end_matches('/').to_string(),
            response_delay,
        }
    }
}

#[async_trait]
impl AdvisorClient for ScaffoldAdvisorClient {
    async fn create_room(
        &self,
        request: &ResolvedRequest,
    ) -> Result<AdvisorResponse, AdvisorClientError> {
        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }

        let room_url = format!("{}/{}", self.room_base_url, Uuid::new_v4());
        tracing::info!(
            room_url = %room_url,
            session_time = request.session_time_minutes(),
            "Scaffold mode: returning synthetic room"
        );

        Ok(AdvisorResponse {
            status: 200,
            body: serde_json::json!({ "room_url": room_url }).to_string(),
        })
    }
}
