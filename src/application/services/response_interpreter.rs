use serde::Deserialize;

use crate::application::ports::AdvisorResponse;
use crate::domain::{ServiceFailure, ServiceFailureKind, SubmissionOutcome};

const SUCCESS_STATUS: u16 = 200;

#[derive(Deserialize)]
struct RoomResponse {
    #[serde(default)]
    room_url: Option<serde_json::Value>,
}

/// Maps an advisor reply onto a submission outcome.
///
/// Only status 200 counts as success, and only when the body carries a
/// non-empty string `room_url`.
pub fn interpret_response(response: AdvisorResponse) -> SubmissionOutcome {
    if response.status != SUCCESS_STATUS {
        return SubmissionOutcome::ServiceError(ServiceFailure {
            status_code: response.status,
            body: response.body,
            kind: ServiceFailureKind::UnexpectedStatus,
        });
    }

    let parsed: RoomResponse = match serde_json::from_str(&response.body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "Advisor returned a non-JSON success body");
            return SubmissionOutcome::ServiceError(ServiceFailure {
                status_code: response.status,
                body: response.body,
                kind: ServiceFailureKind::MalformedBody,
            });
        }
    };

    match parsed.room_url {
        Some(serde_json::Value::String(room_url)) if !room_url.is_empty() => {
            SubmissionOutcome::RoomReady { room_url }
        }
        _ => SubmissionOutcome::ServiceError(ServiceFailure {
            status_code: response.status,
            body: response.body,
            kind: ServiceFailureKind::MissingRoomUrl,
        }),
    }
}
