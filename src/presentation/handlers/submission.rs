use axum::Json;
use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{AdvisorClient, TextExtractor};
use crate::domain::{FormInput, RawFile, ServiceFailure, Submission, SubmissionOutcome};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

const ROOM_READY_MESSAGE: &str = "Connected! You can now join the room.";
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl SubmissionResponse {
    fn new(status: &'static str, message: String, warnings: Vec<String>) -> Self {
        Self {
            status,
            message,
            room_url: None,
            field: None,
            status_code: None,
            body: None,
            warnings,
        }
    }
}

/// Maps a submission onto the HTTP status and body shown to the form.
pub fn submission_response(submission: Submission) -> (StatusCode, SubmissionResponse) {
    let Submission { outcome, warnings } = submission;

    match outcome {
        SubmissionOutcome::RoomReady { room_url } => {
            let mut response =
                SubmissionResponse::new("room_ready", ROOM_READY_MESSAGE.to_string(), warnings);
            response.room_url = Some(room_url);
            (StatusCode::OK, response)
        }
        SubmissionOutcome::ValidationError { field } => {
            let mut response = SubmissionResponse::new(
                "validation_error",
                field.user_message().to_string(),
                warnings,
            );
            response.field = Some(field.as_str());
            (StatusCode::UNPROCESSABLE_ENTITY, response)
        }
        SubmissionOutcome::ServiceError(failure) => {
            let message = failure.user_message();
            let ServiceFailure {
                status_code, body, ..
            } = failure;
            let mut response = SubmissionResponse::new("service_error", message, warnings);
            response.status_code = Some(status_code);
            response.body = Some(body);
            (StatusCode::BAD_GATEWAY, response)
        }
        SubmissionOutcome::TransportError { message } => (
            StatusCode::SERVICE_UNAVAILABLE,
            SubmissionResponse::new(
                "transport_error",
                format!("An error occurred: {message}"),
                warnings,
            ),
        ),
    }
}

/// A multipart body that could not be read, with the status it maps to.
struct FormError {
    status: StatusCode,
    message: String,
}

impl FormError {
    fn new(context: &str, error: MultipartError) -> Self {
        Self {
            status: error.status(),
            message: format!("{context}: {}", error.body_text()),
        }
    }
}

async fn read_upload(field: Field<'_>) -> Result<Option<RawFile>, FormError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let media_type = field
        .content_type()
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
        .to_string();

    let bytes = field
        .bytes()
        .await
        .map_err(|e| FormError::new("Failed to read file", e))?;

    // Browsers send an empty, unnamed part when no file was chosen.
    if filename.is_empty() && bytes.is_empty() {
        return Ok(None);
    }

    tracing::debug!(
        filename = %filename,
        media_type = %media_type,
        bytes = bytes.len(),
        "Roadmap file received"
    );

    Ok(Some(RawFile::new(filename, media_type, bytes.to_vec())))
}

async fn read_form(multipart: &mut Multipart) -> Result<FormInput, FormError> {
    let mut input = FormInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| FormError::new("Failed to read multipart", e))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "roadmap_file" {
            input.uploaded_document = read_upload(field).await?;
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| FormError::new(&format!("Failed to read field {name}"), e))?;

        match name.as_str() {
            "behavior_prompt" => input.behavior_prompt = value,
            "roadmap_text" => input.roadmap_text = value,
            "emails" => input.emails_raw = value,
            "voice" => input.voice_selection = value,
            "meeting_duration" if !value.trim().is_empty() => {
                input.meeting_duration_selection = Some(value)
            }
            "custom_minutes" if !value.trim().is_empty() => {
                input.custom_minutes = value.trim().parse().ok();
                if input.custom_minutes.is_none() {
                    tracing::debug!(value = %value, "Ignoring non-numeric custom minutes");
                }
            }
            "meeting_duration" | "custom_minutes" => {}
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    Ok(input)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn submission_handler<E, C>(
    State(state): State<AppState<E, C>>,
    mut multipart: Multipart,
) -> Response
where
    E: TextExtractor + ?Sized + 'static,
    C: AdvisorClient + ?Sized + 'static,
{
    let input = match read_form(&mut multipart).await {
        Ok(input) => input,
        Err(FormError { status, message }) => {
            tracing::warn!(status = %status, error = %message, "Rejected unreadable submission");
            return (status, Json(ErrorResponse { error: message })).into_response();
        }
    };

    tracing::info!(
        behavior_prompt = %sanitize_prompt(&input.behavior_prompt),
        has_upload = input.uploaded_document.is_some(),
        "Submission received"
    );

    let submission = state.submission_service.submit(input).await;
    let (status, body) = submission_response(submission);

    (status, Json(body)).into_response()
}
