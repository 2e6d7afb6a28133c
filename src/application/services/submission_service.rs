use std::sync::Arc;

use crate::application::ports::{AdvisorClient, TextExtractor};
use crate::domain::{
    FormInput, InvalidField, RawFile, ResolvedRequest, Submission, SubmissionOutcome,
    normalize_emails, resolve_session_minutes, resolve_voice_id,
};

use super::response_interpreter::interpret_response;

/// Roadmap content chosen for a submission, with the warning raised if an
/// upload could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapResolution {
    pub content: String,
    pub warning: Option<String>,
}

/// Why a form could not be turned into a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub field: InvalidField,
    pub warnings: Vec<String>,
}

pub struct SubmissionService<E, C>
where
    E: TextExtractor + ?Sized,
    C: AdvisorClient + ?Sized,
{
    text_extractor: Arc<E>,
    advisor_client: Arc<C>,
}

impl<E, C> SubmissionService<E, C>
where
    E: TextExtractor + ?Sized,
    C: AdvisorClient + ?Sized,
{
    pub fn new(text_extractor: Arc<E>, advisor_client: Arc<C>) -> Self {
        Self {
            text_extractor,
            advisor_client,
        }
    }

    /// An uploaded document always wins over typed roadmap text.
    pub async fn resolve_roadmap(
        &self,
        roadmap_text: &str,
        uploaded_document: Option<&RawFile>,
    ) -> RoadmapResolution {
        let Some(file) = uploaded_document else {
            return RoadmapResolution {
                content: roadmap_text.to_string(),
                warning: None,
            };
        };

        match self.text_extractor.extract_text(file).await {
            Ok(content) => RoadmapResolution {
                content,
                warning: None,
            },
            Err(e) => {
                tracing::warn!(
                    filename = %file.filename,
                    media_type = %file.media_type,
                    error = %e,
                    "Failed to read uploaded roadmap"
                );
                RoadmapResolution {
                    content: String::new(),
                    warning: Some(format!("Error reading file: {e}")),
                }
            }
        }
    }

    /// Validates the form and builds the outbound request without sending it.
    pub async fn resolve(&self, input: FormInput) -> Result<ResolvedRequest, Rejection> {
        let FormInput {
            behavior_prompt,
            roadmap_text,
            uploaded_document,
            emails_raw,
            voice_selection,
            meeting_duration_selection,
            custom_minutes,
        } = input;

        let roadmap = self
            .resolve_roadmap(&roadmap_text, uploaded_document.as_ref())
            .await;
        let warnings: Vec<String> = roadmap.warning.into_iter().collect();

        let reject = |field: InvalidField| Rejection {
            field,
            warnings: warnings.clone(),
        };

        if behavior_prompt.trim().is_empty() {
            return Err(reject(InvalidField::BehaviorPrompt));
        }
        if roadmap.content.trim().is_empty() {
            return Err(reject(InvalidField::Roadmap));
        }
        if emails_raw.trim().is_empty() {
            return Err(reject(InvalidField::Emails));
        }

        let emails = normalize_emails(&emails_raw);
        if emails.is_empty() {
            return Err(reject(InvalidField::Emails));
        }

        let voice_id = resolve_voice_id(&voice_selection).ok_or_else(|| {
            tracing::debug!(voice = %voice_selection, "Unknown voice selection");
            reject(InvalidField::Voice)
        })?;

        let session_time_minutes =
            resolve_session_minutes(meeting_duration_selection.as_deref(), custom_minutes)
                .map_err(|e| {
                    tracing::debug!(error = %e, "Invalid meeting duration");
                    reject(InvalidField::SessionTime)
                })?;

        ResolvedRequest::try_new(
            behavior_prompt,
            roadmap.content,
            emails,
            voice_id.to_string(),
            session_time_minutes,
        )
        .map_err(reject)
    }

    /// Runs one full submission: resolve, send once, interpret.
    #[tracing::instrument(skip(self, input), fields(has_upload = input.uploaded_document.is_some()))]
    pub async fn submit(&self, input: FormInput) -> Submission {
        let request = match self.resolve(input).await {
            Ok(request) => request,
            Err(rejection) => {
                tracing::info!(field = %rejection.field, "Submission rejected by validation");
                return Submission {
                    outcome: SubmissionOutcome::ValidationError {
                        field: rejection.field,
                    },
                    warnings: rejection.warnings,
                };
            }
        };

        tracing::info!(
            prompt_chars = request.behavior_prompt().chars().count(),
            roadmap_chars = request.roadmap().chars().count(),
            email_count = request.emails().len(),
            voice_id = %request.voice_id(),
            session_time = request.session_time_minutes(),
            "Submitting advisor request"
        );

        let outcome = match self.advisor_client.create_room(&request).await {
            Ok(response) => {
                tracing::debug!(status = response.status, "Advisor responded");
                interpret_response(response)
            }
            Err(e) => {
                tracing::error!(error = %e, "Advisor request failed");
                SubmissionOutcome::TransportError {
                    message: e.to_string(),
                }
            }
        };

        match &outcome {
            SubmissionOutcome::RoomReady { room_url } => {
                tracing::info!(room_url = %room_url, "Advisor room ready");
            }
            SubmissionOutcome::ServiceError(failure) => {
                tracing::warn!(
                    status_code = failure.status_code,
                    kind = ?failure.kind,
                    "Advisor service error"
                );
            }
            _ => {}
        }

        Submission {
            outcome,
            warnings: Vec::new(),
        }
    }
}
