use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use solution_advisor::application::ports::{
    AdvisorClient, AdvisorClientError, AdvisorResponse, ExtractionError, TextExtractor,
};
use solution_advisor::application::services::SubmissionService;
use solution_advisor::domain::{
    FormInput, InvalidField, RawFile, ResolvedRequest, ServiceFailure, ServiceFailureKind,
    SubmissionOutcome,
};
use solution_advisor::infrastructure::text_processing::MockTextExtractor;

enum Reply {
    Response(u16, &'static str),
    Timeout,
}

struct RecordingAdvisorClient {
    reply: Reply,
    requests: Mutex<Vec<ResolvedRequest>>,
}

impl RecordingAdvisorClient {
    fn responding(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Response(status, body),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn timing_out() -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Timeout,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_request(&self) -> ResolvedRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl AdvisorClient for RecordingAdvisorClient {
    async fn create_room(
        &self,
        request: &ResolvedRequest,
    ) -> Result<AdvisorResponse, AdvisorClientError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.reply {
            Reply::Response(status, body) => Ok(AdvisorResponse {
                status,
                body: body.to_string(),
            }),
            Reply::Timeout => Err(AdvisorClientError::Timeout(
                "operation timed out".to_string(),
            )),
        }
    }
}

struct FailingTextExtractor;

#[async_trait]
impl TextExtractor for FailingTextExtractor {
    async fn extract_text(&self, _file: &RawFile) -> Result<String, ExtractionError> {
        Err(ExtractionError::ExtractionFailed("corrupt archive".to_string()))
    }
}

fn service(
    client: Arc<RecordingAdvisorClient>,
) -> SubmissionService<MockTextExtractor, RecordingAdvisorClient> {
    SubmissionService::new(Arc::new(MockTextExtractor), client)
}

fn valid_input() -> FormInput {
    FormInput {
        behavior_prompt: "Explain onboarding".to_string(),
        roadmap_text: "Week 1: kickoff".to_string(),
        emails_raw: "a@x.com, b@y.com".to_string(),
        voice_selection: "Ava".to_string(),
        ..FormInput::default()
    }
}

fn text_upload(content: &str) -> RawFile {
    RawFile::new(
        "roadmap.txt".to_string(),
        "text/plain".to_string(),
        content.as_bytes().to_vec(),
    )
}

#[tokio::test]
async fn given_typed_roadmap_when_resolving_then_request_carries_text_and_emails() {
    let service = service(RecordingAdvisorClient::responding(200, "{}"));

    let request = service.resolve(valid_input()).await.unwrap();

    assert_eq!(request.behavior_prompt(), "Explain onboarding");
    assert_eq!(request.roadmap(), "Week 1: kickoff");
    assert_eq!(request.emails(), ["a@x.com", "b@y.com"]);
    assert_eq!(request.voice_id(), "en-US-AvaMultilingualNeural");
    assert_eq!(request.session_time_minutes(), 30);
}

#[tokio::test]
async fn given_empty_prompt_when_submitting_then_rejects_without_network_call() {
    let client = RecordingAdvisorClient::responding(200, r#"{"room_url":"https://room/1"}"#);
    let service = service(client.clone());
    let input = FormInput {
        behavior_prompt: String::new(),
        ..valid_input()
    };

    let submission = service.submit(input).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ValidationError {
            field: InvalidField::BehaviorPrompt
        }
    );
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn given_room_url_in_response_when_submitting_then_room_is_ready() {
    let client = RecordingAdvisorClient::responding(200, r#"{"room_url":"https://room/123"}"#);
    let service = service(client.clone());

    let submission = service.submit(valid_input()).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::RoomReady {
            room_url: "https://room/123".to_string()
        }
    );
    assert!(submission.warnings.is_empty());
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn given_empty_json_response_when_submitting_then_reports_missing_room_url() {
    let service = service(RecordingAdvisorClient::responding(200, "{}"));

    let submission = service.submit(valid_input()).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ServiceError(ServiceFailure {
            status_code: 200,
            body: "{}".to_string(),
            kind: ServiceFailureKind::MissingRoomUrl,
        })
    );
}

#[tokio::test]
async fn given_server_error_when_submitting_then_passes_status_and_body_through() {
    let service = service(RecordingAdvisorClient::responding(500, "internal error"));

    let submission = service.submit(valid_input()).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ServiceError(ServiceFailure {
            status_code: 500,
            body: "internal error".to_string(),
            kind: ServiceFailureKind::UnexpectedStatus,
        })
    );
}

#[tokio::test]
async fn given_messy_email_list_when_submitting_then_sends_normalized_addresses() {
    let client = RecordingAdvisorClient::responding(200, r#"{"room_url":"https://room/9"}"#);
    let service = service(client.clone());
    let input = FormInput {
        emails_raw: " a@x.com ,, b@y.com,".to_string(),
        ..valid_input()
    };

    service.submit(input).await;

    assert_eq!(client.last_request().emails(), ["a@x.com", "b@y.com"]);
}

#[tokio::test]
async fn given_transport_failure_when_submitting_then_returns_transport_error() {
    let client = RecordingAdvisorClient::timing_out();
    let service = service(client.clone());

    let submission = service.submit(valid_input()).await;

    match submission.outcome {
        SubmissionOutcome::TransportError { message } => {
            assert!(message.contains("timed out"))
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn given_upload_and_typed_roadmap_when_resolving_then_upload_wins() {
    let service = service(RecordingAdvisorClient::responding(200, "{}"));
    let input = FormInput {
        roadmap_text: "typed roadmap".to_string(),
        uploaded_document: Some(text_upload("uploaded roadmap")),
        ..valid_input()
    };

    let request = service.resolve(input).await.unwrap();

    assert_eq!(request.roadmap(), "uploaded roadmap");
}

#[tokio::test]
async fn given_unreadable_upload_when_submitting_then_roadmap_is_missing_with_warning() {
    let client = RecordingAdvisorClient::responding(200, r#"{"room_url":"https://room/1"}"#);
    let service = SubmissionService::new(Arc::new(FailingTextExtractor), client.clone());
    let input = FormInput {
        roadmap_text: "typed roadmap".to_string(),
        uploaded_document: Some(text_upload("ignored")),
        ..valid_input()
    };

    let submission = service.submit(input).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ValidationError {
            field: InvalidField::Roadmap
        }
    );
    assert_eq!(submission.warnings.len(), 1);
    assert!(submission.warnings[0].starts_with("Error reading file:"));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn given_whitespace_roadmap_when_submitting_then_roadmap_is_rejected() {
    let client = RecordingAdvisorClient::responding(200, "{}");
    let service = service(client.clone());
    let input = FormInput {
        roadmap_text: "  \n\t".to_string(),
        ..valid_input()
    };

    let submission = service.submit(input).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ValidationError {
            field: InvalidField::Roadmap
        }
    );
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn given_prompt_and_roadmap_missing_when_submitting_then_prompt_is_reported_first() {
    let service = service(RecordingAdvisorClient::responding(200, "{}"));
    let input = FormInput {
        behavior_prompt: " ".to_string(),
        roadmap_text: String::new(),
        emails_raw: String::new(),
        ..valid_input()
    };

    let submission = service.submit(input).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ValidationError {
            field: InvalidField::BehaviorPrompt
        }
    );
}

#[tokio::test]
async fn given_blank_emails_when_submitting_then_emails_are_rejected() {
    let client = RecordingAdvisorClient::responding(200, "{}");
    let service = service(client.clone());
    let input = FormInput {
        emails_raw: "   ".to_string(),
        ..valid_input()
    };

    let submission = service.submit(input).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ValidationError {
            field: InvalidField::Emails
        }
    );
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn given_only_separators_in_emails_when_submitting_then_emails_are_rejected() {
    let client = RecordingAdvisorClient::responding(200, "{}");
    let service = service(client.clone());
    let input = FormInput {
        emails_raw: " , ,".to_string(),
        ..valid_input()
    };

    let submission = service.submit(input).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ValidationError {
            field: InvalidField::Emails
        }
    );
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn given_unknown_voice_when_submitting_then_voice_is_rejected() {
    let client = RecordingAdvisorClient::responding(200, "{}");
    let service = service(client.clone());
    let input = FormInput {
        voice_selection: "Robot".to_string(),
        ..valid_input()
    };

    let submission = service.submit(input).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ValidationError {
            field: InvalidField::Voice
        }
    );
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn given_custom_duration_when_resolving_then_uses_custom_minutes() {
    let service = service(RecordingAdvisorClient::responding(200, "{}"));
    let input = FormInput {
        meeting_duration_selection: Some("Custom".to_string()),
        custom_minutes: Some(75),
        ..valid_input()
    };

    let request = service.resolve(input).await.unwrap();

    assert_eq!(request.session_time_minutes(), 75);
}

#[tokio::test]
async fn given_custom_duration_out_of_range_when_submitting_then_session_time_is_rejected() {
    let client = RecordingAdvisorClient::responding(200, "{}");
    let service = service(client.clone());
    let input = FormInput {
        meeting_duration_selection: Some("Custom".to_string()),
        custom_minutes: Some(1000),
        ..valid_input()
    };

    let submission = service.submit(input).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ValidationError {
            field: InvalidField::SessionTime
        }
    );
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn given_listed_duration_when_resolving_then_uses_table_minutes() {
    let service = service(RecordingAdvisorClient::responding(200, "{}"));
    let input = FormInput {
        meeting_duration_selection: Some("1 hour".to_string()),
        ..valid_input()
    };

    let request = service.resolve(input).await.unwrap();

    assert_eq!(request.session_time_minutes(), 60);
}

#[tokio::test]
async fn given_separator_only_emails_and_unknown_voice_when_submitting_then_emails_reported_first() {
    let client = RecordingAdvisorClient::responding(200, "{}");
    let service = service(client.clone());
    let input = FormInput {
        emails_raw: ",,".to_string(),
        voice_selection: "Nobody".to_string(),
        ..valid_input()
    };

    let submission = service.submit(input).await;

    assert_eq!(
        submission.outcome,
        SubmissionOutcome::ValidationError {
            field: InvalidField::Emails
        }
    );
    assert_eq!(client.calls(), 0);
}
