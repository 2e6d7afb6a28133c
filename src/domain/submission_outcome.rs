use std::fmt;

/// The form field that stopped a submission before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidField {
    BehaviorPrompt,
    Roadmap,
    Emails,
    Voice,
    SessionTime,
}

impl InvalidField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BehaviorPrompt => "behavior_prompt",
            Self::Roadmap => "roadmap",
            Self::Emails => "emails",
            Self::Voice => "voice",
            Self::SessionTime => "session_time",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BehaviorPrompt => "Please enter a Behavior Prompt.",
            Self::Roadmap => "Please enter or upload a Roadmap.",
            Self::Emails => "Please enter an email address.",
            Self::Voice => "Please choose one of the available voices.",
            Self::SessionTime => "Please choose a meeting duration between 5 and 480 minutes.",
        }
    }
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFailureKind {
    UnexpectedStatus,
    MissingRoomUrl,
    MalformedBody,
}

/// A response from the advisor service that did not yield a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFailure {
    pub status_code: u16,
    pub body: String,
    pub kind: ServiceFailureKind,
}

impl ServiceFailure {
    pub fn user_message(&self) -> String {
        match self.kind {
            ServiceFailureKind::MissingRoomUrl => "Room URL not found in the response.".to_string(),
            ServiceFailureKind::MalformedBody => {
                "The advisor service returned an unreadable response.".to_string()
            }
            ServiceFailureKind::UnexpectedStatus => format!(
                "Error: Unable to connect. Status Code: {}",
                self.status_code
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    RoomReady { room_url: String },
    ServiceError(ServiceFailure),
    TransportError { message: String },
    ValidationError { field: InvalidField },
}

/// Result of one submission attempt plus any warnings raised on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub outcome: SubmissionOutcome,
    pub warnings: Vec<String>,
}
