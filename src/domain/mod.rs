mod email_list;
mod form_input;
mod raw_file;
mod resolved_request;
mod session_duration;
mod submission_outcome;
mod voice;

pub use email_list::normalize_emails;
pub use form_input::FormInput;
pub use raw_file::{MediaType, PDF_MIME, PLAIN_TEXT_MIME, RawFile, WORD_DOCUMENT_MIME};
pub use resolved_request::ResolvedRequest;
pub use session_duration::{
    CUSTOM_DURATION_LABEL, DEFAULT_DURATION_LABEL, DURATION_OPTIONS, DurationOption,
    SESSION_MINUTES_RANGE, SessionDurationError, resolve_session_minutes,
};
pub use submission_outcome::{
    InvalidField, ServiceFailure, ServiceFailureKind, Submission, SubmissionOutcome,
};
pub use voice::{VOICE_OPTIONS, VoiceOption, default_voice, resolve_voice_id};
