use serde::Serialize;

use crate::domain::ResolvedRequest;

/// JSON body accepted by the advisor service.
#[derive(Debug, Serialize)]
pub struct AdvisorPayload<'a> {
    pub behavior_prompt: &'a str,
    pub roadmap: &'a str,
    pub emails: &'a [String],
    pub voice_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_time: Option<u32>,
}

impl<'a> AdvisorPayload<'a> {
    pub fn from_request(request: &'a ResolvedRequest, include_session_time: bool) -> Self {
        Self {
            behavior_prompt: request.behavior_prompt(),
            roadmap: request.roadmap(),
            emails: request.emails(),
            voice_id: request.voice_id(),
            session_time: include_session_time.then(|| request.session_time_minutes()),
        }
    }
}
