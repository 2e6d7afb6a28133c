use super::session_duration::SESSION_MINUTES_RANGE;
use super::submission_outcome::InvalidField;

/// A validated advisor request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    behavior_prompt: String,
    roadmap: String,
    emails: Vec<String>,
    voice_id: String,
    session_time_minutes: u32,
}

impl ResolvedRequest {
    /// Rejects the first empty or out-of-range field in declaration order.
    pub fn try_new(
        behavior_prompt: String,
        roadmap: String,
        emails: Vec<String>,
        voice_id: String,
        session_time_minutes: u32,
    ) -> Result<Self, InvalidField> {
        if behavior_prompt.trim().is_empty() {
            return Err(InvalidField::BehaviorPrompt);
        }
        if roadmap.trim().is_empty() {
            return Err(InvalidField::Roadmap);
        }
        if emails.is_empty() || emails.iter().any(|email| email.trim().is_empty()) {
            return Err(InvalidField::Emails);
        }
        if voice_id.is_empty() {
            return Err(InvalidField::Voice);
        }
        if !SESSION_MINUTES_RANGE.contains(&session_time_minutes) {
            return Err(InvalidField::SessionTime);
        }

        Ok(Self {
            behavior_prompt,
            roadmap,
            emails,
            voice_id,
            session_time_minutes,
        })
    }

    pub fn behavior_prompt(&self) -> &str {
        &self.behavior_prompt
    }

    pub fn roadmap(&self) -> &str {
        &self.roadmap
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }

    pub fn session_time_minutes(&self) -> u32 {
        self.session_time_minutes
    }
}
