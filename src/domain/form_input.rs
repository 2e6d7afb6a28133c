use super::raw_file::RawFile;

/// Raw values collected by the intake form for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub behavior_prompt: String,
    pub roadmap_text: String,
    /// Takes precedence over `roadmap_text` when present.
    pub uploaded_document: Option<RawFile>,
    pub emails_raw: String,
    pub voice_selection: String,
    pub meeting_duration_selection: Option<String>,
    /// Only consulted when the duration selection is `Custom`.
    pub custom_minutes: Option<u32>,
}
