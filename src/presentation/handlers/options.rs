use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{
    CUSTOM_DURATION_LABEL, DEFAULT_DURATION_LABEL, DURATION_OPTIONS, SESSION_MINUTES_RANGE,
    VOICE_OPTIONS, default_voice,
};

#[derive(Serialize)]
pub struct VoiceOptionResponse {
    pub label: &'static str,
    pub voice_id: &'static str,
}

#[derive(Serialize)]
pub struct DurationOptionResponse {
    pub label: &'static str,
    pub minutes: u32,
}

#[derive(Serialize)]
pub struct CustomDurationResponse {
    pub label: &'static str,
    pub min_minutes: u32,
    pub max_minutes: u32,
}

#[derive(Serialize)]
pub struct FormOptionsResponse {
    pub voices: Vec<VoiceOptionResponse>,
    pub default_voice: &'static str,
    pub durations: Vec<DurationOptionResponse>,
    pub default_duration: &'static str,
    pub custom_duration: CustomDurationResponse,
}

/// Selection tables the intake form renders its choices from.
pub async fn options_handler() -> impl IntoResponse {
    Json(FormOptionsResponse {
        voices: VOICE_OPTIONS
            .iter()
            .map(|v| VoiceOptionResponse {
                label: v.label,
                voice_id: v.voice_id,
            })
            .collect(),
        default_voice: default_voice().label,
        durations: DURATION_OPTIONS
            .iter()
            .map(|d| DurationOptionResponse {
                label: d.label,
                minutes: d.minutes,
            })
            .collect(),
        default_duration: DEFAULT_DURATION_LABEL,
        custom_duration: CustomDurationResponse {
            label: CUSTOM_DURATION_LABEL,
            min_minutes: *SESSION_MINUTES_RANGE.start(),
            max_minutes: *SESSION_MINUTES_RANGE.end(),
        },
    })
}
