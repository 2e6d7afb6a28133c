use std::ops::RangeInclusive;

pub const CUSTOM_DURATION_LABEL: &str = "Custom";
pub const DEFAULT_DURATION_LABEL: &str = "30 minutes";
pub const SESSION_MINUTES_RANGE: RangeInclusive<u32> = 5..=480;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationOption {
    pub label: &'static str,
    pub minutes: u32,
}

pub const DURATION_OPTIONS: [DurationOption; 8] = [
    DurationOption {
        label: "5 minutes",
        minutes: 5,
    },
    DurationOption {
        label: "10 minutes",
        minutes: 10,
    },
    DurationOption {
        label: "15 minutes",
        minutes: 15,
    },
    DurationOption {
        label: "20 minutes",
        minutes: 20,
    },
    DurationOption {
        label: "30 minutes",
        minutes: 30,
    },
    DurationOption {
        label: "45 minutes",
        minutes: 45,
    },
    DurationOption {
        label: "1 hour",
        minutes: 60,
    },
    DurationOption {
        label: "2 hours",
        minutes: 120,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionDurationError {
    #[error("unknown meeting duration: {0}")]
    UnknownLabel(String),
    #[error("custom meeting duration requires a number of minutes")]
    MissingCustomMinutes,
    #[error("custom meeting duration must be between 5 and 480 minutes, got {0}")]
    CustomOutOfRange(u32),
}

/// Resolves a duration selection to minutes.
///
/// `None` selects [`DEFAULT_DURATION_LABEL`]. The `Custom` label takes its value
/// from `custom_minutes`, which must fall inside [`SESSION_MINUTES_RANGE`].
pub fn resolve_session_minutes(
    selection: Option<&str>,
    custom_minutes: Option<u32>,
) -> Result<u32, SessionDurationError> {
    let label = selection.map(str::trim).unwrap_or(DEFAULT_DURATION_LABEL);

    if label == CUSTOM_DURATION_LABEL {
        let minutes = custom_minutes.ok_or(SessionDurationError::MissingCustomMinutes)?;
        if !SESSION_MINUTES_RANGE.contains(&minutes) {
            return Err(SessionDurationError::CustomOutOfRange(minutes));
        }
        return Ok(minutes);
    }

    DURATION_OPTIONS
        .iter()
        .find(|option| option.label == label)
        .map(|option| option.minutes)
        .ok_or_else(|| SessionDurationError::UnknownLabel(label.to_string()))
}
