/// A selectable synthesized voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceOption {
    pub label: &'static str,
    pub voice_id: &'static str,
}

pub const VOICE_OPTIONS: [VoiceOption; 6] = [
    VoiceOption {
        label: "Ava",
        voice_id: "en-US-AvaMultilingualNeural",
    },
    VoiceOption {
        label: "Andrew",
        voice_id: "en-US-AndrewMultilingualNeural",
    },
    VoiceOption {
        label: "Aarav",
        voice_id: "en-IN-AaravNeural",
    },
    VoiceOption {
        label: "Aashi",
        voice_id: "en-IN-AashiNeural",
    },
    VoiceOption {
        label: "Ezinne",
        voice_id: "en-NG-EzinneNeural",
    },
    VoiceOption {
        label: "Abeo",
        voice_id: "en-NG-AbeoNeural",
    },
];

pub fn default_voice() -> VoiceOption {
    VOICE_OPTIONS[0]
}

/// Exact label lookup; surrounding whitespace is not significant.
pub fn resolve_voice_id(label: &str) -> Option<&'static str> {
    let label = label.trim();
    VOICE_OPTIONS
        .iter()
        .find(|option| option.label == label)
        .map(|option| option.voice_id)
}
