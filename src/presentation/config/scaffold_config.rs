/// Configuration for scaffold mode, where no real advisor service is called.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub enabled: bool,
    pub mock_response_delay_ms: u64,
    pub room_base_url: String,
}

pub const DEFAULT_SCAFFOLD_ROOM_URL: &str = "http://localhost:3000/rooms";

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            enabled: std::env::var("SCAFFOLD_MODE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
            mock_response_delay_ms: std::env::var("MOCK_RESPONSE_DELAY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            room_base_url: std::env::var("SCAFFOLD_ROOM_URL")
                .unwrap_or_else(|_| DEFAULT_SCAFFOLD_ROOM_URL.to_string()),
        }
    }
}
