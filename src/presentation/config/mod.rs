mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::{DEFAULT_SCAFFOLD_ROOM_URL, ScaffoldConfig};
pub use settings::{
    AdvisorSettings, ExtractionSettings, LoggingSettings, ServerSettings, Settings,
};
