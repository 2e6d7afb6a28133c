use std::time::Duration;

use solution_advisor::infrastructure::advisor::DEFAULT_ADVISOR_ENDPOINT;
use solution_advisor::presentation::{Environment, Settings};

#[test]
fn given_no_settings_file_when_loading_then_uses_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.advisor.endpoint, DEFAULT_ADVISOR_ENDPOINT);
    assert_eq!(settings.advisor.timeout(), Duration::from_secs(30));
    assert!(settings.advisor.include_session_time);
    assert_eq!(settings.extraction.max_file_size_bytes(), 20 * 1024 * 1024);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn given_default_server_settings_when_building_address_then_binds_all_interfaces() {
    let settings = Settings::load(Environment::Test).unwrap();

    let addr = settings.server.socket_addr().unwrap();

    assert_eq!(addr.to_string(), "0.0.0.0:3000");
}
