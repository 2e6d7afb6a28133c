use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use solution_advisor::application::ports::AdvisorClient;
use solution_advisor::application::services::SubmissionService;
use solution_advisor::infrastructure::advisor::{HttpAdvisorClient, ScaffoldAdvisorClient};
use solution_advisor::infrastructure::observability::{TracingConfig, init_tracing};
use solution_advisor::infrastructure::text_processing::CompositeTextExtractor;
use solution_advisor::presentation::{
    AppState, Environment, ScaffoldConfig, Settings, create_router,
};

fn advisor_client(
    settings: &Settings,
    scaffold: &ScaffoldConfig,
) -> anyhow::Result<Arc<dyn AdvisorClient>> {
    if scaffold.enabled {
        tracing::warn!(
            room_base_url = %scaffold.room_base_url,
            "Scaffold mode enabled: advisor service will not be called"
        );
        return Ok(Arc::new(ScaffoldAdvisorClient::new(
            &scaffold.room_base_url,
            Duration::from_millis(scaffold.mock_response_delay_ms),
        )));
    }

    let client = HttpAdvisorClient::new(
        &settings.advisor.endpoint,
        settings.advisor.timeout(),
        settings.advisor.include_session_time,
    )
    .context("failed to build advisor HTTP client")?;

    tracing::info!(
        endpoint = %client.endpoint(),
        timeout_secs = settings.advisor.timeout_secs,
        include_session_time = settings.advisor.include_session_time,
        "Advisor client configured"
    );

    Ok(Arc::new(client))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;
    let addr = settings
        .server
        .socket_addr()
        .context("invalid server host/port")?;

    let tracing_config = TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    );
    init_tracing(&tracing_config, addr);

    let scaffold = ScaffoldConfig::default();
    let advisor_client = advisor_client(&settings, &scaffold)?;

    let max_file_size_bytes = settings.extraction.max_file_size_bytes();
    let text_extractor = Arc::new(
        CompositeTextExtractor::standard(settings.extraction.timeout())
            .with_max_file_size(max_file_size_bytes),
    );

    let state = AppState {
        submission_service: Arc::new(SubmissionService::new(text_extractor, advisor_client)),
        upload_limit_bytes: usize::try_from(max_file_size_bytes).unwrap_or(usize::MAX),
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
