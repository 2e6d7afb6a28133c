mod http_advisor_client;
mod scaffold_advisor_client;
mod wire;

pub use http_advisor_client::{DEFAULT_ADVISOR_ENDPOINT, HttpAdvisorClient};
pub use scaffold_advisor_client::ScaffoldAdvisorClient;
pub use wire::AdvisorPayload;
