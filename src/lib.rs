pub mod config;
pub mod error;
pub mod language;
pub mod llm;
pub mod middleware;
pub mod pipeline;
pub mod routes;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

pub use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm_client: Arc<llm::LlmClient>,
}
