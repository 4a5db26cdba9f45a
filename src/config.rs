use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub api_key_secret: Option<String>,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
    pub request_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            api_key_secret: None,
            openai_api_key: String::new(),
            openai_base_url: crate::llm::openai::DEFAULT_BASE_URL.to_string(),
            otel_service_name: "discovery-insights".to_string(),
            otel_exporter_endpoint: "http://localhost:4317".to_string(),
            request_timeout_secs: 300,
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            port: env::var("APP_PORT")
                .map(|v| v.parse().expect("APP_PORT must be a number"))
                .unwrap_or(defaults.port),
            environment: env::var("APP_ENVIRONMENT").unwrap_or(defaults.environment),
            // An empty secret would authorize requests that omit the header.
            api_key_secret: env::var("API_KEY_SECRET").ok().filter(|s| !s.is_empty()),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or(defaults.openai_api_key),
            openai_base_url: env::var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            otel_service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or(defaults.otel_service_name),
            otel_exporter_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or(defaults.otel_exporter_endpoint),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .map(|v| v.parse().expect("REQUEST_TIMEOUT_SECS must be a number"))
                .unwrap_or(defaults.request_timeout_secs),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a number"))
                .unwrap_or(defaults.max_upload_bytes),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
