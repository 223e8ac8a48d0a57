use std::env;

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OUTPUT_PREFIX: &str = "summary";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_endpoint: String,
    pub openai_model: String,
    /// Key prefix inside the source bucket under which summary JSON is written.
    pub output_prefix: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_endpoint: env::var("OPENAI_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_OPENAI_ENDPOINT.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            output_prefix: env::var("OUTPUT_PREFIX")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PREFIX.to_string()),
        })
    }
}
