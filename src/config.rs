// Runtime configuration, loaded once at startup.

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Base URL of the Play Store frontend. Overridable (APP_BASE_URL) so
    /// integration tests can point the client at a local mock server.
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Directory CSV exports land in when --output is not given.
    pub output_dir: String,
    /// Review count used when --count is not given.
    pub default_count: u32,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Config::builder()
            .set_default("base_url", "https://play.google.com")?
            .set_default(
                "user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
            )?
            .set_default("request_timeout_secs", 30)?
            .set_default("output_dir", "output")?
            .set_default("default_count", 100)?
            // Load from a configuration file (e.g., config.toml)
            .add_source(File::with_name("config").required(false))
            // Load from environment variables (e.g., APP_BASE_URL)
            .add_source(Environment::with_prefix("APP"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
