//! Server settings.
//!
//! Values start from built-in defaults and can be overridden with
//! `CSV_DEMO_*` environment variables, e.g. `CSV_DEMO_PORT=9000` or
//! `CSV_DEMO_OPEN_BROWSER=false`.

use ::config::{Config, ConfigError, Environment};
use log::debug;
use serde::Deserialize;

const ENV_PREFIX: &str = "CSV_DEMO";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the served page once the server is up.
    pub open_browser: bool,
    /// Rows synthesized per streamed body chunk.
    pub chunk_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            chunk_rows: 512,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let settings: Settings = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("open_browser", defaults.open_browser)?
            .set_default("chunk_rows", defaults.chunk_rows as i64)?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
