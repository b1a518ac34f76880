use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Default location of the config file, without extension
pub const DEFAULT_CONFIG_PATH: &str = "config/meeting-desk";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub polling: PollingConfig,
    pub stub: StubConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base address of the meetings API
    pub base_url: String,

    /// Per-request timeout
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Delay between refreshes of a meeting that is still processing
    pub interval_ms: u64,

    /// Give up polling after this long; unset polls for as long as the view lives
    pub max_duration_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StubConfig {
    pub http: HttpConfig,

    /// Simulated analysis time per meeting
    pub analysis_delay_ms: u64,

    /// Content longer than this is marked as failed
    pub max_content_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn max_duration(&self) -> Option<Duration> {
        self.max_duration_secs.map(Duration::from_secs)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            max_duration_secs: None,
        }
    }
}

impl Config {
    /// Load built-in defaults, then the optional file at `path`, then
    /// `MEETING_DESK_*` environment variables (e.g. `MEETING_DESK_API__BASE_URL`).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("api.base_url", "http://localhost:5000")?
            .set_default("api.timeout_secs", 30)?
            .set_default("polling.interval_ms", 3000)?
            .set_default("stub.http.bind", "127.0.0.1")?
            .set_default("stub.http.port", 5000)?
            .set_default("stub.analysis_delay_ms", 5000)?
            .set_default("stub.max_content_len", 100_000)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("MEETING_DESK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        let config: Self = settings
            .try_deserialize()
            .with_context(|| format!("Invalid config in {}", path))?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.polling.interval_ms == 0 {
            bail!("polling.interval_ms must be greater than 0");
        }
        Ok(())
    }
}
