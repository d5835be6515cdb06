use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub platform: PlatformConfig,
    pub benchmark: BenchmarkConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform API (executor + metrics store).
    pub base_url: String,
    /// Per-request timeout. Must cover the function execution timeout the
    /// backend enforces (up to 300s), so the default leaves headroom.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    330
}

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkConfig {
    /// Iterations used when the compare request does not specify a count.
    pub default_iterations: u32,
    /// Upper bound on requested iterations (each iteration runs the function
    /// twice against the backend).
    pub max_iterations: u32,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.platform.base_url.is_empty(),
            "platform.base_url must be non-empty"
        );
        anyhow::ensure!(
            self.platform.request_timeout_secs > 0,
            "platform.request_timeout_secs must be > 0, got {}",
            self.platform.request_timeout_secs
        );
        anyhow::ensure!(
            self.benchmark.default_iterations > 0,
            "benchmark.default_iterations must be > 0, got {}",
            self.benchmark.default_iterations
        );
        anyhow::ensure!(
            self.benchmark.max_iterations >= self.benchmark.default_iterations,
            "benchmark.max_iterations must be >= benchmark.default_iterations ({}), got {}",
            self.benchmark.default_iterations,
            self.benchmark.max_iterations
        );
        Ok(())
    }
}
