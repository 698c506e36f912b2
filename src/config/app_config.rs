use std::time::Duration;

use serde::Deserialize;

/// Seconds an authorization decision stays valid for hosts that cache
/// decisions. Nothing in this crate consumes it.
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Default host for the Bitbucket privileges API
pub const DEFAULT_BITBUCKET_BASE_URL: &str = "https://api.bitbucket.org";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Plugin configuration, consumed once at construction
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Allow-list grammar: comma-separated `team` or `team(role|role)` entries
    pub allow: String,

    /// Decision lifetime in seconds; reserved for a host-side cache
    #[serde(default = "default_ttl_secs", alias = "ttl")]
    pub ttl_secs: u64,

    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Identity provider endpoint settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,

    /// Request timeout in seconds for the privileges call
    pub timeout_secs: u64,
}

fn default_ttl_secs() -> u64 {
    DEFAULT_TTL_SECS
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BITBUCKET_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AuthConfig {
    /// Configuration with the given allow list and default provider settings
    pub fn new(allow: impl Into<String>) -> Self {
        Self {
            allow: allow.into(),
            ttl_secs: DEFAULT_TTL_SECS,
            provider: ProviderConfig::default(),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Load from layered config files and `AUTH`-prefixed environment
    /// variables (`AUTH__ALLOW`, `AUTH__PROVIDER__BASE_URL`, ...)
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("AUTH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
