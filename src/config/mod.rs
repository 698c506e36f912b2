mod app_config;

pub use app_config::{
    AuthConfig, ProviderConfig, DEFAULT_BITBUCKET_BASE_URL, DEFAULT_TTL_SECS,
};
