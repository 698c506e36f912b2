//! Bitbucket team-membership authentication plugin for package registries
//!
//! Verifies a caller's username and password against the Bitbucket
//! privileges API and authorizes the caller's teams against a locally
//! configured allow list:
//! - Compact allow-list grammar (`teamA, teamB(dev|qa)`) parsed once at
//!   construction into an immutable policy
//! - Username-to-email decoding (`john..example.com` -> `john@example.com`)
//!   and Basic authorization encoding
//! - One privileges round trip per call, with typed network / denied /
//!   parse outcomes and no retries
//! - Async plugin surface (`authenticate`, `add_user`) for the registry host

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AuthConfig;
pub use domain::{
    AllowPolicy, AuthError, Credentials, RegistryAuthPlugin, TeamMemberships, TeamRule,
};
pub use infrastructure::auth::AuthService;
pub use infrastructure::identity::{BitbucketClient, IdentityProvider};

/// Authenticator wired to the real Bitbucket client
pub type BitbucketAuthService = AuthService<BitbucketClient>;

/// Create an authenticator backed by the Bitbucket privileges API.
///
/// This is the entry point a registry host calls once at startup; the
/// returned service is immutable and shareable across concurrent
/// authentication calls.
pub fn create_auth_service(config: &AuthConfig) -> Result<BitbucketAuthService, AuthError> {
    let client = BitbucketClient::from_config(&config.provider)?;
    Ok(AuthService::new(client, config))
}
