use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::domain::{AuthError, TeamMemberships};

/// Verifies credentials against an identity provider.
///
/// Either a complete membership map is returned or an error, never both.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange an `Authorization` header value for the caller's team
    /// memberships.
    async fn verify(&self, authorization: &str) -> Result<TeamMemberships, AuthError>;
}

/// Bitbucket privileges API client
#[derive(Debug, Clone)]
pub struct BitbucketClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PrivilegesResponse {
    teams: TeamMemberships,
}

impl BitbucketClient {
    pub fn from_config(config: &ProviderConfig) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AuthError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn privileges_url(&self) -> String {
        format!("{}/1.0/user/privileges", self.base_url)
    }
}

#[async_trait]
impl IdentityProvider for BitbucketClient {
    async fn verify(&self, authorization: &str) -> Result<TeamMemberships, AuthError> {
        let url = self.privileges_url();
        debug!(url = %url, "Verifying credentials against identity provider");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| AuthError::network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            return Err(AuthError::denied(status.as_u16(), reason));
        }

        let body: PrivilegesResponse = response.json().await.map_err(|e| {
            AuthError::parse(format!("Failed to parse privileges response: {}", e))
        })?;

        Ok(body.teams)
    }
}
