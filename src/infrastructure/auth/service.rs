//! Registry authenticator

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::config::AuthConfig;
use crate::domain::{parse_allow, AllowPolicy, AuthError, Credentials, RegistryAuthPlugin};
use crate::infrastructure::identity::IdentityProvider;

/// Authenticator orchestrating credential decoding, identity verification
/// and the allow-list decision.
///
/// The allow policy is parsed once at construction and never mutated, so
/// one service instance can serve any number of concurrent authenticate
/// calls without locks.
#[derive(Debug)]
pub struct AuthService<P: IdentityProvider> {
    provider: P,
    policy: AllowPolicy,
    ttl: Duration,
}

impl<P: IdentityProvider> AuthService<P> {
    pub fn new(provider: P, config: &AuthConfig) -> Self {
        let policy = parse_allow(&config.allow);
        info!(allow = ?policy, "Allow policy configured");

        Self {
            provider,
            policy,
            ttl: config.ttl(),
        }
    }

    /// The configured allow policy
    pub fn policy(&self) -> &AllowPolicy {
        &self.policy
    }

    /// Configured decision lifetime. Carried from configuration for hosts
    /// that cache decisions; nothing in this crate consumes it.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[async_trait]
impl<P: IdentityProvider> RegistryAuthPlugin for AuthService<P> {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Vec<String>, AuthError> {
        let credentials = Credentials::new(username, password);
        let email = credentials.email();

        let memberships = self.provider.verify(&credentials.authorization()).await?;
        let authorized = self.policy.authorized_teams(&memberships);

        info!(
            email = %email,
            teams = ?memberships.teams(),
            authorized = ?authorized,
            "Authentication completed"
        );

        Ok(authorized)
    }

    async fn add_user(&self, username: &str, password: &str) -> Result<Vec<String>, AuthError> {
        self.authenticate(username, password).await
    }
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use super::*;
    use crate::domain::TeamMemberships;

    /// Identity provider returning canned results keyed by the
    /// Authorization header value. Unknown credentials are denied with 401.
    #[derive(Debug, Default)]
    pub struct MockIdentityProvider {
        memberships: RwLock<HashMap<String, Vec<(String, String)>>>,
        denials: RwLock<HashMap<String, (u16, String)>>,
    }

    impl MockIdentityProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_memberships(self, authorization: &str, pairs: &[(&str, &str)]) -> Self {
            self.memberships.write().unwrap().insert(
                authorization.to_string(),
                pairs
                    .iter()
                    .map(|(team, role)| (team.to_string(), role.to_string()))
                    .collect(),
            );
            self
        }

        pub fn with_denial(self, authorization: &str, status: u16, reason: &str) -> Self {
            self.denials
                .write()
                .unwrap()
                .insert(authorization.to_string(), (status, reason.to_string()));
            self
        }
    }

    #[async_trait]
    impl IdentityProvider for MockIdentityProvider {
        async fn verify(&self, authorization: &str) -> Result<TeamMemberships, AuthError> {
            if let Some((status, reason)) = self.denials.read().unwrap().get(authorization) {
                return Err(AuthError::denied(*status, reason.as_str()));
            }

            self.memberships
                .read()
                .unwrap()
                .get(authorization)
                .map(|pairs| pairs.iter().cloned().collect())
                .ok_or_else(|| AuthError::denied(401, "Unauthorized"))
        }
    }
}
