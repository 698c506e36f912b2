//! Registry plugin surface
//!
//! The host consumes the plugin through this trait. The completion is a
//! future rather than a callback: an error and a team list stay mutually
//! exclusive, and an `Ok` with an empty list means valid credentials with
//! no authorized teams.

use async_trait::async_trait;

use crate::domain::error::AuthError;

#[async_trait]
pub trait RegistryAuthPlugin: Send + Sync {
    /// Verify credentials and return the caller's authorized teams.
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Vec<String>, AuthError>;

    /// Host "register new user" hook. A successful authentication with
    /// any number of authorized teams counts as an accepted user add.
    async fn add_user(&self, username: &str, password: &str) -> Result<Vec<String>, AuthError>;
}
