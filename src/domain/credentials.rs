//! Credential decoding and encoding

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};

/// A caller's transient credentials.
///
/// Never persisted. Debug output redacts the password so request-scoped
/// logging cannot leak it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The email address encoded in the username
    pub fn email(&self) -> String {
        decode_username_to_email(&self.username)
    }

    /// `Authorization` header value for the privileges call
    pub fn authorization(&self) -> String {
        basic_authorization(&self.email(), &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Decode a registry username to an email address.
///
/// The local part of an email address cannot contain `@` or end with a
/// dot, so an `@` stored as `..` is recoverable: replace the last `..`
/// with `@`. A username without `..` is returned unchanged.
pub fn decode_username_to_email(username: &str) -> String {
    match username.rfind("..") {
        Some(pos) => format!("{}@{}", &username[..pos], &username[pos + 2..]),
        None => username.to_string(),
    }
}

/// Standard Basic authorization header value: base64 of `email:password`
pub fn basic_authorization(email: &str, password: &str) -> String {
    let token = STANDARD.encode(format!("{}:{}", email, password));
    format!("Basic {}", token)
}
