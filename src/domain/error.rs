use thiserror::Error;

/// Authentication pipeline errors
///
/// Every error terminates the current call; an error is never returned
/// alongside a partial team list.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Authentication denied: {status} {reason}")]
    Denied { status: u16, reason: String },

    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl AuthError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn denied(status: u16, reason: impl Into<String>) -> Self {
        Self::Denied {
            status,
            reason: reason.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// True for provider-side rejections; these must not be retried
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }
}
