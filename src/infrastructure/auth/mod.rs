//! Authenticator orchestrating the identity client and the allow policy

mod service;

pub use service::AuthService;
