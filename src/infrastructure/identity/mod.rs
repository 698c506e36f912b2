//! Identity provider access

mod client;

pub use client::{BitbucketClient, IdentityProvider};
