//! Caller authentication against the identity service

mod bearer;
mod error;
mod identity;

use async_trait::async_trait;
use reo_core::Caller;

pub use bearer::bearer_token;
pub use error::AuthError;
pub use identity::IdentityClient;

/// Verifies a bearer token and resolves the caller it was issued to
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token`, returning the caller on success
    async fn verify(&self, token: &str) -> Result<Caller, AuthError>;
}
