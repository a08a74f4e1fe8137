use async_trait::async_trait;
use thiserror::Error;

/// Source of the bearer token attached to each request.
///
/// Called once per request; implementations must not fail. "No token" is a
/// normal answer and the request then goes out unauthenticated.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn current_token(&self) -> Option<String>;
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("identity session is not initialized")]
    NotInitialized,

    #[error("could not refresh id token: {0}")]
    Refresh(String),
}

/// The external identity provider's session, as seen by this crate.
///
/// Unlike [`TokenProvider`] this may fail; wrap it in
/// [`SessionTokenProvider`](crate::auth::SessionTokenProvider) to use it
/// with the client.
#[async_trait]
pub trait IdentitySession: Send + Sync {
    /// Token of the signed-in user, `Ok(None)` when nobody is signed in.
    async fn id_token(&self) -> std::result::Result<Option<String>, SessionError>;
}
