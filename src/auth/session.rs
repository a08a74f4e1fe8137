use crate::domain::ports::{IdentitySession, SessionError, TokenProvider};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Adapts a fallible identity session to [`TokenProvider`].
///
/// A missing session or a failed token lookup degrades to "no token"; the
/// request still goes out. Failures are logged so a misconfigured provider
/// does not go unnoticed.
pub struct SessionTokenProvider<S: IdentitySession> {
    session: Option<S>,
}

impl<S: IdentitySession> SessionTokenProvider<S> {
    pub fn new(session: S) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn unconfigured() -> Self {
        tracing::info!("Identity session not configured, requests will be sent without a token");
        Self { session: None }
    }

    pub fn is_configured(&self) -> bool {
        self.session.is_some()
    }
}

#[async_trait]
impl<S: IdentitySession> TokenProvider for SessionTokenProvider<S> {
    async fn current_token(&self) -> Option<String> {
        let session = self.session.as_ref()?;

        match session.id_token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Identity session unavailable, continuing without token: {}", e);
                None
            }
        }
    }
}

/// Session handle shared between the sign-in flow and the API client.
///
/// Cloning shares state. The token is read on every call, so a sign-out is
/// visible to the very next request.
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    token: Arc<RwLock<Option<String>>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sign_in(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    pub async fn sign_out(&self) {
        *self.token.write().await = None;
    }

    pub async fn is_signed_in(&self) -> bool {
        self.token.read().await.is_some()
    }
}

#[async_trait]
impl IdentitySession for InMemorySession {
    async fn id_token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSession;

    #[async_trait]
    impl IdentitySession for BrokenSession {
        async fn id_token(&self) -> Result<Option<String>, SessionError> {
            Err(SessionError::NotInitialized)
        }
    }

    #[tokio::test]
    async fn test_failing_session_yields_no_token() {
        let provider = SessionTokenProvider::new(BrokenSession);
        assert!(provider.is_configured());
        assert_eq!(provider.current_token().await, None);
    }

    #[tokio::test]
    async fn test_unconfigured_session_yields_no_token() {
        let provider = SessionTokenProvider::<InMemorySession>::unconfigured();
        assert!(!provider.is_configured());
        assert_eq!(provider.current_token().await, None);
    }

    #[tokio::test]
    async fn test_sign_in_and_out_is_seen_by_provider() {
        let session = InMemorySession::new();
        let provider = SessionTokenProvider::new(session.clone());

        assert_eq!(provider.current_token().await, None);

        session.sign_in("id-token-1").await;
        assert!(session.is_signed_in().await);
        assert_eq!(provider.current_token().await.as_deref(), Some("id-token-1"));

        session.sign_out().await;
        assert_eq!(provider.current_token().await, None);
    }
}
