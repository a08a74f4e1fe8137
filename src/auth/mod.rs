pub mod session;

pub use crate::domain::ports::{IdentitySession, SessionError, TokenProvider};
pub use session::{InMemorySession, SessionTokenProvider};

use async_trait::async_trait;

/// Never attaches a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

#[async_trait]
impl TokenProvider for NoToken {
    async fn current_token(&self) -> Option<String> {
        None
    }
}

/// Fixed token, e.g. supplied on the command line.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn current_token(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token() {
        tokio_test::block_on(async {
            assert_eq!(
                StaticToken::new("abc").current_token().await.as_deref(),
                Some("abc")
            );
            assert_eq!(StaticToken::new("").current_token().await, None);
            assert_eq!(NoToken.current_token().await, None);
        });
    }
}
