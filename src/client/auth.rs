//! Request authorization.

use async_trait::async_trait;

use crate::client::error::ClientError;
use crate::lifecycle::Context;

/// Supplies bearer tokens for Resource Manager.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn token(&self, ctx: &Context) -> Result<String, ClientError>;
}

/// A fixed token, typically read from the environment.
#[derive(Clone)]
pub struct StaticTokenAuthorizer {
    token: String,
}

impl StaticTokenAuthorizer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Read the token from the environment variable `var`.
    pub fn from_env(var: &str) -> Result<Self, ClientError> {
        match std::env::var(var) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token.trim())),
            _ => Err(ClientError::Auth(format!(
                "environment variable {var} is not set"
            ))),
        }
    }
}

impl std::fmt::Debug for StaticTokenAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenAuthorizer")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Authorizer for StaticTokenAuthorizer {
    async fn token(&self, _ctx: &Context) -> Result<String, ClientError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token() {
        let auth = StaticTokenAuthorizer::new("abc");
        assert_eq!(auth.token(&Context::new()).await.unwrap(), "abc");
        assert!(!format!("{auth:?}").contains("abc"));
    }

    #[test]
    fn test_missing_env_var() {
        let err = StaticTokenAuthorizer::from_env("ARM_CLIENT_TEST_UNSET_TOKEN").unwrap_err();
        assert!(err.to_string().contains("ARM_CLIENT_TEST_UNSET_TOKEN"));
    }
}
