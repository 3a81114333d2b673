use async_trait::async_trait;

use crate::errors::Result;
use crate::session::session_model::{Credentials, NewAccount, SignupForm, User};

/// Authentication endpoints of the invoice API.
#[async_trait]
pub trait AuthGatewayTrait: Send + Sync {
    async fn login(&self, credentials: Credentials) -> Result<User>;
    async fn signup(&self, account: NewAccount) -> Result<User>;
}

/// Trait for auth service operations
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User>;
    async fn signup(&self, form: &SignupForm) -> Result<User>;
}
