use async_trait::async_trait;
use log::{debug, error};
use std::sync::Arc;

use super::session_model::{Credentials, NewAccount, SignupForm, User};
use super::session_traits::{AuthGatewayTrait, AuthServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Login and signup against the invoice API.
pub struct AuthService {
    gateway: Arc<dyn AuthGatewayTrait>,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn AuthGatewayTrait>) -> Self {
        Self { gateway }
    }

    fn require(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                field.to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, email: &str, password: &str) -> Result<User> {
        Self::require("email", email)?;
        Self::require("password", password)?;

        let user = self
            .gateway
            .login(Credentials {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .await
            .map_err(|e| {
                error!("Login error: {}", e);
                e
            })?;
        debug!("Signed in as {}", user.display_name());
        Ok(user)
    }

    async fn signup(&self, form: &SignupForm) -> Result<User> {
        if form.password != form.confirm_password {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Passwords do not match".to_string(),
            )));
        }
        Self::require("email", &form.email)?;
        Self::require("password", &form.password)?;

        self.gateway
            .signup(NewAccount {
                name: form.username.trim().to_string(),
                email: form.email.trim().to_string(),
                password: form.password.clone(),
            })
            .await
            .map_err(|e| {
                error!("Signup error: {}", e);
                e
            })
    }
}
