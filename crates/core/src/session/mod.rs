//! Session module - signed-in user context and auth services.

mod session_model;
mod session_service;
mod session_traits;

pub use session_model::{Credentials, NewAccount, Session, SignupForm, User};
pub use session_service::AuthService;
pub use session_traits::{AuthGatewayTrait, AuthServiceTrait};
