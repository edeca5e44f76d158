use async_trait::async_trait;

use crate::common::{debug, Result};
use crate::request::Request;
use crate::strategy::{Challenge, Options, Outcome, Strategy};
use crate::verify::PasswordVerifier;

const MISSING_CREDENTIALS: &str = "Missing credentials";
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Username and password taken from form fields or the query string.
pub struct Local<V> {
    verifier: V,
    username_field: String,
    password_field: String,
}

impl<V> Local<V> {
    pub const NAME: &'static str = "local";
    pub const DEFAULT_USERNAME_FIELD: &'static str = "username";
    pub const DEFAULT_PASSWORD_FIELD: &'static str = "password";

    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            username_field: Self::DEFAULT_USERNAME_FIELD.to_owned(),
            password_field: Self::DEFAULT_PASSWORD_FIELD.to_owned(),
        }
    }

    pub fn set_username_field(&mut self, val: &mut Option<String>) {
        if let Some(val) = val.take() {
            self.username_field = val
        }
    }

    pub fn set_password_field(&mut self, val: &mut Option<String>) {
        if let Some(val) = val.take() {
            self.password_field = val
        }
    }
}

#[async_trait]
impl<V> Strategy for Local<V>
where
    V: PasswordVerifier + 'static,
{
    fn name(&self) -> Option<&str> {
        Some(Self::NAME)
    }

    async fn authenticate(&self, request: &Request, options: &Options) -> Result<Outcome> {
        let username = request.param(&self.username_field).unwrap_or_default();
        let password = request.param(&self.password_field).unwrap_or_default();

        if username.is_empty() || password.is_empty() {
            let message = options
                .bad_request_message
                .as_deref()
                .unwrap_or(MISSING_CREDENTIALS);
            return Ok(Outcome::fail_status(Some(Challenge::new(message)), 400));
        }

        debug!(user=?username, "Try authenticate");
        match self.verifier.verify_password(username, password).await? {
            Some(principal) => Ok(Outcome::success(principal)),
            None => Ok(Outcome::fail_with(INVALID_CREDENTIALS)),
        }
    }
}
