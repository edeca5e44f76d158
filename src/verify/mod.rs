use async_trait::async_trait;

use crate::common::Result;
use crate::principal::Principal;

mod directory;
pub use self::directory::Directory;

/// Checks a username and password pair.
///
/// `Ok(None)` means the credentials were rejected, `Err` that the check itself
/// could not be performed.
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    async fn verify_password(&self, username: &str, password: &str) -> Result<Option<Principal>>;
}

/// Resolves a bearer token to its owner.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_token(&self, token: &str) -> Result<Option<Principal>>;
}
