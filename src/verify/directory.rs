use async_trait::async_trait;

use crate::common::{debug, Result};
use crate::config::UserEntry;
use crate::principal::Principal;
use crate::verify::{PasswordVerifier, TokenVerifier};

/// In memory user directory built from configured user entries.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: Vec<UserEntry>,
}

impl Directory {
    pub fn new(users: Vec<UserEntry>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl PasswordVerifier for Directory {
    async fn verify_password(&self, username: &str, password: &str) -> Result<Option<Principal>> {
        for user_entry in &self.users {
            if user_entry.username == username && user_entry.password == password {
                return Ok(Some(Principal::user(user_entry.username.clone())));
            }
        }
        debug!(user=?username, "Password rejected");
        Ok(None)
    }
}

#[async_trait]
impl TokenVerifier for Directory {
    async fn verify_token(&self, token: &str) -> Result<Option<Principal>> {
        let owner = self
            .users
            .iter()
            .find(|user_entry| user_entry.tokens.iter().any(|t| t == token));

        Ok(owner.map(|user_entry| Principal::user(user_entry.username.clone())))
    }
}
