use std::collections::HashSet;

use serde::Deserialize;

use crate::common::{ErrorKind, Result};
use crate::strategy::Local;
use crate::verify::Directory;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub users: Vec<UserEntry>,
    #[serde(default)]
    pub local: LocalConfig,
    #[serde(default)]
    pub bearer: BearerConfig,
    // Register the anonymous strategy.
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UserEntry {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub tokens: Vec<String>,
}

// Form field names read by the local strategy.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct LocalConfig {
    pub username_field: Option<String>,
    pub password_field: Option<String>,
}

impl LocalConfig {
    /// Field the local strategy reads the username from.
    pub fn username_field(&self) -> &str {
        self.username_field
            .as_deref()
            .unwrap_or(Local::<Directory>::DEFAULT_USERNAME_FIELD)
    }

    pub fn password_field(&self) -> &str {
        self.password_field
            .as_deref()
            .unwrap_or(Local::<Directory>::DEFAULT_PASSWORD_FIELD)
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct BearerConfig {
    pub realm: Option<String>,
    #[serde(default)]
    pub scope: Vec<String>,
}

impl Config {
    pub fn from_yaml(s: &str) -> Result<Self> {
        let config = serde_yaml::from_str::<Config>(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject ambiguous user entries.
    pub fn validate(&self) -> Result<()> {
        let mut usernames = HashSet::new();
        let mut tokens = HashSet::new();

        for user in &self.users {
            if user.username.is_empty() {
                return Err(ErrorKind::Config("empty username".into()).into());
            }
            if !usernames.insert(user.username.as_str()) {
                return Err(
                    ErrorKind::Config(format!("duplicate username {}", user.username)).into(),
                );
            }
            for token in &user.tokens {
                if !tokens.insert(token.as_str()) {
                    return Err(ErrorKind::Config(format!(
                        "token of user {} is already assigned",
                        user.username
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_yaml() {
        let config = Config::from_yaml(
            r#"
users:
  - username: alice
    password: wonderland
    tokens: ["t0k3n"]
  - username: bob
    password: builder
local:
  username_field: email
bearer:
  realm: api
  scope: [read]
anonymous: true
"#,
        )
        .unwrap();

        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].tokens, vec!["t0k3n".to_owned()]);
        assert!(config.users[1].tokens.is_empty());
        assert_eq!(config.local.username_field.as_deref(), Some("email"));
        assert_eq!(config.local.password_field, None);
        assert_eq!(config.local.username_field(), "email");
        assert_eq!(config.local.password_field(), "password");
        assert_eq!(config.bearer.realm.as_deref(), Some("api"));
        assert_eq!(config.bearer.scope, vec!["read".to_owned()]);
        assert!(config.anonymous);
    }

    #[test]
    fn defaults() {
        let config = Config::from_yaml("users: []").unwrap();

        assert!(config.users.is_empty());
        assert!(!config.anonymous);
        assert!(config.bearer.realm.is_none());
    }

    #[test]
    fn reject_duplicates() {
        let err = Config::from_yaml(
            r#"
users:
  - { username: alice, password: a }
  - { username: alice, password: b }
"#,
        )
        .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Config(_)));

        let err = Config::from_yaml(
            r#"
users:
  - { username: alice, password: a, tokens: [x] }
  - { username: bob, password: b, tokens: [x] }
"#,
        )
        .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Config(_)));
    }
}
