mod user;
pub use user::User;

/// Identity a request ends up with after the strategy chain ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    AnonymousUser,
    User(User),
}

impl Principal {
    pub fn user(name: impl Into<String>) -> Self {
        Principal::User(User::new(name))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::User(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Principal::AnonymousUser => None,
            Principal::User(user) => Some(user.name.as_str()),
        }
    }

    // Record which strategy produced this principal.
    pub(crate) fn stamped(self, strategy: &str) -> Self {
        match self {
            Principal::User(user) => Principal::User(user.with_strategy(strategy)),
            anonymous => anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_is_not_authenticated() {
        assert!(!Principal::AnonymousUser.is_authenticated());
        assert_eq!(Principal::AnonymousUser.name(), None);
    }

    #[test]
    fn user_is_authenticated() {
        let principal = Principal::user("alice");
        assert!(principal.is_authenticated());
        assert_eq!(principal.name(), Some("alice"));
    }

    #[test]
    fn stamp_strategy() {
        match Principal::user("alice").stamped("local") {
            Principal::User(user) => assert_eq!(user.strategy.as_deref(), Some("local")),
            other => panic!("unexpected principal {:?}", other),
        }
        assert_eq!(
            Principal::AnonymousUser.stamped("anonymous"),
            Principal::AnonymousUser
        );
    }
}
