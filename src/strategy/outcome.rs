use std::fmt;

use crate::principal::Principal;

const DEFAULT_REDIRECT_STATUS: u16 = 302;

/// Text of a failed authentication, suitable for `WWW-Authenticate` or a
/// flash message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge(String);

impl Challenge {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Challenge {
    fn from(s: &str) -> Self {
        Challenge::new(s)
    }
}

impl From<String> for Challenge {
    fn from(s: String) -> Self {
        Challenge(s)
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Action signaled by a strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success {
        principal: Principal,
        info: Option<serde_json::Value>,
    },
    Fail {
        challenge: Option<Challenge>,
        status: Option<u16>,
    },
    Redirect {
        url: String,
        status: u16,
    },
    // Strategy declines to decide, request continues unauthenticated.
    Pass,
}

impl Outcome {
    pub fn success(principal: Principal) -> Self {
        Outcome::Success {
            principal,
            info: None,
        }
    }

    pub fn success_with(principal: Principal, info: serde_json::Value) -> Self {
        Outcome::Success {
            principal,
            info: Some(info),
        }
    }

    pub fn fail() -> Self {
        Outcome::Fail {
            challenge: None,
            status: None,
        }
    }

    pub fn fail_with(challenge: impl Into<Challenge>) -> Self {
        Outcome::Fail {
            challenge: Some(challenge.into()),
            status: None,
        }
    }

    pub fn fail_status(challenge: Option<Challenge>, status: u16) -> Self {
        Outcome::Fail {
            challenge,
            status: Some(status),
        }
    }

    pub fn redirect(url: impl Into<String>) -> Self {
        Outcome::redirect_with(url, DEFAULT_REDIRECT_STATUS)
    }

    pub fn redirect_with(url: impl Into<String>, status: u16) -> Self {
        Outcome::Redirect {
            url: url.into(),
            status,
        }
    }

    pub fn pass() -> Self {
        Outcome::Pass
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Outcome::Success { principal, .. } => Some(principal),
            _ => None,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Outcome::Success { .. } => "success",
            Outcome::Fail { .. } => "fail",
            Outcome::Redirect { .. } => "redirect",
            Outcome::Pass => "pass",
        }
    }
}
