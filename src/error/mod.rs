use std::error;
use std::fmt;
use std::io;

use backtrace::Backtrace;

/// Error returned by strategies, the authenticator and the config layer.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    backtrace: Option<Backtrace>,
}

#[derive(Debug)]
pub enum ErrorKind {
    // A required strategy method was invoked without an implementation.
    MustOverride {
        strategy: &'static str,
        method: &'static str,
    },
    UnknownStrategy(String),
    UnnamedStrategy,
    // Every strategy of the chain failed.
    Unauthenticated,
    // Backing credential store failed while verifying.
    Verify(String),
    Config(String),
    Io(io::Error),
    Yaml(serde_yaml::Error),
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::MustOverride { strategy, method } => {
                write!(f, "{}#{} must be overridden by subclass", strategy, method)
            }
            ErrorKind::UnknownStrategy(name) => {
                write!(f, "Unknown authentication strategy \"{}\"", name)
            }
            ErrorKind::UnnamedStrategy => {
                write!(f, "authentication strategies must have a name")
            }
            ErrorKind::Unauthenticated => write!(f, "unauthenticated"),
            ErrorKind::Verify(description) => write!(f, "verify error. {}", description),
            ErrorKind::Config(description) => write!(f, "config error. {}", description),
            ErrorKind::Io(err) => err.fmt(f),
            ErrorKind::Yaml(err) => err.fmt(f),
            ErrorKind::Internal(description) => write!(f, "internal error. {}", description),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::from(ErrorKind::Io(err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::from(ErrorKind::Yaml(err))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::with_backtrace(kind)
    }
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    pub fn is_must_override(&self) -> bool {
        matches!(self.kind(), ErrorKind::MustOverride { .. })
    }

    pub(crate) fn must_override(strategy: &'static str, method: &'static str) -> Self {
        Error::from(ErrorKind::MustOverride { strategy, method })
    }

    fn with_backtrace(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Some(Backtrace::new()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Yaml(err) => Some(err),
            _ => None,
        }
    }
}
