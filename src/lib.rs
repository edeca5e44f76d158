#![allow(clippy::module_inception)]

pub mod authenticator;
pub mod cli;
pub mod config;
pub mod error;
pub mod principal;
pub mod request;
pub mod strategy;
pub mod verify;

pub use crate::authenticator::{Authenticator, Decision};
pub use crate::error::{Error, ErrorKind};
pub type Result<T, E = crate::error::Error> = std::result::Result<T, E>;

pub use crate::principal::Principal;
pub use crate::request::Request;
pub use crate::strategy::{Outcome, Strategy};

pub(crate) mod common {
    pub(crate) use crate::error::ErrorKind;
    pub(crate) use crate::Result;

    pub(crate) type Time = chrono::DateTime<chrono::Utc>;

    pub use tracing::{debug, info, trace, warn};
}
