use async_trait::async_trait;

use crate::common::Result;
use crate::error::Error;
use crate::request::Request;
use crate::strategy::Outcome;

/// Per call options handed to a strategy by the authenticator.
#[derive(Debug, Clone, Default)]
pub struct Options {
    // Overrides the challenge used when credentials are missing.
    pub bad_request_message: Option<String>,
}

/// Pluggable authentication mechanism.
///
/// Implementors must override [`authenticate`](Strategy::authenticate). The
/// provided body only reports that the override is missing.
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Name the strategy registers under. `None` for strategies which must be
    /// registered with an explicit name.
    fn name(&self) -> Option<&str> {
        None
    }

    async fn authenticate(&self, _request: &Request, _options: &Options) -> Result<Outcome> {
        Err(Error::must_override("Strategy", "authenticate"))
    }
}

/// Strategy without any behavior of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base;

impl Strategy for Base {}
