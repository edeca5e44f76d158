use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::time::Instant;
use tracing_futures::Instrument;

use crate::common::{info, trace, warn, ErrorKind, Result};
use crate::principal::Principal;
use crate::request::Request;
use crate::strategy::{Challenge, Options, Outcome, Strategy};

const UNAUTHORIZED: u16 = 401;

/// Result of running a strategy chain against a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Authenticated {
        principal: Principal,
        info: Option<serde_json::Value>,
        strategy: String,
    },
    Redirect {
        url: String,
        status: u16,
    },
    Pass,
    /// Every strategy failed.
    ///
    /// `status` is the status of the failure when exactly one strategy ran
    /// and it gave one. Otherwise it is 401, even if some of several failed
    /// strategies gave a status of their own. `challenges` holds the challenge
    /// of every failure in order.
    Unauthorized {
        status: u16,
        challenges: Vec<Challenge>,
    },
}

impl Decision {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Decision::Authenticated { .. })
    }
}

/// Registry of named strategies.
#[derive(Default, Clone)]
pub struct Authenticator {
    strategies: BTreeMap<String, Arc<dyn Strategy>>,
}

impl Authenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy under its own name.
    pub fn use_strategy(&mut self, strategy: impl Strategy + 'static) -> Result<&mut Self> {
        let name = strategy
            .name()
            .map(ToOwned::to_owned)
            .ok_or(ErrorKind::UnnamedStrategy)?;
        Ok(self.use_named(name, strategy))
    }

    /// Register a strategy under `name`, replacing any previous one.
    pub fn use_named(
        &mut self,
        name: impl Into<String>,
        strategy: impl Strategy + 'static,
    ) -> &mut Self {
        let name = name.into();
        if self
            .strategies
            .insert(name.clone(), Arc::new(strategy))
            .is_some()
        {
            warn!(strategy=%name, "Strategy replaced");
        }
        self
    }

    pub fn unuse(&mut self, name: &str) -> &mut Self {
        self.strategies.remove(name);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Strategy>> {
        self.strategies.get(name).cloned()
    }

    /// Try each named strategy in order until one of them decides.
    ///
    /// Failures are collected and only reported once every strategy failed.
    pub async fn authenticate<S>(
        &self,
        names: &[S],
        request: &Request,
        options: &Options,
    ) -> Result<Decision>
    where
        S: AsRef<str>,
    {
        if names.is_empty() {
            return Err(ErrorKind::Internal("no strategy to authenticate with".into()).into());
        }

        let mut failures = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            let strategy = self
                .strategies
                .get(name)
                .ok_or_else(|| ErrorKind::UnknownStrategy(name.to_owned()))?;

            let start = Instant::now();
            let result = strategy
                .authenticate(request, options)
                .instrument(tracing::info_span!(
                    "strategy",
                    name = %name,
                    method = %request.method(),
                    path = %request.path()
                ))
                .await;

            match &result {
                Ok(outcome) => {
                    info!(strategy=%name, elapsed=?start.elapsed(), outcome=outcome.kind(), "Strategy done")
                }
                Err(err) => {
                    warn!(strategy=%name, elapsed=?start.elapsed(), %err, "Strategy error")
                }
            }

            match result? {
                Outcome::Success { principal, info } => {
                    return Ok(Decision::Authenticated {
                        principal: principal.stamped(name),
                        info,
                        strategy: name.to_owned(),
                    })
                }
                Outcome::Redirect { url, status } => return Ok(Decision::Redirect { url, status }),
                Outcome::Pass => return Ok(Decision::Pass),
                Outcome::Fail { challenge, status } => {
                    trace!(strategy=%name, ?challenge, ?status, "Strategy failed, trying next");
                    failures.push((challenge, status));
                }
            }
        }

        let status = match failures.as_slice() {
            [(_, Some(status))] => *status,
            _ => UNAUTHORIZED,
        };
        let challenges = failures
            .into_iter()
            .filter_map(|(challenge, _)| challenge)
            .collect();

        Ok(Decision::Unauthorized { status, challenges })
    }
}
