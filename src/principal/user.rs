use chrono::Utc;

use crate::common::Time;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub strategy: Option<String>,
    pub authenticated_at: Time,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strategy: None,
            authenticated_at: Utc::now(),
        }
    }

    pub(crate) fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }
}
