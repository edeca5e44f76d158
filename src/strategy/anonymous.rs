use async_trait::async_trait;

use crate::common::Result;
use crate::request::Request;
use crate::strategy::{Options, Outcome, Strategy};

/// Lets every request through unauthenticated.
#[derive(Debug, Default, Clone, Copy)]
pub struct Anonymous;

impl Anonymous {
    pub const NAME: &'static str = "anonymous";
}

#[async_trait]
impl Strategy for Anonymous {
    fn name(&self) -> Option<&str> {
        Some(Self::NAME)
    }

    async fn authenticate(&self, _request: &Request, _options: &Options) -> Result<Outcome> {
        Ok(Outcome::pass())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_pass() {
        tokio_test::block_on(async move {
            let req = Request::new("GET", "/").with_header("Authorization", "Bearer x");
            let outcome = Anonymous
                .authenticate(&req, &Options::default())
                .await
                .unwrap();
            assert_eq!(outcome, Outcome::Pass);
        })
    }
}
