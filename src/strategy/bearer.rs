use async_trait::async_trait;

use crate::common::{debug, Result};
use crate::request::Request;
use crate::strategy::{Challenge, Options, Outcome, Strategy};
use crate::verify::TokenVerifier;

const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Bearer token from the `Authorization` header, the body or the query string.
pub struct Bearer<V> {
    verifier: V,
    realm: String,
    scope: Vec<String>,
}

impl<V> Bearer<V> {
    pub const NAME: &'static str = "bearer";
    pub const DEFAULT_REALM: &'static str = "Users";

    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            realm: Self::DEFAULT_REALM.to_owned(),
            scope: Vec::new(),
        }
    }

    pub fn set_realm(&mut self, val: &mut Option<String>) {
        if let Some(val) = val.take() {
            self.realm = val
        }
    }

    pub fn set_scope(&mut self, scope: Vec<String>) {
        self.scope = scope;
    }

    fn challenge(&self, error: Option<&str>) -> Challenge {
        let mut challenge = format!("Bearer realm=\"{}\"", self.realm);
        if !self.scope.is_empty() {
            challenge.push_str(&format!(", scope=\"{}\"", self.scope.join(" ")));
        }
        if let Some(error) = error {
            challenge.push_str(&format!(", error=\"{}\"", error));
        }
        Challenge::new(challenge)
    }
}

enum Extracted<'a> {
    Token(&'a str),
    Missing,
    Malformed,
}

fn extract_token(request: &Request) -> Extracted<'_> {
    let mut found = Vec::with_capacity(3);

    if let Some(authorization) = request.header("authorization") {
        let parts: Vec<&str> = authorization.split_whitespace().collect();
        match parts.as_slice() {
            [scheme, token] if scheme.eq_ignore_ascii_case("bearer") => found.push(*token),
            [scheme, ..] if scheme.eq_ignore_ascii_case("bearer") => return Extracted::Malformed,
            // Other schemes belong to other strategies.
            _ => {}
        }
    }
    if let Some(token) = request.field(ACCESS_TOKEN_PARAM) {
        found.push(token);
    }
    if let Some(token) = request.query(ACCESS_TOKEN_PARAM) {
        found.push(token);
    }

    match found.as_slice() {
        [] => Extracted::Missing,
        [token] => Extracted::Token(*token),
        _ => Extracted::Malformed,
    }
}

#[async_trait]
impl<V> Strategy for Bearer<V>
where
    V: TokenVerifier + 'static,
{
    fn name(&self) -> Option<&str> {
        Some(Self::NAME)
    }

    async fn authenticate(&self, request: &Request, _options: &Options) -> Result<Outcome> {
        let token = match extract_token(request) {
            Extracted::Token(token) => token,
            Extracted::Missing => return Ok(Outcome::fail_with(self.challenge(None))),
            Extracted::Malformed => return Ok(Outcome::fail_status(None, 400)),
        };

        match self.verifier.verify_token(token).await? {
            Some(principal) => Ok(Outcome::success(principal)),
            None => {
                debug!("Bearer token rejected");
                Ok(Outcome::fail_with(self.challenge(Some("invalid_token"))))
            }
        }
    }
}
