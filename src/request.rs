use std::collections::HashMap;

/// Inbound request as seen by strategies.
///
/// Header names are case-insensitive and stored lowercased.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    method: String,
    path: String,
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
    body: HashMap<String, String>,
}

impl Request {
    pub fn new<S1, S2>(method: S1, path: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            method: method.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_header<S1, S2>(mut self, name: S1, value: S2) -> Self
    where
        S1: AsRef<str>,
        S2: Into<String>,
    {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_query<S1, S2>(mut self, name: S1, value: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_field<S1, S2>(mut self, name: S1, value: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.body.insert(name.into(), value.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.body.get(name).map(String::as_str)
    }

    /// Look up a parameter in the body first, then the query string.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.field(name).or_else(|| self.query(name))
    }
}
