use clap::Args;

use crate::authenticator::{Authenticator, Decision};
use crate::common::{ErrorKind, Result};
use crate::config::LocalConfig;
use crate::request::Request;
use crate::strategy::Options;

/// Authenticate a request built from the given credentials
#[derive(Args, Debug)]
pub struct VerifyCommand {
    /// Strategies to try in order
    #[arg(long = "strategy", short = 's', default_values_t = vec!["local".to_owned(), "bearer".to_owned()])]
    strategies: Vec<String>,
    /// Username sent as a form field
    #[arg(long, env = "GATEKEEP_USERNAME")]
    username: Option<String>,
    /// Password sent as a form field
    #[arg(long, env = "GATEKEEP_PASSWORD")]
    password: Option<String>,
    /// Bearer token sent in the Authorization header
    #[arg(long, env = "GATEKEEP_TOKEN")]
    token: Option<String>,
    /// Extra request header(e.g. "X-Forwarded-For: 10.0.0.1")
    #[arg(long = "header", short = 'H', value_parser = parse_pair::<':'>)]
    headers: Vec<(String, String)>,
    /// Extra query parameter(e.g. access_token=xxx)
    #[arg(long = "query", value_parser = parse_pair::<'='>)]
    queries: Vec<(String, String)>,
    /// Message used when credentials are missing
    #[arg(long)]
    bad_request_message: Option<String>,
}

fn parse_pair<const SEP: char>(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once(SEP)
        .ok_or_else(|| format!("expected KEY{}VALUE, got {}", SEP, s))?;
    Ok((key.trim().to_owned(), value.trim().to_owned()))
}

impl VerifyCommand {
    pub(crate) fn request(&self, local: &LocalConfig) -> Request {
        let mut request = Request::new("POST", "/");

        if let Some(username) = &self.username {
            request = request.with_field(local.username_field(), username.as_str());
        }
        if let Some(password) = &self.password {
            request = request.with_field(local.password_field(), password.as_str());
        }
        if let Some(token) = &self.token {
            request = request.with_header("authorization", format!("Bearer {}", token));
        }
        for (name, value) in &self.headers {
            request = request.with_header(name, value.as_str());
        }
        for (name, value) in &self.queries {
            request = request.with_query(name.as_str(), value.as_str());
        }
        request
    }

    pub async fn run(self, authenticator: &Authenticator, local: &LocalConfig) -> Result<()> {
        let request = self.request(local);
        let options = Options {
            bad_request_message: self.bad_request_message,
        };

        match authenticator
            .authenticate(self.strategies.as_slice(), &request, &options)
            .await?
        {
            Decision::Authenticated {
                principal,
                strategy,
                info,
            } => {
                println!(
                    "authenticated {} by {}",
                    principal.name().unwrap_or("anonymous"),
                    strategy
                );
                if let Some(info) = info {
                    println!("{}", info);
                }
                Ok(())
            }
            Decision::Redirect { url, status } => {
                println!("redirect {} {}", status, url);
                Ok(())
            }
            Decision::Pass => {
                println!("pass");
                Ok(())
            }
            Decision::Unauthorized { status, challenges } => {
                println!("{}", status);
                for challenge in challenges {
                    println!("WWW-Authenticate: {}", challenge);
                }
                Err(ErrorKind::Unauthenticated.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Initializer, UserEntry};

    fn config() -> Config {
        Config {
            users: vec![UserEntry {
                username: "alice".into(),
                password: "wonderland".into(),
                tokens: vec!["t0k3n".into()],
            }],
            ..Default::default()
        }
    }

    fn authenticator() -> Authenticator {
        Initializer::from_config(config())
            .build_authenticator()
            .unwrap()
    }

    fn command() -> VerifyCommand {
        VerifyCommand {
            strategies: vec!["local".into(), "bearer".into()],
            username: None,
            password: None,
            token: None,
            headers: Vec::new(),
            queries: Vec::new(),
            bad_request_message: None,
        }
    }

    #[test]
    fn parse_pairs() {
        assert_eq!(
            parse_pair::<':'>("X-Request-Id: abc").unwrap(),
            ("X-Request-Id".to_owned(), "abc".to_owned())
        );
        assert_eq!(
            parse_pair::<'='>("access_token=a=b").unwrap(),
            ("access_token".to_owned(), "a=b".to_owned())
        );
        assert!(parse_pair::<'='>("novalue").is_err());
    }

    #[test]
    fn build_request() {
        let mut command = command();
        command.username = Some("alice".into());
        command.token = Some("t0k3n".into());
        command.queries = vec![("page".into(), "1".into())];

        let request = command.request(&LocalConfig::default());
        assert_eq!(request.field("username"), Some("alice"));
        assert_eq!(request.header("Authorization"), Some("Bearer t0k3n"));
        assert_eq!(request.query("page"), Some("1"));
    }

    #[test]
    fn verify_password() {
        tokio_test::block_on(async move {
            let mut command = command();
            command.username = Some("alice".into());
            command.password = Some("wonderland".into());

            command
                .run(&authenticator(), &LocalConfig::default())
                .await
                .unwrap();
        })
    }

    #[test]
    fn verify_password_with_configured_fields() {
        tokio_test::block_on(async move {
            let local = LocalConfig {
                username_field: Some("email".into()),
                password_field: Some("passwd".into()),
            };
            let mut config = config();
            config.local = local.clone();
            let authenticator = Initializer::from_config(config)
                .build_authenticator()
                .unwrap();

            let mut command = command();
            command.strategies = vec!["local".into()];
            command.username = Some("alice".into());
            command.password = Some("wonderland".into());

            let request = command.request(&local);
            assert_eq!(request.field("email"), Some("alice"));
            assert_eq!(request.field("passwd"), Some("wonderland"));
            assert_eq!(request.field("username"), None);

            command.run(&authenticator, &local).await.unwrap();
        })
    }

    #[test]
    fn verify_rejected() {
        tokio_test::block_on(async move {
            let mut command = command();
            command.token = Some("wrong".into());

            let err = command
                .run(&authenticator(), &LocalConfig::default())
                .await
                .unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::Unauthenticated));
        })
    }
}
