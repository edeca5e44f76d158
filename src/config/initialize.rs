use std::path::Path;

use tokio::fs;

use crate::authenticator::Authenticator;
use crate::common::{info, Result};
use crate::config::{BearerConfig, Config, LocalConfig};
use crate::strategy::{Anonymous, Bearer, Local};
use crate::verify::Directory;

/// Builds an [`Authenticator`] out of a configuration file.
#[derive(Debug)]
pub struct Initializer {
    pub config: Config,
}

impl Initializer {
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub async fn load_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let f = fs::File::open(path).await?;
        let config = serde_yaml::from_reader::<_, Config>(f.into_std().await)?;
        config.validate()?;

        Ok(Self { config })
    }

    pub fn build_authenticator(self) -> Result<Authenticator> {
        let Config {
            users,
            local:
                LocalConfig {
                    mut username_field,
                    mut password_field,
                },
            bearer: BearerConfig { mut realm, scope },
            anonymous,
        } = self.config;

        let directory = Directory::new(users);
        info!(users = directory.len(), "Directory loaded");

        let mut authenticator = Authenticator::new();

        let mut local_strategy = Local::new(directory.clone());
        local_strategy.set_username_field(&mut username_field);
        local_strategy.set_password_field(&mut password_field);
        authenticator.use_strategy(local_strategy)?;

        let mut bearer_strategy = Bearer::new(directory);
        bearer_strategy.set_realm(&mut realm);
        bearer_strategy.set_scope(scope);
        authenticator.use_strategy(bearer_strategy)?;

        if anonymous {
            authenticator.use_strategy(Anonymous)?;
        }

        Ok(authenticator)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::request::Request;
    use crate::strategy::Options;
    use crate::Decision;

    #[test]
    fn load_and_build() {
        tokio_test::block_on(async move {
            let mut f = tempfile::NamedTempFile::new().unwrap();
            writeln!(
                f,
                "users:\n  - username: alice\n    password: wonderland\n    tokens: [t0k3n]"
            )
            .unwrap();

            let authenticator = Initializer::load_config_file(f.path())
                .await
                .unwrap()
                .build_authenticator()
                .unwrap();

            let names: Vec<&str> = authenticator.names().collect();
            assert_eq!(names, vec!["bearer", "local"]);

            let req = Request::new("GET", "/").with_header("Authorization", "Bearer t0k3n");
            let decision = authenticator
                .authenticate(&["local", "bearer"], &req, &Options::default())
                .await
                .unwrap();
            assert!(decision.is_authenticated());

            let req = Request::new("GET", "/");
            let decision = authenticator
                .authenticate(&["bearer"], &req, &Options::default())
                .await
                .unwrap();
            assert!(matches!(decision, Decision::Unauthorized { status: 401, .. }));
        })
    }

    #[test]
    fn missing_file() {
        tokio_test::block_on(async move {
            let dir = tempfile::tempdir().unwrap();
            let err = Initializer::load_config_file(dir.path().join("none.yaml"))
                .await
                .unwrap_err();
            assert!(matches!(err.kind(), crate::ErrorKind::Io(_)));
        })
    }

    #[test]
    fn anonymous_registered_on_demand() {
        let config = Config {
            anonymous: true,
            ..Default::default()
        };

        let authenticator = Initializer::from_config(config)
            .build_authenticator()
            .unwrap();
        assert!(authenticator.get("anonymous").is_some());
    }
}
