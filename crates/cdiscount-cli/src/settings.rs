//! Layered command line settings
//!
//! Sources, lowest precedence first:
//! 1. `conf/cdiscount.yml` when present
//! 2. the file given with `--config`
//! 3. `CDISCOUNT_*` environment variables (`CDISCOUNT_LOGIN`, `CDISCOUNT_PREPROD`, ...)

use std::path::Path;

use anyhow::Context;
use cdiscount_client::ClientConfig;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};

pub const DEFAULT_CONFIG_FILE: &str = "conf/cdiscount.yml";
pub const ENV_PREFIX: &str = "CDISCOUNT";

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub config: Config,
}

impl Settings {
    /// Load the default file, the optional `--config` file and the environment
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::layered(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    // Environment values stay strings so credentials keep leading zeros;
    // booleans and numbers are converted when read.
    fn layered(config_file: Option<&Path>, environment: Environment) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        Self::build(builder.add_source(environment))
    }

    /// Settings from a YAML document only
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Self::build(Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let config = builder
            .build()
            .context("Failed to build configuration")?;
        Ok(Self { config })
    }

    pub fn login(&self) -> String {
        self.config.get_string("login").unwrap_or_default()
    }

    pub fn password(&self) -> String {
        self.config.get_string("password").unwrap_or_default()
    }

    pub fn preprod(&self) -> bool {
        self.config.get_bool("preprod").unwrap_or(false)
    }

    /// Client configuration built from the settings
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut client = ClientConfig::new(&self.login(), &self.password())
            .with_preprod(self.preprod());

        if let Ok(url) = self.config.get_string("service_url") {
            client = client.with_service_url(&url);
        }
        if let Ok(url) = self.config.get_string("token_url") {
            client = client.with_token_url(&url);
        }
        if let Ok(path) = self.config.get_string("header_file") {
            client = client.with_header_file(path);
        }

        let defaults = ClientConfig::default();
        client = client.with_timeouts(
            self.u64_or("connect_timeout_ms", defaults.connect_timeout_ms)?,
            self.u64_or("read_timeout_ms", defaults.read_timeout_ms)?,
        );
        client = client.with_token_ttl(self.u64_or("token_ttl_secs", defaults.token_ttl_secs)?);

        Ok(client)
    }

    fn u64_or(&self, key: &str, default: u64) -> anyhow::Result<u64> {
        match self.config.get_int(key) {
            Ok(value) => u64::try_from(value).with_context(|| format!("{} must be positive", key)),
            Err(config::ConfigError::NotFound(_)) => Ok(default),
            Err(e) => Err(e).with_context(|| format!("Invalid value for {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_from_yaml() {
        let settings = Settings::from_yaml_str(
            r#"
login: seller
password: "pa$$word"
preprod: true
read_timeout_ms: 60000
"#,
        )
        .unwrap();

        let client = settings.client_config().unwrap();
        assert_eq!(client.login, "seller");
        assert_eq!(client.password, "pa$$word");
        assert!(client.preprod);
        assert_eq!(client.read_timeout_ms, 60000);
        assert_eq!(client.connect_timeout_ms, 5000);
        assert!(client.token_url().starts_with("https://sts.preprod-cdiscount.com/"));
    }

    #[test]
    fn test_endpoint_and_header_overrides() {
        let settings = Settings::from_yaml_str(
            r#"
login: seller
password: secret
service_url: http://localhost:8080/svc
token_url: http://localhost:8080/sts
header_file: conf/header_message.yml
"#,
        )
        .unwrap();

        let client = settings.client_config().unwrap();
        assert_eq!(client.service_url(), "http://localhost:8080/svc");
        assert_eq!(client.token_url(), "http://localhost:8080/sts");
        assert_eq!(
            client.header_file.as_deref(),
            Some(Path::new("conf/header_message.yml"))
        );
    }

    #[test]
    fn test_empty_settings() {
        let settings = Settings::from_yaml_str("{}").unwrap();
        assert_eq!(settings.login(), "");
        assert!(!settings.preprod());
        assert!(settings.client_config().is_ok());
    }

    #[test]
    fn test_negative_timeout_is_rejected() {
        let settings = Settings::from_yaml_str("connect_timeout_ms: -1").unwrap();
        assert!(settings.client_config().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cdiscount.yml");
        std::fs::write(&path, "login: from-file\npassword: secret\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.password(), "secret");

        assert!(Settings::load(Some(&dir.path().join("missing.yml"))).is_err());
    }

    #[test]
    fn test_environment_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cdiscount.yml");
        std::fs::write(&path, "login: from-file\npassword: secret\n").unwrap();

        let variables = [
            ("CDISCOUNT_LOGIN", "0042"),
            ("CDISCOUNT_PASSWORD", "007123"),
            ("CDISCOUNT_PREPROD", "true"),
            ("CDISCOUNT_READ_TIMEOUT_MS", "60000"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let environment = Environment::with_prefix(ENV_PREFIX).source(Some(variables));

        let settings = Settings::layered(Some(&path), environment).unwrap();
        let client = settings.client_config().unwrap();
        assert_eq!(client.login, "0042");
        assert_eq!(client.password, "007123");
        assert!(client.preprod);
        assert_eq!(client.read_timeout_ms, 60000);
    }
}
