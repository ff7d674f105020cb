use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context};
use config::{File, FileFormat};
use folio_models::{l10n::Language, ui::Theme};
use serde::Deserialize;
use url::Url;

pub use crate::duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Loads the config files in order, then applies each toml snippet in
/// `overrides` on top.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    let config: Config = overrides
        .iter()
        .fold(builder, |builder, &snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")?;

    config.validate()?;

    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub relay: RelayConfig,
    pub contact: ContactConfig,
    pub ui: UiConfig,
    pub toast: ToastConfig,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.relay.path.starts_with('/'),
            "relay.path must start with a '/', got {:?}",
            self.relay.path
        );

        match self.contact.relay {
            ContactRelayKind::Web3forms => ensure!(
                self.contact.web3forms.is_some(),
                "contact.relay is \"web3forms\" but [contact.web3forms] is missing"
            ),
            ContactRelayKind::Function => ensure!(
                self.contact.function.is_some(),
                "contact.relay is \"function\" but [contact.function] is missing"
            ),
        }

        ensure!(self.toast.limit > 0, "toast.limit must be at least 1");

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub sender_name: String,
    pub relay: ContactRelayKind,
    pub web3forms: Option<Web3FormsConfig>,
    pub function: Option<FunctionRelayConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactRelayKind {
    Web3forms,
    Function,
}

#[derive(Debug, Deserialize)]
pub struct Web3FormsConfig {
    pub endpoint: Url,
    pub access_key: String,
}

#[derive(Debug, Deserialize)]
pub struct FunctionRelayConfig {
    pub endpoint: Url,
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UiConfig {
    pub default_language: Language,
    pub default_theme: Theme,
}

#[derive(Debug, Deserialize)]
pub struct ToastConfig {
    pub duration: Duration,
    pub limit: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct PortfolioConfig {
    pub content: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(config.contact.relay, ContactRelayKind::Web3forms);
        assert_eq!(config.ui.default_language, Language::En);
        assert_eq!(config.ui.default_theme, Theme::Light);
        assert_eq!(*config.toast.duration, std::time::Duration::from_secs(5));
        assert_eq!(config.toast.limit, 1);
        assert_matches!(config.portfolio.content, None);
    }

    #[test]
    fn override_values() {
        let config = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &[
                "contact.relay = \"function\"",
                "contact.function.api_key = \"secret\"",
                "ui.default_language = \"ru\"",
            ],
        )
        .unwrap();

        assert_eq!(config.contact.relay, ContactRelayKind::Function);
        assert_eq!(
            config.contact.function.unwrap().api_key.as_deref(),
            Some("secret")
        );
        assert_eq!(config.ui.default_language, Language::Ru);
    }

    #[test]
    fn invalid_relay_path() {
        let result = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &["relay.path = \"functions/v1/send-contact-email\""],
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_file() {
        let result = load(&[Path::new("/nonexistent/folio.toml")]);
        assert!(result.is_err());
    }
}
