use std::{path::Path, sync::Arc};

use anyhow::Context;
use folio_core_portfolio_contracts::PortfolioFeatureService;
use folio_models::{
    l10n::Language,
    portfolio::{Portfolio, PortfolioView},
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PortfolioFeatureServiceImpl {
    portfolio: Arc<Portfolio>,
}

impl PortfolioFeatureServiceImpl {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio: portfolio.into(),
        }
    }

    /// Load the portfolio from the toml file at `path`, or the embedded
    /// default content if no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let portfolio = match path {
            Some(path) => {
                debug!(path = %path.display(), "load portfolio content");
                let content = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read portfolio content at {}", path.display())
                })?;
                toml::from_str(&content).with_context(|| {
                    format!("Failed to parse portfolio content at {}", path.display())
                })?
            }
            None => toml::from_str(folio_assets::CONTENT_TOML)
                .context("Failed to parse embedded portfolio content")?,
        };

        Ok(Self::new(portfolio))
    }
}

impl PortfolioFeatureService for PortfolioFeatureServiceImpl {
    fn get_portfolio(&self, language: Language) -> PortfolioView {
        self.portfolio.localize(language)
    }
}
