use folio_models::{l10n::Language, portfolio::PortfolioView};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PortfolioFeatureService: Send + Sync + 'static {
    /// Return the portfolio with every text in the given language.
    fn get_portfolio(&self, language: Language) -> PortfolioView;
}

#[cfg(feature = "mock")]
impl MockPortfolioFeatureService {
    pub fn with_get_portfolio(mut self, language: Language, result: PortfolioView) -> Self {
        self.expect_get_portfolio()
            .once()
            .with(mockall::predicate::eq(language))
            .return_once(move |_| result);
        self
    }
}
