use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing, Json, Router,
};
use folio_core_portfolio_contracts::PortfolioFeatureService;
use folio_models::{l10n::Language, portfolio::PortfolioView};

use crate::models::ui::ApiUiQuery;

pub fn router(service: Arc<impl PortfolioFeatureService>, default: Language) -> Router<()> {
    Router::new()
        .route("/api/portfolio", routing::get(get_portfolio))
        .with_state((service, default))
}

async fn get_portfolio<Portfolio: PortfolioFeatureService>(
    State((service, default)): State<(Arc<Portfolio>, Language)>,
    Query(query): Query<ApiUiQuery>,
) -> Json<PortfolioView> {
    Json(service.get_portfolio(query.language(default)))
}
