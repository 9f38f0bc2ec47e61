use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use tickerboard_market_data::{QuoteBoard, RegionFilter, WatchlistFilter};

use crate::{error::ApiResult, main_lib::AppState};

use super::page::render_dashboard;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Free-text filter on display name or symbol
    pub q: Option<String>,
    /// Region filter: all, asx or us
    pub filter: Option<String>,
}

impl DashboardQuery {
    fn to_filter(&self) -> ApiResult<WatchlistFilter> {
        let region = match self.filter.as_deref() {
            Some(value) => value.parse::<RegionFilter>()?,
            None => RegionFilter::All,
        };
        Ok(WatchlistFilter::new(self.q.as_deref(), region))
    }
}

async fn load_board(state: &AppState, filter: &WatchlistFilter) -> QuoteBoard {
    let board = state.normalizer.board(filter).await;
    tracing::debug!(
        query = filter.query().unwrap_or(""),
        region = %filter.region(),
        entries = board.len(),
        "Built quote board"
    );
    board
}

/// Full dashboard page.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DashboardQuery>,
) -> ApiResult<Html<String>> {
    let filter = q.to_filter()?;
    let board = load_board(&state, &filter).await;
    Ok(Html(render_dashboard(
        &board,
        q.q.as_deref().unwrap_or(""),
        filter.region(),
        state.refresh_interval,
    )))
}

/// Quote records keyed by display name, for client-side refresh.
pub async fn data(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DashboardQuery>,
) -> ApiResult<Json<QuoteBoard>> {
    let filter = q.to_filter()?;
    Ok(Json(load_board(&state, &filter).await))
}
