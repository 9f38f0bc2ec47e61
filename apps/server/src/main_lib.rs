use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use tickerboard_market_data::{MarketDataProvider, PriceNormalizer, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub normalizer: PriceNormalizer,
    pub refresh_interval: Duration,
}

pub fn init_tracing() {
    let log_format = std::env::var("TB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(YahooProvider::new()?);
    Ok(build_state_with_provider(config, provider))
}

pub fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
) -> Arc<AppState> {
    tracing::info!(
        "Tracking {} symbols via {}",
        config.watchlist.len(),
        provider.id()
    );
    let normalizer = PriceNormalizer::new(provider, config.watchlist.clone());
    Arc::new(AppState {
        normalizer,
        refresh_interval: config.refresh_interval,
    })
}
