use anyhow::Result;
use async_trait::async_trait;

use crate::models::{DividendEvent, HistoryRange, Interval, PriceBar, Quote, SearchHit};

/// Seam between symbol resolution / payload assembly and the market data source.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;

    async fn quote(&self, symbol: &str) -> Result<Quote>;

    async fn history(
        &self,
        symbol: &str,
        range: HistoryRange,
        interval: Interval,
    ) -> Result<Vec<PriceBar>>;

    async fn dividends(&self, symbol: &str) -> Result<Vec<DividendEvent>>;
}
