use std::sync::Arc;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

use super::{
    calc::{annual_dividends, dividend_yield, market_change, round2},
    symbol_resolver::SymbolResolver,
};
use crate::{
    api::{MarketDataProvider, ProviderError},
    config::ServiceConfig,
    models::{HistoryRange, Interval, PriceBar, PricePoint, StockData},
};

#[derive(Debug, Error)]
pub enum StockDataError {
    #[error("No current price data found for {0}")]
    NoPriceData(String),
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

impl StockDataError {
    fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(err) => err.chain().find_map(|e| e.downcast_ref::<ProviderError>()),
            Self::NoPriceData(_) => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoPriceData(_))
            || self.provider_error().is_some_and(ProviderError::is_not_found)
    }

    pub fn is_invalid_input(&self) -> bool {
        self.provider_error()
            .is_some_and(ProviderError::is_invalid_input)
    }
}

pub struct StockDataService {
    provider: Arc<dyn MarketDataProvider>,
    resolver: SymbolResolver,
    config: ServiceConfig,
}

impl StockDataService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: ServiceConfig) -> Self {
        let resolver = SymbolResolver::new(Arc::clone(&provider), config.probe_suffixes().clone());
        Self {
            provider,
            resolver,
            config,
        }
    }

    pub async fn fetch(&self, input: &str) -> Result<StockData, StockDataError> {
        self.fetch_on(input, Local::now().date_naive()).await
    }

    /// Same as [`Self::fetch`] with an explicit "today" for the dividend window.
    pub async fn fetch_on(&self, input: &str, today: NaiveDate) -> Result<StockData, StockDataError> {
        let resolution = self.resolver.resolve(input).await;
        let symbol = resolution.symbol().as_str();

        let quote = self
            .provider
            .quote(symbol)
            .await
            .with_context(|| format!("Failed to fetch quote for {}", symbol))?;

        let (current_price, previous_close) = match quote.current_price() {
            Some(price) => (*price, *quote.previous_close()),
            None => {
                let (price, previous) = self.intraday_prices(symbol).await?;
                (price, Some(previous))
            }
        };

        let (change, change_percent) = market_change(Some(current_price), previous_close);

        let bars = self
            .provider
            .history(symbol, HistoryRange::Max, Interval::OneDay)
            .await
            .with_context(|| format!("Failed to fetch price history for {}", symbol))?;
        let prices = chart_points(&bars);

        let events = self
            .provider
            .dividends(symbol)
            .await
            .with_context(|| format!("Failed to fetch dividends for {}", symbol))?;
        let dividends = annual_dividends(&events, today, *self.config.dividend_years());
        let dividend_yield = dividend_yield(
            Some(current_price),
            *quote.dividend_yield(),
            &dividends,
            today,
        );

        info!(
            %symbol,
            prices = prices.len(),
            dividend_years = dividends.len(),
            "stock data assembled"
        );

        Ok(StockData::new(
            symbol.to_string(),
            quote.long_name().clone().unwrap_or_else(|| symbol.to_string()),
            prices,
            quote
                .currency()
                .clone()
                .unwrap_or_else(|| self.config.default_currency().clone()),
            Some(round2(current_price)),
            previous_close.map(round2),
            change.map(round2),
            change_percent.map(round2),
            dividends,
            dividend_yield,
        ))
    }

    /// Price from the intraday series when the quote carries none. The previous
    /// close is the second to last daily close, or the current price itself.
    async fn intraday_prices(&self, symbol: &str) -> Result<(Decimal, Decimal), StockDataError> {
        warn!(%symbol, "quote has no current price, falling back to intraday history");

        let intraday = self
            .provider
            .history(symbol, HistoryRange::OneDay, Interval::OneMinute)
            .await
            .with_context(|| format!("Failed to fetch intraday history for {}", symbol))?;
        let current = closes(&intraday)
            .last()
            .copied()
            .ok_or_else(|| StockDataError::NoPriceData(symbol.to_string()))?;

        let daily = self
            .provider
            .history(symbol, HistoryRange::TwoDays, Interval::OneDay)
            .await
            .with_context(|| format!("Failed to fetch daily history for {}", symbol))?;
        let daily_closes = closes(&daily);
        let previous = if daily_closes.len() > 1 {
            daily_closes[daily_closes.len() - 2]
        } else {
            current
        };

        Ok((current, previous))
    }
}

fn closes(bars: &[PriceBar]) -> Vec<Decimal> {
    bars.iter().filter_map(|b| *b.close()).collect()
}

/// Complete bars only, oldest first.
fn chart_points(bars: &[PriceBar]) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = bars.iter().filter_map(chart_point).collect();
    points.sort_by_key(|p| *p.date());
    points
}

/// `None` when any of open/high/low/close is missing. Missing volume counts as 0.
fn chart_point(bar: &PriceBar) -> Option<PricePoint> {
    Some(PricePoint::new(
        *bar.date(),
        round2((*bar.open())?),
        round2((*bar.high())?),
        round2((*bar.low())?),
        round2((*bar.close())?),
        bar.volume().unwrap_or(0),
    ))
}
