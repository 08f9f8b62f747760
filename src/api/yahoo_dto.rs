use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use super::{error::ProviderError, utils::to_decimal};
use crate::models::{DividendEvent, PriceBar, Quote, SearchHit};

#[derive(Debug, Deserialize)]
pub struct ChartResponseDto {
    chart: ChartDto,
}

#[derive(Debug, Deserialize)]
struct ChartDto {
    result: Option<Vec<ChartResultDto>>,
    error: Option<ChartErrorDto>,
}

#[derive(Debug, Deserialize)]
struct ChartErrorDto {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResultDto {
    meta: ChartMetaDto,
    #[serde(default)]
    timestamp: Vec<i64>,
    events: Option<ChartEventsDto>,
    indicators: Option<IndicatorsDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMetaDto {
    symbol: String,
    currency: Option<String>,
    long_name: Option<String>,
    short_name: Option<String>,
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    chart_previous_close: Option<f64>,
    trailing_annual_dividend_yield: Option<f64>,
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Default, Deserialize)]
struct ChartEventsDto {
    #[serde(default)]
    dividends: HashMap<String, DividendDto>,
}

#[derive(Debug, Deserialize)]
struct DividendDto {
    amount: f64,
    date: i64,
}

#[derive(Debug, Deserialize)]
struct IndicatorsDto {
    #[serde(default)]
    quote: Vec<QuoteIndicatorDto>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteIndicatorDto {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl ChartResponseDto {
    /// Unwraps the single chart result, turning embedded error objects into
    /// [`ProviderError`]s.
    pub fn into_result(self, subject: &str) -> Result<ChartResultDto> {
        if let Some(error) = self.chart.error {
            return Err(ProviderError::from_chart_code(
                subject,
                &error.code,
                error.description.as_deref(),
            )
            .into());
        }

        self.chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| ProviderError::NotFound(subject.to_string()).into())
    }
}

impl ChartResultDto {
    pub fn to_quote(&self) -> Quote {
        let meta = &self.meta;
        Quote::new(
            meta.symbol.clone(),
            meta.long_name.clone().or_else(|| meta.short_name.clone()),
            meta.currency.clone(),
            to_decimal(meta.regular_market_price),
            to_decimal(meta.previous_close.or(meta.chart_previous_close)),
            to_decimal(meta.trailing_annual_dividend_yield),
        )
    }

    /// Bars in timestamp order. Rows whose timestamp cannot be turned into a
    /// date are skipped; missing price columns are kept as `None`.
    pub fn to_price_bars(&self) -> Vec<PriceBar> {
        let empty = QuoteIndicatorDto::default();
        let quote = self
            .indicators
            .as_ref()
            .and_then(|i| i.quote.first())
            .unwrap_or(&empty);

        let at = |column: &Vec<Option<f64>>, i: usize| column.get(i).copied().flatten();

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, ts)| {
                let date = self.local_date(*ts)?;
                Some(PriceBar::new(
                    date,
                    to_decimal(at(&quote.open, i)),
                    to_decimal(at(&quote.high, i)),
                    to_decimal(at(&quote.low, i)),
                    to_decimal(at(&quote.close, i)),
                    at(&quote.volume, i).map(|v| v as i64),
                ))
            })
            .collect()
    }

    pub fn to_dividend_events(&self) -> Vec<DividendEvent> {
        let mut events: Vec<DividendEvent> = self
            .events
            .as_ref()
            .map(|e| {
                e.dividends
                    .values()
                    .filter_map(|d| {
                        Some(DividendEvent::new(
                            self.local_date(d.date)?,
                            to_decimal(Some(d.amount))?,
                        ))
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        events.sort_by_key(|e| *e.date());
        events
    }

    fn local_date(&self, timestamp: i64) -> Option<NaiveDate> {
        DateTime::from_timestamp(timestamp + self.meta.gmtoffset, 0).map(|dt| dt.date_naive())
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponseDto {
    #[serde(default)]
    quotes: Vec<SearchQuoteDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuoteDto {
    symbol: Option<String>,
    shortname: Option<String>,
    longname: Option<String>,
    exchange: Option<String>,
    quote_type: Option<String>,
}

impl SearchResponseDto {
    pub fn to_search_hits(&self) -> Vec<SearchHit> {
        self.quotes
            .iter()
            .filter_map(|q| {
                let symbol = q.symbol.clone()?;
                Some(SearchHit::new(
                    symbol,
                    q.longname
                        .clone()
                        .or_else(|| q.shortname.clone())
                        .unwrap_or_default(),
                    q.exchange.clone().unwrap_or_default(),
                    q.quote_type.clone().unwrap_or_default(),
                ))
            })
            .collect()
    }
}
