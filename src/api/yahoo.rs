use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use super::{
    provider::MarketDataProvider,
    utils::{make_request, parse_response_object},
    yahoo_dto::{ChartResponseDto, ChartResultDto, SearchResponseDto},
};
use crate::{
    config::ProviderConfig,
    models::{DividendEvent, HistoryRange, Interval, PriceBar, Quote, SearchHit},
};

const SEARCH_LIMIT: usize = 10;

/// Chart URL for `symbol`. The full history is requested as an explicit
/// `period1`/`period2` window up to `now`, since `range=max` thins out daily bars.
pub fn chart_url(
    base: &str,
    symbol: &str,
    range: HistoryRange,
    interval: Interval,
    now: i64,
) -> String {
    let window = match range {
        HistoryRange::Max => format!("period1=0&period2={}", now),
        _ => format!("range={}", range),
    };
    // Symbol goes in the path and must be encoded for index symbols like ^GDAXI.
    format!(
        "{}/{}?{}&interval={}&events=div",
        base,
        urlencoding::encode(symbol),
        window,
        interval
    )
}

#[derive(Clone, Debug)]
pub struct YahooApi {
    client: Client,
    chart_url: String,
    search_url: String,
}

impl YahooApi {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(*config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            chart_url: config.chart_url().clone(),
            search_url: config.search_url().clone(),
        })
    }

    async fn fetch_chart(
        &self,
        symbol: &str,
        range: HistoryRange,
        interval: Interval,
    ) -> Result<ChartResultDto> {
        let url = chart_url(
            &self.chart_url,
            symbol,
            range,
            interval,
            Utc::now().timestamp(),
        );
        let res = make_request(&self.client, &url, symbol).await?;

        parse_response_object::<ChartResponseDto>(res, symbol)?.into_result(symbol)
    }
}

#[async_trait]
impl MarketDataProvider for YahooApi {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let url = format!(
            "{}?q={}&quotesCount={}&newsCount=0",
            self.search_url,
            urlencoding::encode(query),
            SEARCH_LIMIT
        );
        let res = make_request(&self.client, &url, query).await?;

        Ok(parse_response_object::<SearchResponseDto>(res, query)?.to_search_hits())
    }

    async fn quote(&self, symbol: &str) -> Result<Quote> {
        let chart = self
            .fetch_chart(symbol, HistoryRange::OneDay, Interval::OneDay)
            .await?;
        Ok(chart.to_quote())
    }

    async fn history(
        &self,
        symbol: &str,
        range: HistoryRange,
        interval: Interval,
    ) -> Result<Vec<PriceBar>> {
        let chart = self.fetch_chart(symbol, range, interval).await?;
        Ok(chart.to_price_bars())
    }

    async fn dividends(&self, symbol: &str) -> Result<Vec<DividendEvent>> {
        let chart = self
            .fetch_chart(symbol, HistoryRange::Max, Interval::OneMonth)
            .await?;
        Ok(chart.to_dividend_events())
    }
}
