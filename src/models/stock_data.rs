use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{AnnualDividend, PricePoint};

/// Response payload of the stock data endpoint.
#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    symbol: String,
    company_name: String,
    prices: Vec<PricePoint>,
    currency: String,
    current_price: Option<Decimal>,
    previous_close: Option<Decimal>,
    market_change: Option<Decimal>,
    market_change_percent: Option<Decimal>,
    dividends: Vec<AnnualDividend>,
    dividend_yield: Decimal,
}
