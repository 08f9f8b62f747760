use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::{AnnualDividend, DividendEvent};

/// Month from which the running year counts as complete for the yield fallback.
const LATE_YEAR_MONTH: u32 = 11;

pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Absolute and percentage change against the previous close. Both are `None`
/// unless both prices are known and the previous close is non-zero.
pub fn market_change(
    current_price: Option<Decimal>,
    previous_close: Option<Decimal>,
) -> (Option<Decimal>, Option<Decimal>) {
    match (current_price, previous_close) {
        (Some(current), Some(previous)) if !previous.is_zero() => {
            let change = current - previous;
            (Some(change), Some(change / previous * dec!(100)))
        }
        _ => (None, None),
    }
}

/// Sums dividend events per calendar year, keeping `lookback_years` full years
/// plus the running one. Newest year first.
pub fn annual_dividends(
    events: &[DividendEvent],
    today: NaiveDate,
    lookback_years: i32,
) -> Vec<AnnualDividend> {
    let first_year = today.year() - lookback_years;
    let mut per_year: BTreeMap<i32, Decimal> = BTreeMap::new();

    for event in events {
        let year = event.date().year();
        if year >= first_year {
            *per_year.entry(year).or_insert(Decimal::ZERO) += *event.amount();
        }
    }

    per_year
        .into_iter()
        .rev()
        .map(|(year, amount)| AnnualDividend::new(year, round2(amount)))
        .collect()
}

/// Dividend yield in percent.
///
/// The provider's official trailing yield wins. Otherwise the yield is derived
/// from the last complete year in `annual` (expected newest first); the running
/// year qualifies from November on.
pub fn dividend_yield(
    current_price: Option<Decimal>,
    official_yield: Option<Decimal>,
    annual: &[AnnualDividend],
    today: NaiveDate,
) -> Decimal {
    let Some(price) = current_price.filter(|p| *p > Decimal::ZERO) else {
        return Decimal::ZERO;
    };

    if let Some(official) = official_yield {
        return round2(official * dec!(100));
    }

    let current_year = today.year();
    let last_full_year = annual
        .iter()
        .find(|d| {
            *d.year() == current_year - 1
                || (*d.year() == current_year && today.month() >= LATE_YEAR_MONTH)
        })
        .map(|d| *d.amount())
        .unwrap_or(Decimal::ZERO);

    if last_full_year > Decimal::ZERO {
        round2(last_full_year / price * dec!(100))
    } else {
        Decimal::ZERO
    }
}
