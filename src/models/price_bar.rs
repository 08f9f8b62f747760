use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum HistoryRange {
    #[strum(serialize = "1d")]
    OneDay,
    #[strum(serialize = "2d")]
    TwoDays,
    #[strum(serialize = "max")]
    Max,
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Interval {
    #[strum(serialize = "1m")]
    OneMinute,
    #[strum(serialize = "1d")]
    OneDay,
    #[strum(serialize = "1mo")]
    OneMonth,
}

/// Raw bar from the provider. Any field may be missing on halted or partial sessions.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct PriceBar {
    date: NaiveDate,
    open: Option<Decimal>,
    high: Option<Decimal>,
    low: Option<Decimal>,
    close: Option<Decimal>,
    volume: Option<i64>,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct PricePoint {
    date: NaiveDate,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: i64,
}
