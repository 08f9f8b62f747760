use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct DividendEvent {
    date: NaiveDate,
    amount: Decimal,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct AnnualDividend {
    year: i32,
    amount: Decimal,
}
