use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Snapshot of a symbol as reported by the provider.
///
/// `dividend_yield` is a fraction (0.02 for 2%) and only set when the provider
/// publishes an official trailing yield.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Quote {
    symbol: String,
    long_name: Option<String>,
    currency: Option<String>,
    current_price: Option<Decimal>,
    previous_close: Option<Decimal>,
    dividend_yield: Option<Decimal>,
}
