use derive_getters::Getters;
use derive_new::new;

const TRADABLE_TYPES: [&str; 4] = ["EQUITY", "ETF", "INDEX", "MUTUALFUND"];

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct SearchHit {
    symbol: String,
    name: String,
    exchange: String,
    quote_type: String,
}

impl SearchHit {
    pub fn is_tradable(&self) -> bool {
        TRADABLE_TYPES
            .iter()
            .any(|t| self.quote_type.eq_ignore_ascii_case(t))
    }
}
