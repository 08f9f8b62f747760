use derive_getters::Getters;
use derive_new::new;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum IdentifierKind {
    Isin,
    Wkn,
    Ticker,
    Name,
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum ResolutionSource {
    Mapping,
    Search,
    Probe,
    Passthrough,
}

/// Outcome of turning user input into a provider symbol.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Resolution {
    input: String,
    symbol: String,
    kind: IdentifierKind,
    source: ResolutionSource,
}
