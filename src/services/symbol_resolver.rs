use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use super::symbol_map::lookup_mapping;
use crate::{
    api::MarketDataProvider,
    models::{IdentifierKind, Resolution, ResolutionSource, SearchHit},
};

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Z0-9]").expect("valid cleanup pattern"));
static ISIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}[A-Z0-9]{9}[0-9]$").expect("valid ISIN pattern"));
static WKN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{6}$").expect("valid WKN pattern"));
static TICKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\^?[A-Z0-9][A-Z0-9.\-=]{0,11}$").expect("valid ticker pattern"));

/// ISIN country prefix to the exchange suffix preferred among search hits.
/// An empty suffix means a plain (US) symbol without exchange suffix.
const ISIN_EXCHANGE_SUFFIXES: &[(&str, &str)] = &[
    ("DE", ".DE"),
    ("CH", ".SW"),
    ("AT", ".VI"),
    ("FR", ".PA"),
    ("NL", ".AS"),
    ("BE", ".BR"),
    ("IT", ".MI"),
    ("ES", ".MC"),
    ("GB", ".L"),
    ("SE", ".ST"),
    ("DK", ".CO"),
    ("FI", ".HE"),
    ("NO", ".OL"),
    ("JP", ".T"),
    ("HK", ".HK"),
    ("CA", ".TO"),
    ("US", ""),
];

/// Mapping-table key: uppercased with everything outside `[A-Z0-9]` removed.
pub fn clean_key(input: &str) -> String {
    NON_ALPHANUMERIC
        .replace_all(&input.to_uppercase(), "")
        .into_owned()
}

/// Classifies an already trimmed and uppercased identifier.
pub fn detect_kind(input: &str) -> IdentifierKind {
    if ISIN.is_match(input) {
        IdentifierKind::Isin
    } else if WKN.is_match(input) && input.chars().any(|c| c.is_ascii_digit()) {
        IdentifierKind::Wkn
    } else if TICKER.is_match(input) {
        IdentifierKind::Ticker
    } else {
        IdentifierKind::Name
    }
}

pub fn isin_exchange_suffix(isin: &str) -> Option<&'static str> {
    let country = isin.get(0..2)?;
    ISIN_EXCHANGE_SUFFIXES
        .iter()
        .find(|(prefix, _)| *prefix == country)
        .map(|(_, suffix)| *suffix)
}

/// Symbols to probe for a ticker: the ticker itself, then one candidate per
/// configured suffix when it carries neither an exchange suffix nor an index caret.
pub fn probe_candidates(ticker: &str, suffixes: &[String]) -> Vec<String> {
    let mut candidates = vec![ticker.to_string()];
    if !ticker.contains('.') && !ticker.starts_with('^') {
        candidates.extend(suffixes.iter().map(|s| format!("{}{}", ticker, s)));
    }
    candidates
}

/// Best search hit: a tradable one on the preferred exchange, then any tradable
/// one, then whatever came first.
pub fn pick_hit<'a>(hits: &'a [SearchHit], preferred_suffix: Option<&str>) -> Option<&'a SearchHit> {
    let on_preferred_exchange = |hit: &&SearchHit| match preferred_suffix {
        Some("") => !hit.symbol().contains('.'),
        Some(suffix) => hit.symbol().ends_with(suffix),
        None => false,
    };

    hits.iter()
        .filter(|h| h.is_tradable())
        .find(on_preferred_exchange)
        .or_else(|| hits.iter().find(|h| h.is_tradable()))
        .or_else(|| hits.first())
}

pub struct SymbolResolver {
    provider: Arc<dyn MarketDataProvider>,
    probe_suffixes: Vec<String>,
}

impl SymbolResolver {
    pub fn new(provider: Arc<dyn MarketDataProvider>, probe_suffixes: Vec<String>) -> Self {
        Self {
            provider,
            probe_suffixes,
        }
    }

    /// Resolves user input to a provider symbol. Never fails: when nothing
    /// matches, the uppercased input is passed through.
    pub async fn resolve(&self, input: &str) -> Resolution {
        let trimmed = input.trim();
        let upper = trimmed.to_uppercase();
        let kind = detect_kind(&upper);

        if let Some(symbol) = lookup_mapping(&clean_key(trimmed)) {
            debug!(input = trimmed, symbol, "mapping table hit");
            return Resolution::new(
                trimmed.to_string(),
                symbol.to_string(),
                kind,
                ResolutionSource::Mapping,
            );
        }

        if trimmed.is_empty() {
            return Resolution::new(String::new(), upper, kind, ResolutionSource::Passthrough);
        }

        let found = match kind {
            IdentifierKind::Isin => self
                .search(&upper, isin_exchange_suffix(&upper))
                .await
                .map(|s| (s, ResolutionSource::Search)),
            IdentifierKind::Wkn => self
                .search(&upper, None)
                .await
                .map(|s| (s, ResolutionSource::Search)),
            IdentifierKind::Ticker => match self.probe(&upper).await {
                Some(symbol) => Some((symbol, ResolutionSource::Probe)),
                None => self
                    .search(trimmed, None)
                    .await
                    .map(|s| (s, ResolutionSource::Search)),
            },
            IdentifierKind::Name => self
                .search(trimmed, None)
                .await
                .map(|s| (s, ResolutionSource::Search)),
        };

        match found {
            Some((symbol, source)) => {
                info!(input = trimmed, %symbol, %kind, %source, "resolved identifier");
                Resolution::new(trimmed.to_string(), symbol, kind, source)
            }
            None => {
                warn!(input = trimmed, %kind, "could not resolve identifier, passing it through");
                Resolution::new(trimmed.to_string(), upper, kind, ResolutionSource::Passthrough)
            }
        }
    }

    async fn probe(&self, ticker: &str) -> Option<String> {
        for candidate in probe_candidates(ticker, &self.probe_suffixes) {
            match self.provider.quote(&candidate).await {
                Ok(quote) if quote.current_price().is_some() => return Some(candidate),
                Ok(_) => debug!(%candidate, "probe returned no price"),
                Err(err) => debug!(%candidate, error = %err, "probe failed"),
            }
        }
        None
    }

    async fn search(&self, query: &str, preferred_suffix: Option<&str>) -> Option<String> {
        match self.provider.search(query).await {
            Ok(hits) => pick_hit(&hits, preferred_suffix).map(|hit| hit.symbol().clone()),
            Err(err) => {
                warn!(query, error = %err, "symbol search failed");
                None
            }
        }
    }
}
