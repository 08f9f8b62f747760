//! Static WKN/ISIN/alias table for identifiers the provider cannot look up reliably.

const SYMBOL_MAPPINGS: &[(&str, &str)] = &[
    ("716460", "SAP.DE"),
    ("DE0007164600", "SAP.DE"),
    ("840400", "ALV.DE"),
    ("DE0008404005", "ALV.DE"),
    ("723610", "SIE.DE"),
    ("DE0007236101", "SIE.DE"),
    ("519000", "BMW.DE"),
    ("DE0005190003", "BMW.DE"),
    ("BASF11", "BAS.DE"),
    ("DE000BASF111", "BAS.DE"),
    // Mercedes-Benz
    ("515100", "MBG.DE"),
    ("DE0005151005", "MBG.DE"),
    // Volkswagen Vz.
    ("766403", "VOW3.DE"),
    ("DE0007664039", "VOW3.DE"),
    // Adidas
    ("850471", "ADS.DE"),
    ("A1EWWW", "ADS.DE"),
    ("DE000A1EWWW0", "ADS.DE"),
    ("AAPL", "AAPL"),
    ("MSFT", "MSFT"),
    ("GOOGL", "GOOGL"),
    ("AMZN", "AMZN"),
    ("TSLA", "TSLA"),
    ("NVDA", "NVDA"),
    // Indices
    ("NDX", "^NDX"),
    ("DJI", "^DJI"),
    ("GDAXI", "^GDAXI"),
];

/// Looks up a cleaned key (see [`super::symbol_resolver::clean_key`]).
pub fn lookup_mapping(key: &str) -> Option<&'static str> {
    SYMBOL_MAPPINGS
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}
