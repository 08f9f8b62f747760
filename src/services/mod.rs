pub mod calc;
pub mod stock_data_service;
pub mod symbol_map;
pub mod symbol_resolver;

pub use stock_data_service::{StockDataError, StockDataService};
pub use symbol_resolver::SymbolResolver;
