pub mod dividend;
pub mod identifier;
pub mod price_bar;
pub mod quote;
pub mod search_hit;
pub mod stock_data;

pub use dividend::{AnnualDividend, DividendEvent};
pub use identifier::{IdentifierKind, Resolution, ResolutionSource};
pub use price_bar::{HistoryRange, Interval, PriceBar, PricePoint};
pub use quote::Quote;
pub use search_hit::SearchHit;
pub use stock_data::StockData;
