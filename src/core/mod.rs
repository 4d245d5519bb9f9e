pub mod error;

pub use error::{MarketError, MarketResult};
