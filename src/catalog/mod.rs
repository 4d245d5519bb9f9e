//! Paged, filtered catalog queries over the listing set, with a simulated
//! backend latency and derived header statistics.

pub mod store;

pub use store::{ListingCatalog, PageQuery, PageResult};
