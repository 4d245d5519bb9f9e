//! Filter state, the predicate engine, and the active-filter ledger.

pub mod engine;
pub mod store;
pub mod types;


pub use engine::{apply_filters, sort_listings};
pub use store::{FilterStore, RangeCountPolicy};
pub use types::{
    Choice, ExpandedSections, FilterKey, FilterState, FilterUpdate, LastUpdate, LocationFilter,
    PriceFilter, RangeFilter, SortOption,
};
