//! Query-string synchronization: deep-linkable, canonical-minimal URLs.

pub mod params;
pub mod sync;

#[cfg(test)]
mod tests;

pub use params::QueryParams;
pub use sync::{load_from_params, write_to_params, UrlFilters};
