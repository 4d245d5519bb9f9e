//! Small shared utilities.

pub mod debounce;

pub use debounce::Debouncer;
