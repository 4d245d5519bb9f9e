/// Global constants used across arremate
///
/// This module contains system-wide constants that are not configurable
/// and are used across multiple modules.

/// Listings shown per page by default (marketplace grid size)
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Hard ceiling for requested page sizes
pub const MAX_PAGE_SIZE: usize = 60;

/// Simulated backend latency for catalog fetches
pub const FETCH_LATENCY_MS: u64 = 350;

/// Cached listing snapshots expire after this window
pub const CACHE_TTL_HOURS: i64 = 24;

/// Debounce window for range-input typing
pub const DEBOUNCE_WINDOW_MS: u64 = 400;

/// Backoff schedule for scroll-restoration attempts
pub const SCROLL_RETRY_DELAYS_MS: [u64; 3] = [50, 150, 400];

/// Share of a property result set reported as "new"
pub const PROPERTY_NEW_SHARE: f64 = 0.2;
