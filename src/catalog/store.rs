use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::constants::{DEFAULT_PAGE_SIZE, FETCH_LATENCY_MS, PROPERTY_NEW_SHARE};
use crate::core::{MarketError, MarketResult};
use crate::filters::engine::{apply_filters, sort_listings};
use crate::filters::types::{FilterState, SortOption};
use crate::listings::sample::sample_listings;
use crate::listings::types::{ContentType, Listing};
use crate::logger::{self, LogTag};

/// One page request against the catalog.
#[derive(Debug, Clone)]
pub struct PageQuery {
    pub filters: FilterState,
    pub sort: SortOption,
    pub page: usize,
    pub page_size: usize,
}

impl PageQuery {
    pub fn new(filters: FilterState) -> Self {
        Self {
            filters,
            sort: SortOption::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replace zero page/page_size values with sane ones.
    pub fn with_page_bounds(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }

    pub fn clamp_page_size(&mut self, max_page_size: usize) {
        let max_size = max_page_size.max(1);
        self.page_size = self.page_size.max(1).min(max_size);
    }
}

/// One page of filtered results plus the derived header statistics.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    pub items: Vec<Listing>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    /// Distinct auction houses present in the filtered set.
    pub total_sites: usize,
    /// "New" listings: current-calendar-year entries for vehicles, a fixed
    /// share of the filtered total for properties.
    pub new_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl PageResult {
    /// Zeroed result used when the fetch pipeline fails internally.
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
            total: 0,
            total_pages: 0,
            total_sites: 0,
            new_count: 0,
            updated_at: Utc::now(),
        }
    }
}

/// In-memory catalog standing in for the marketplace backend. Owns the
/// listing set and answers paged queries after a simulated network delay.
pub struct ListingCatalog {
    listings: Vec<Listing>,
    latency: Duration,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self::with_latency(listings, Duration::from_millis(FETCH_LATENCY_MS))
    }

    pub fn with_latency(listings: Vec<Listing>, latency: Duration) -> Self {
        Self { listings, latency }
    }

    /// Catalog over the built-in sample dataset.
    pub fn sample() -> Self {
        Self::new(sample_listings())
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Fetch one page. Internal failures degrade to an empty zeroed page;
    /// the error never reaches the caller.
    pub async fn fetch_page(&self, query: &PageQuery) -> PageResult {
        tokio::time::sleep(self.latency).await;

        match self.compute_page(query) {
            Ok(result) => {
                logger::debug(
                    LogTag::Catalog,
                    &format!(
                        "page={}/{} items={} total={} sites={} new={}",
                        result.page,
                        result.total_pages,
                        result.items.len(),
                        result.total,
                        result.total_sites,
                        result.new_count
                    ),
                );
                result
            }
            Err(err) => {
                logger::warning(
                    LogTag::Catalog,
                    &format!("page fetch failed, returning empty result: {}", err),
                );
                PageResult::empty(query.page_size)
            }
        }
    }

    fn compute_page(&self, query: &PageQuery) -> MarketResult<PageResult> {
        if query.page_size == 0 {
            return Err(MarketError::Catalog("page_size must be at least 1".to_string()));
        }

        let mut matches: Vec<&Listing> = self.listings.iter().collect();
        apply_filters(&mut matches, &query.filters);
        sort_listings(&mut matches, query.sort);

        let total = matches.len();
        let sites: HashSet<&str> = matches.iter().map(|listing| listing.site.as_str()).collect();
        let new_count = match query.filters.content_type {
            ContentType::Vehicle => {
                let current_year = Utc::now().year();
                matches
                    .iter()
                    .filter(|listing| listing.created_at.year() == current_year)
                    .count()
            }
            // Product rule for the real-estate vertical: a fixed share of
            // the result set is badged as new instead of a date cut.
            ContentType::Property => (total as f64 * PROPERTY_NEW_SHARE).round() as usize,
        };

        let total_pages = if total == 0 {
            0
        } else {
            (total + query.page_size - 1) / query.page_size
        };
        let normalized_page = if total_pages == 0 {
            1
        } else {
            query.page.max(1).min(total_pages)
        };

        let start = normalized_page
            .saturating_sub(1)
            .saturating_mul(query.page_size);
        let end = start.saturating_add(query.page_size).min(total);
        let items: Vec<Listing> = if start < total {
            matches[start..end].iter().map(|l| (*l).clone()).collect()
        } else {
            Vec::new()
        };

        Ok(PageResult {
            items,
            page: normalized_page,
            page_size: query.page_size,
            total,
            total_pages,
            total_sites: sites.len(),
            new_count,
            updated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, Utc};

    use super::*;
    use crate::filters::types::FilterUpdate;
    use crate::filters::FilterStore;
    use crate::listings::types::{Praca, SaleFormat, SaleOrigin};

    fn listing(id: &str, content_type: ContentType, price: i64, site: &str) -> Listing {
        Listing {
            id: id.to_string(),
            content_type,
            title: id.to_string(),
            state: "SP".to_string(),
            city: "São Paulo".to_string(),
            type_name: match content_type {
                ContentType::Property => "apartamento".to_string(),
                ContentType::Vehicle => "carro".to_string(),
            },
            category: "residencial".to_string(),
            brand: None,
            model: None,
            color: None,
            year: Some(2020),
            useful_area_m2: None,
            price,
            original_price: None,
            format: SaleFormat::Auction,
            origin: SaleOrigin::Judicial,
            place: Some(Praca::First),
            site: site.to_string(),
            created_at: Utc::now(),
            url: String::new(),
        }
    }

    fn instant_catalog(listings: Vec<Listing>) -> ListingCatalog {
        ListingCatalog::with_latency(listings, Duration::ZERO)
    }

    fn property_query(page: usize, page_size: usize) -> PageQuery {
        PageQuery {
            filters: FilterState::defaults(ContentType::Property),
            sort: SortOption::Newest,
            page,
            page_size,
        }
    }

    #[tokio::test]
    async fn paginates_by_slicing_the_filtered_set() {
        let listings: Vec<Listing> = (0..10)
            .map(|i| listing(&format!("prop-{}", i), ContentType::Property, 50_000 + i, "Zukerman"))
            .collect();
        let catalog = instant_catalog(listings);

        let result = catalog.fetch_page(&property_query(2, 4)).await;
        assert_eq!(result.total, 10);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.page, 2);
        assert_eq!(result.items.len(), 4);
    }

    #[tokio::test]
    async fn page_beyond_range_clamps_to_last_page() {
        let listings: Vec<Listing> = (0..5)
            .map(|i| listing(&format!("prop-{}", i), ContentType::Property, 60_000, "Zukerman"))
            .collect();
        let catalog = instant_catalog(listings);

        let result = catalog.fetch_page(&property_query(9, 2)).await;
        assert_eq!(result.page, 3);
        assert_eq!(result.items.len(), 1);
    }

    #[tokio::test]
    async fn empty_result_set_normalizes_to_page_one() {
        let catalog = instant_catalog(Vec::new());
        let result = catalog.fetch_page(&property_query(4, 10)).await;
        assert_eq!(result.page, 1);
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn zero_page_size_degrades_to_empty_zeroed_result() {
        let listings = vec![listing("prop-1", ContentType::Property, 80_000, "Zukerman")];
        let catalog = instant_catalog(listings);

        let result = catalog.fetch_page(&property_query(1, 0)).await;
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_sites, 0);
        assert_eq!(result.new_count, 0);
    }

    #[tokio::test]
    async fn counts_distinct_sites_in_filtered_set() {
        let listings = vec![
            listing("prop-1", ContentType::Property, 80_000, "Zukerman"),
            listing("prop-2", ContentType::Property, 90_000, "Zukerman"),
            listing("prop-3", ContentType::Property, 70_000, "Superbid"),
        ];
        let catalog = instant_catalog(listings);

        let result = catalog.fetch_page(&property_query(1, 10)).await;
        assert_eq!(result.total_sites, 2);
    }

    #[tokio::test]
    async fn vehicle_new_count_uses_current_calendar_year() {
        let mut recent = listing("veh-1", ContentType::Vehicle, 30_000, "Zukerman");
        recent.created_at = Utc::now();
        let mut old = listing("veh-2", ContentType::Vehicle, 40_000, "Zukerman");
        old.created_at = Utc::now() - ChronoDuration::days(800);
        let catalog = instant_catalog(vec![recent, old]);

        let query = PageQuery::new(FilterState::defaults(ContentType::Vehicle));
        let result = catalog.fetch_page(&query).await;
        assert_eq!(result.total, 2);
        assert_eq!(result.new_count, 1);
    }

    #[tokio::test]
    async fn property_new_count_is_a_fixed_share_of_total() {
        let listings: Vec<Listing> = (0..10)
            .map(|i| listing(&format!("prop-{}", i), ContentType::Property, 50_000, "Zukerman"))
            .collect();
        let catalog = instant_catalog(listings);

        let result = catalog.fetch_page(&property_query(1, 20)).await;
        assert_eq!(result.total, 10);
        assert_eq!(result.new_count, 2);
    }

    #[tokio::test]
    async fn filters_flow_through_to_the_page() {
        let cheap = listing("prop-1", ContentType::Property, 40_000, "Zukerman");
        let pricey = listing("prop-2", ContentType::Property, 900_000, "Superbid");
        let catalog = instant_catalog(vec![cheap, pricey]);

        let mut store = FilterStore::new(ContentType::Property);
        store.apply(FilterUpdate::PriceSlider([10_000, 100_000]));
        let query = PageQuery::new(store.filters().clone());

        let result = catalog.fetch_page(&query).await;
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id, "prop-1");
    }

    #[tokio::test]
    async fn sample_catalog_serves_both_verticals() {
        let catalog = ListingCatalog::with_latency(sample_listings(), Duration::ZERO);
        assert!(!catalog.is_empty());

        let properties = catalog.fetch_page(&property_query(1, 60)).await;
        assert!(properties.total > 0);

        let vehicles = catalog
            .fetch_page(&PageQuery::new(FilterState::defaults(ContentType::Vehicle)))
            .await;
        assert!(vehicles.total > 0);
    }
}
