use anyhow::Result;
use clap::Parser;
use tabled::{Table, Tabled};

use arremate::arguments::Arguments;
use arremate::cache::ListingCache;
use arremate::catalog::{ListingCatalog, PageQuery};
use arremate::constants::MAX_PAGE_SIZE;
use arremate::events::EventBus;
use arremate::filters::types::SortOption;
use arremate::filters::FilterStore;
use arremate::listings::sample_listings;
use arremate::listings::types::Listing;
use arremate::logger::{self, LogLevel, LogTag};
use arremate::query::{load_from_params, write_to_params, QueryParams};

#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "location")]
    location: String,
    #[tabled(rename = "price (BRL)")]
    price: i64,
    #[tabled(rename = "discount")]
    discount: String,
    #[tabled(rename = "site")]
    site: String,
}

impl From<&Listing> for ListingRow {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            location: listing.location_label(),
            price: listing.price,
            discount: format!("{:.0}%", listing.discount_fraction() * 100.0),
            site: listing.site.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();

    logger::init();
    if args.quiet {
        logger::set_min_level(LogLevel::Warning);
    }
    for area in &args.debug_areas {
        logger::enable_debug_for_name(area);
    }

    let content_type = args.content_type();
    let mut store = FilterStore::new(content_type);
    let mut sort = SortOption::from_str(&args.sort);
    let mut page = args.page;

    if let Some(raw_query) = &args.query {
        let params = QueryParams::parse(raw_query);
        match load_from_params(&params, content_type) {
            Some(loaded) => {
                if let Some(loaded_sort) = loaded.sort {
                    sort = loaded_sort;
                }
                if let Some(loaded_page) = loaded.page {
                    page = loaded_page;
                }
                store.apply_bulk(loaded.updates);
            }
            None => logger::info(LogTag::Main, "query carried no filter keys, using defaults"),
        }
    } else {
        for update in args.to_updates(content_type) {
            store.apply(update);
        }
    }

    // Canonical deep link for the resulting state.
    let mut params = QueryParams::new();
    write_to_params(store.filters(), sort, &mut params);
    logger::info(
        LogTag::Main,
        &format!("canonical query: ?{}", params.to_query_string()),
    );

    // Listing snapshot, cache-backed when a directory is given.
    let catalog = match &args.cache_dir {
        Some(dir) => {
            let cache = ListingCache::new(dir.clone());
            let listings = match cache.get(content_type) {
                Some(cached) => {
                    logger::info(
                        LogTag::Main,
                        &format!("loaded {} listings from cache", cached.len()),
                    );
                    cached
                }
                None => {
                    let fresh = sample_listings();
                    cache.put(content_type, &fresh);
                    fresh
                }
            };
            ListingCatalog::new(listings)
        }
        None => ListingCatalog::sample(),
    };
    let mut query = PageQuery {
        filters: store.filters().clone(),
        sort,
        page,
        page_size: args.page_size,
    }
    .with_page_bounds();
    query.clamp_page_size(MAX_PAGE_SIZE);

    let bus = EventBus::new();
    let mut events = bus.subscribe();

    let result = catalog.fetch_page(&query).await;
    bus.emit_filters_applied(0.0);

    if result.items.is_empty() {
        println!("no listings match the current filters");
    } else {
        let rows: Vec<ListingRow> = result.items.iter().map(ListingRow::from).collect();
        println!("{}", Table::new(rows));
    }

    logger::info(
        LogTag::Main,
        &format!(
            "page {}/{} | {} listings | {} sites | {} new | {} active filters",
            result.page,
            result.total_pages,
            result.total,
            result.total_sites,
            result.new_count,
            store.active_filters()
        ),
    );

    if let Ok(event) = events.try_recv() {
        logger::debug(
            LogTag::Events,
            &format!("filters applied at {}", event.timestamp.to_rfc3339()),
        );
    }

    Ok(())
}
