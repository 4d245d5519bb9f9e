/// Command-line arguments for the demo screener binary.
///
/// Individual filter flags build a store update list; `--query` loads a
/// full query string instead, exercising the same path a deep link takes.
use clap::Parser;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::filters::types::{Choice, FilterUpdate, RangeFilter};
use crate::listings::types::{ContentType, Praca, SaleFormat, SaleOrigin};

#[derive(Debug, Parser)]
#[command(
    name = "arremate",
    about = "Judicial-auction listing screener over the sample catalog"
)]
pub struct Arguments {
    /// Listing vertical: property | vehicle
    #[arg(long, default_value = "property")]
    pub content_type: String,

    /// Full query string to load (overrides the individual filter flags)
    #[arg(long)]
    pub query: Option<String>,

    /// UF code, e.g. SP
    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Comma-separated type selection, e.g. "apartamento,casa"
    #[arg(long)]
    pub types: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub price_min: Option<i64>,

    #[arg(long)]
    pub price_max: Option<i64>,

    #[arg(long)]
    pub year_min: Option<i64>,

    #[arg(long)]
    pub year_max: Option<i64>,

    #[arg(long)]
    pub area_min: Option<i64>,

    #[arg(long)]
    pub area_max: Option<i64>,

    /// Sale mechanism: leilao | venda-direta
    #[arg(long)]
    pub format: Option<String>,

    /// Legal origin: judicial | extrajudicial
    #[arg(long)]
    pub origin: Option<String>,

    /// Auction stage: primeira | segunda
    #[arg(long)]
    pub place: Option<String>,

    /// Sort: newest | price-asc | price-desc | highest-discount | nearest
    #[arg(long, default_value = "newest")]
    pub sort: String,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Directory for cached listing snapshots
    #[arg(long)]
    pub cache_dir: Option<std::path::PathBuf>,

    /// Enable debug logging for an area (filters, query, catalog, cache,
    /// events, main); repeatable
    #[arg(long = "debug", value_name = "AREA")]
    pub debug_areas: Vec<String>,

    /// Reduce console output to warnings and errors
    #[arg(long)]
    pub quiet: bool,
}

impl Arguments {
    pub fn content_type(&self) -> ContentType {
        ContentType::from_str(&self.content_type)
    }

    /// Convert the individual filter flags into store updates.
    pub fn to_updates(&self, content_type: ContentType) -> Vec<FilterUpdate> {
        let mut updates = Vec::new();

        if let Some(state) = &self.state {
            updates.push(FilterUpdate::State(Some(state.clone())));
        }
        if let Some(city) = &self.city {
            updates.push(FilterUpdate::City(Some(city.clone())));
        }

        if let Some(raw) = &self.types {
            let types: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            updates.push(match content_type {
                ContentType::Vehicle => FilterUpdate::VehicleTypes(types),
                ContentType::Property => FilterUpdate::PropertyTypes(types),
            });
        }

        if let Some(brand) = &self.brand {
            updates.push(FilterUpdate::Brand(Choice::parse(brand)));
        }
        if let Some(model) = &self.model {
            updates.push(FilterUpdate::Model(Choice::parse(model)));
        }
        if let Some(color) = &self.color {
            updates.push(FilterUpdate::Color(Choice::parse(color)));
        }

        if self.price_min.is_some() || self.price_max.is_some() {
            updates.push(FilterUpdate::PriceRange(RangeFilter::from_bounds(
                self.price_min,
                self.price_max,
            )));
        }
        if self.year_min.is_some() || self.year_max.is_some() {
            updates.push(FilterUpdate::Year(RangeFilter::from_bounds(
                self.year_min,
                self.year_max,
            )));
        }
        if self.area_min.is_some() || self.area_max.is_some() {
            updates.push(FilterUpdate::UsefulArea(RangeFilter::from_bounds(
                self.area_min,
                self.area_max,
            )));
        }

        if let Some(format) = &self.format {
            updates.push(FilterUpdate::Format(SaleFormat::parse(format)));
        }
        if let Some(origin) = &self.origin {
            updates.push(FilterUpdate::Origin(SaleOrigin::parse(origin)));
        }
        if let Some(place) = &self.place {
            updates.push(FilterUpdate::Place(Praca::parse(place)));
        }

        updates
    }
}
