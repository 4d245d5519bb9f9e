//! Bidirectional mapping between filter state and its query-string
//! representation, used for deep links and back/forward navigation.
//!
//! The encoded form is canonical and minimal: only non-default fields are
//! present, so two equal filter states always produce identical query
//! strings.

use crate::filters::types::{Choice, FilterState, FilterUpdate, RangeFilter, SortOption};
use crate::listings::types::{ContentType, Praca, SaleFormat, SaleOrigin};
use crate::logger::{self, LogTag};

use super::params::QueryParams;

/// Query keys owned by the filter contract, in canonical write order.
const FILTER_KEYS: [&str; 15] = [
    "state",
    "city",
    "types",
    "brand",
    "model",
    "color",
    "yearMin",
    "yearMax",
    "priceMin",
    "priceMax",
    "usefulAreaMin",
    "usefulAreaMax",
    "format",
    "origin",
    "place",
];

/// Legacy combined key, accepted on load only.
const LEGACY_LOCATION_KEY: &str = "location";
const SORT_KEY: &str = "sort";
const PAGE_KEY: &str = "page";

/// Outcome of reading the filter-relevant query keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlFilters {
    pub updates: Vec<FilterUpdate>,
    pub sort: Option<SortOption>,
    pub page: Option<usize>,
}

/// Parse known query keys into a filter patch for the given vertical.
///
/// Returns `None` when no relevant key is present so callers can skip a
/// redundant store write. Malformed numeric values are dropped silently
/// (the field falls back to its default).
pub fn load_from_params(params: &QueryParams, content_type: ContentType) -> Option<UrlFilters> {
    let mut updates = Vec::new();

    let state = params.get("state");
    let mut city = params.get("city");
    // Backward compatibility: old links carried the municipality under a
    // single `location` key.
    if state.is_none() && city.is_none() {
        city = params.get(LEGACY_LOCATION_KEY);
    }
    if let Some(state) = state {
        updates.push(FilterUpdate::State(Some(state.to_string())));
    }
    if let Some(city) = city {
        updates.push(FilterUpdate::City(Some(city.to_string())));
    }

    if let Some(raw) = params.get("types") {
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

    if let Some(raw) = params.get("brand") {
        updates.push(FilterUpdate::Brand(Choice::parse(raw)));
    }
    if let Some(raw) = params.get("model") {
        updates.push(FilterUpdate::Model(Choice::parse(raw)));
    }
    if let Some(raw) = params.get("color") {
        updates.push(FilterUpdate::Color(Choice::parse(raw)));
    }

    if let Some(range) = load_range(params, "yearMin", "yearMax") {
        updates.push(FilterUpdate::Year(range));
    }
    if let Some(range) = load_range(params, "priceMin", "priceMax") {
        updates.push(FilterUpdate::PriceRange(range));
    }
    if let Some(range) = load_range(params, "usefulAreaMin", "usefulAreaMax") {
        updates.push(FilterUpdate::UsefulArea(range));
    }

    if let Some(raw) = params.get("format") {
        updates.push(FilterUpdate::Format(SaleFormat::parse(raw)));
    }
    if let Some(raw) = params.get("origin") {
        updates.push(FilterUpdate::Origin(SaleOrigin::parse(raw)));
    }
    if let Some(raw) = params.get("place") {
        updates.push(FilterUpdate::Place(Praca::parse(raw)));
    }

    let sort = params.get(SORT_KEY).map(SortOption::from_str);
    let page = params
        .get(PAGE_KEY)
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|page| *page >= 1);

    if updates.is_empty() && sort.is_none() {
        return None;
    }

    Some(UrlFilters {
        updates,
        sort,
        page,
    })
}

/// Rewrite `params` to the canonical minimal encoding of `filters` and
/// `sort`. The previous page number survives only when the encoded filter
/// subset matches what the params already carried; any filter difference
/// resets pagination to the first page. The comparison is re-derived on
/// every call.
pub fn write_to_params(filters: &FilterState, sort: SortOption, params: &mut QueryParams) {
    let encoded = encode_filters(filters);

    let previous = filter_subset(params);
    let filters_changed = previous != encoded;

    let preserved_page = if filters_changed {
        None
    } else {
        params
            .get(PAGE_KEY)
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|page| *page > 1)
    };

    let mut pairs = encoded;
    if sort != SortOption::Newest {
        pairs.push((SORT_KEY.to_string(), sort.as_str().to_string()));
    }
    if let Some(page) = preserved_page {
        pairs.push((PAGE_KEY.to_string(), page.to_string()));
    }

    if filters_changed {
        logger::debug(LogTag::Query, "filter subset changed, page reset to 1");
    }
    params.replace_all(pairs);
}

fn load_range(params: &QueryParams, min_key: &str, max_key: &str) -> Option<RangeFilter> {
    if !params.contains(min_key) && !params.contains(max_key) {
        return None;
    }
    let min = params.get(min_key).and_then(parse_numeric);
    let max = params.get(max_key).and_then(parse_numeric);
    Some(RangeFilter::from_bounds(min, max))
}

fn parse_numeric(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Canonical pair list for the non-default filter fields.
fn encode_filters(filters: &FilterState) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut push = |key: &str, value: String| pairs.push((key.to_string(), value));

    if let Some(state) = filters.location.state.as_deref() {
        push("state", state.to_string());
    }
    if let Some(city) = filters.location.city.as_deref() {
        push("city", city.to_string());
    }

    let selection = filters.type_selection();
    if !selection.is_empty() {
        push("types", selection.join(","));
    }

    if let Some(brand) = filters.brand.value() {
        push("brand", brand.to_string());
    }
    if let Some(model) = filters.model.value() {
        push("model", model.to_string());
    }
    if let Some(color) = filters.color.value() {
        push("color", color.to_string());
    }

    if let Some(min) = filters.year.min_value() {
        push("yearMin", min.to_string());
    }
    if let Some(max) = filters.year.max_value() {
        push("yearMax", max.to_string());
    }

    let default_price = FilterState::default_price_bounds(filters.content_type);
    if let Some(min) = filters.price.range.min_value() {
        if min != default_price[0] {
            push("priceMin", min.to_string());
        }
    }
    if let Some(max) = filters.price.range.max_value() {
        if max != default_price[1] {
            push("priceMax", max.to_string());
        }
    }

    if let Some(min) = filters.useful_area.min_value() {
        push("usefulAreaMin", min.to_string());
    }
    if let Some(max) = filters.useful_area.max_value() {
        push("usefulAreaMax", max.to_string());
    }

    if let Some(format) = filters.format {
        push("format", format.as_str().to_string());
    }
    if let Some(origin) = filters.origin {
        push("origin", origin.as_str().to_string());
    }
    if let Some(place) = filters.place {
        push("place", place.as_str().to_string());
    }

    pairs
}

/// The filter-contract pairs currently present in `params`, in canonical
/// key order; sort and page never participate in the comparison.
fn filter_subset(params: &QueryParams) -> Vec<(String, String)> {
    FILTER_KEYS
        .iter()
        .filter_map(|&key| {
            params
                .get(key)
                .map(|value| (key.to_string(), value.to_string()))
        })
        .collect()
}
