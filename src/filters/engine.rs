use std::cmp::Ordering;

use crate::listings::types::Listing;

use super::types::{Choice, FilterState, SortOption};

/// Apply every active filter to the candidate list in place.
///
/// Predicates are independent boolean tests on disjoint fields, so
/// application order never changes the result. Malformed bounds behave as
/// "no constraint"; this layer never fails.
pub fn apply_filters<'a>(items: &mut Vec<&'a Listing>, filters: &FilterState) {
    items.retain(|listing| listing.content_type == filters.content_type);

    if let Some(state) = filters.location.state.as_deref() {
        let needle = state.to_lowercase();
        items.retain(|listing| listing.state.to_lowercase().contains(&needle));
    }
    if let Some(city) = filters.location.city.as_deref() {
        let needle = city.to_lowercase();
        items.retain(|listing| listing.city.to_lowercase().contains(&needle));
    }

    let selection = filters.type_selection();
    if !selection.is_empty() {
        items.retain(|listing| {
            selection
                .iter()
                .any(|name| name.eq_ignore_ascii_case(&listing.type_name))
        });
    }

    if let Choice::Value(category) = &filters.category {
        items.retain(|listing| listing.category.eq_ignore_ascii_case(category));
    }

    if !filters.brand.is_any() {
        items.retain(|listing| filters.brand.matches(listing.brand.as_deref()));
    }
    if !filters.model.is_any() {
        items.retain(|listing| filters.model.matches(listing.model.as_deref()));
    }
    if !filters.color.is_any() {
        items.retain(|listing| filters.color.matches(listing.color.as_deref()));
    }

    if let Some(min) = filters.price.range.min_value() {
        items.retain(|listing| listing.price >= min);
    }
    if let Some(max) = filters.price.range.max_value() {
        items.retain(|listing| listing.price <= max);
    }

    if !filters.year.is_unset() {
        items.retain(|listing| filters.year.contains(listing.year.map(i64::from)));
    }
    if !filters.useful_area.is_unset() {
        items.retain(|listing| {
            filters
                .useful_area
                .contains(listing.useful_area_m2.map(i64::from))
        });
    }

    if let Some(format) = filters.format {
        items.retain(|listing| listing.format == format);
    }
    if let Some(origin) = filters.origin {
        items.retain(|listing| listing.origin == origin);
    }
    if let Some(place) = filters.place {
        items.retain(|listing| listing.place == Some(place));
    }
}

/// Stable sort of the candidate list; ties keep their prior order.
pub fn sort_listings(items: &mut [&Listing], sort: SortOption) {
    match sort {
        SortOption::Newest => {
            items.sort_by(|a, b| {
                b.year
                    .unwrap_or(i32::MIN)
                    .cmp(&a.year.unwrap_or(i32::MIN))
            });
        }
        SortOption::PriceAsc => {
            items.sort_by(|a, b| a.price.cmp(&b.price));
        }
        SortOption::PriceDesc => {
            items.sort_by(|a, b| b.price.cmp(&a.price));
        }
        SortOption::HighestDiscount => {
            items.sort_by(|a, b| cmp_f64(b.discount_fraction(), a.discount_fraction()));
        }
        // Alphabetical stand-in until geo distance is wired to real
        // coordinates.
        SortOption::Nearest => {
            items.sort_by(|a, b| a.location_label().cmp(&b.location_label()));
        }
    }
}

fn cmp_f64(lhs: f64, rhs: f64) -> Ordering {
    lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal)
}
