use crate::listings::types::{ContentType, SaleFormat};
use crate::logger::{self, LogTag};

use super::types::{
    Choice, ExpandedSections, FilterState, FilterUpdate, LastUpdate, PriceFilter, RangeFilter,
};

/// How range filters contribute to the active-filter count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCountPolicy {
    /// A range counts when both bounds are present and the pair differs
    /// from the default pair (marketplace behavior: a single typed bound
    /// stays untracked).
    BothBounds,
    /// A range counts as soon as either bound is present and differs from
    /// its default (legacy vehicle-panel behavior).
    AnyBound,
}

/// Owned filter container for one vertical: current values, the derived
/// active-filter count, the last-update marker, and the section
/// expand/collapse state. Constructed and injected by the caller; there is
/// no process-wide instance.
#[derive(Debug, Clone)]
pub struct FilterStore {
    filters: FilterState,
    active_filters: usize,
    last_update: LastUpdate,
    sections: ExpandedSections,
    count_policy: RangeCountPolicy,
}

impl FilterStore {
    pub fn new(content_type: ContentType) -> Self {
        Self::with_policy(content_type, RangeCountPolicy::BothBounds)
    }

    /// Preset matching the standalone vehicle filter panel, which counts a
    /// range as active as soon as one bound is set.
    pub fn vehicle_panel() -> Self {
        Self::with_policy(ContentType::Vehicle, RangeCountPolicy::AnyBound)
    }

    pub fn with_policy(content_type: ContentType, count_policy: RangeCountPolicy) -> Self {
        Self {
            filters: FilterState::defaults(content_type),
            active_filters: 0,
            last_update: LastUpdate::None,
            sections: ExpandedSections::default(),
            count_policy,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn active_filters(&self) -> usize {
        self.active_filters
    }

    pub fn last_update(&self) -> LastUpdate {
        self.last_update
    }

    pub fn count_policy(&self) -> RangeCountPolicy {
        self.count_policy
    }

    /// Apply one field update, enforce the cross-field invariants, and
    /// re-derive the active-filter count.
    pub fn apply(&mut self, update: FilterUpdate) {
        let key = update.key();
        self.apply_field(update);
        self.active_filters = self.count_active_filters();
        self.last_update = LastUpdate::Field(key);
        logger::debug(
            LogTag::Filters,
            &format!("updated {} active={}", key.as_str(), self.active_filters),
        );
    }

    /// Merge several fields atomically (URL-driven loads). Tagged as a
    /// bulk update so consumers can suppress per-field side effects.
    pub fn apply_bulk(&mut self, updates: Vec<FilterUpdate>) {
        let applied = updates.len();
        for update in updates {
            self.apply_field(update);
        }
        self.active_filters = self.count_active_filters();
        self.last_update = LastUpdate::Bulk;
        logger::debug(
            LogTag::Filters,
            &format!("bulk update applied fields={} active={}", applied, self.active_filters),
        );
    }

    /// Restore every field to the vertical's defaults; the vertical itself
    /// is preserved across a reset.
    pub fn reset(&mut self) {
        let content_type = self.filters.content_type;
        self.filters = FilterState::defaults(content_type);
        self.active_filters = 0;
        self.last_update = LastUpdate::Reset;
        logger::debug(
            LogTag::Filters,
            &format!("filters reset content_type={}", content_type),
        );
    }

    fn apply_field(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::ContentType(content_type) => {
                if content_type != self.filters.content_type {
                    self.filters.content_type = content_type;
                    self.filters.vehicle_types.clear();
                    self.filters.property_types.clear();
                    self.filters.category = Choice::Any;
                    self.filters.price =
                        PriceFilter::with_bounds(FilterState::default_price_bounds(content_type));
                }
            }
            FilterUpdate::State(state) => {
                self.filters.location.state = normalize_text(state);
            }
            FilterUpdate::City(city) => {
                self.filters.location.city = normalize_text(city);
            }
            FilterUpdate::VehicleTypes(types) => {
                self.filters.vehicle_types = normalize_selection(types);
            }
            FilterUpdate::PropertyTypes(types) => {
                self.filters.property_types = normalize_selection(types);
            }
            FilterUpdate::Category(category) => {
                if category != self.filters.category {
                    // Narrowing the category invalidates the type picks.
                    self.filters.vehicle_types.clear();
                    self.filters.property_types.clear();
                }
                self.filters.category = category;
            }
            FilterUpdate::PriceSlider(slider) => {
                self.filters.price.set_slider(slider);
            }
            FilterUpdate::PriceRange(range) => {
                let bounds = FilterState::default_price_bounds(self.filters.content_type);
                self.filters.price.set_range(range, bounds);
            }
            FilterUpdate::Year(range) => {
                self.filters.year = range;
            }
            FilterUpdate::UsefulArea(range) => {
                self.filters.useful_area = range;
            }
            FilterUpdate::Brand(brand) => {
                self.filters.brand = brand;
            }
            FilterUpdate::Model(model) => {
                self.filters.model = model;
            }
            FilterUpdate::Color(color) => {
                self.filters.color = color;
            }
            FilterUpdate::Format(format) => {
                self.filters.format = format;
                if format == Some(SaleFormat::DirectSale) {
                    // Praça only exists for staged auctions.
                    self.filters.place = None;
                }
            }
            FilterUpdate::Origin(origin) => {
                self.filters.origin = origin;
            }
            FilterUpdate::Place(place) => {
                if self.filters.format == Some(SaleFormat::DirectSale) {
                    self.filters.place = None;
                } else {
                    self.filters.place = place;
                }
            }
        }
    }

    /// Recompute the active-filter count from scratch. Always equals the
    /// stored `active_filters` value.
    pub fn count_active_filters(&self) -> usize {
        let filters = &self.filters;
        let mut count = 0;

        if filters.location.is_set() {
            count += 1;
        }
        if !filters.type_selection().is_empty() {
            count += 1;
        }
        if !filters.category.is_any() {
            count += 1;
        }
        if self.price_active() {
            count += 1;
        }
        if self.range_active(&filters.year) {
            count += 1;
        }
        if self.range_active(&filters.useful_area) {
            count += 1;
        }
        for choice in [&filters.brand, &filters.model, &filters.color] {
            if !choice.is_any() {
                count += 1;
            }
        }
        if filters.format.is_some() {
            count += 1;
        }
        if filters.origin.is_some() {
            count += 1;
        }
        if filters.place.is_some() {
            count += 1;
        }

        count
    }

    fn price_active(&self) -> bool {
        let defaults = FilterState::default_price_bounds(self.filters.content_type);
        let range = &self.filters.price.range;
        let min = range.min_value();
        let max = range.max_value();
        match self.count_policy {
            RangeCountPolicy::BothBounds => {
                min.is_some()
                    && max.is_some()
                    && (min != Some(defaults[0]) || max != Some(defaults[1]))
            }
            RangeCountPolicy::AnyBound => {
                min.map_or(false, |v| v != defaults[0]) || max.map_or(false, |v| v != defaults[1])
            }
        }
    }

    fn range_active(&self, range: &RangeFilter) -> bool {
        match self.count_policy {
            RangeCountPolicy::BothBounds => {
                range.min_value().is_some() && range.max_value().is_some()
            }
            RangeCountPolicy::AnyBound => {
                range.min_value().is_some() || range.max_value().is_some()
            }
        }
    }

    pub fn toggle_section(&mut self, key: &str) {
        self.sections.toggle(key);
    }

    pub fn expand_all_sections(&mut self) {
        self.sections.expand_all();
    }

    pub fn collapse_all_sections(&mut self) {
        self.sections.collapse_all();
    }

    pub fn is_section_expanded(&self, key: &str) -> bool {
        self.sections.is_expanded(key)
    }

    pub fn sections(&self) -> &ExpandedSections {
        &self.sections
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn normalize_selection(types: Vec<String>) -> Vec<String> {
    types
        .into_iter()
        .filter_map(|raw| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
