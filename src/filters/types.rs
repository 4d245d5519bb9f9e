use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::listings::types::{ContentType, Praca, SaleFormat, SaleOrigin};

/// Single-select attribute value. `Any` is the explicit "unconstrained"
/// variant that replaces the legacy "todas"/"todos" and empty-string
/// sentinels; both legacy spellings still parse to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    #[default]
    Any,
    Value(String),
}

impl Choice {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("todas")
            || trimmed.eq_ignore_ascii_case("todos")
        {
            Choice::Any
        } else {
            Choice::Value(trimmed.to_string())
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Choice::Any => None,
            Choice::Value(value) => Some(value.as_str()),
        }
    }

    /// True when unconstrained or when the candidate equals the selected
    /// value (case-insensitive). A constrained choice never matches a
    /// missing candidate.
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        match self {
            Choice::Any => true,
            Choice::Value(value) => candidate
                .map(|c| c.eq_ignore_ascii_case(value))
                .unwrap_or(false),
        }
    }
}

/// Textual numeric range; `None` bounds are unconstrained and non-numeric
/// text behaves as an absent bound, never as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl RangeFilter {
    pub fn new(min: Option<String>, max: Option<String>) -> Self {
        Self { min, max }
    }

    pub fn from_bounds(min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min: min.map(|v| v.to_string()),
            max: max.map(|v| v.to_string()),
        }
    }

    pub fn min_value(&self) -> Option<i64> {
        parse_bound(self.min.as_deref())
    }

    pub fn max_value(&self) -> Option<i64> {
        parse_bound(self.max.as_deref())
    }

    pub fn is_unset(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Bound check with absent-candidate semantics: a set bound rejects
    /// candidates that carry no value at all.
    pub fn contains(&self, candidate: Option<i64>) -> bool {
        if let Some(min) = self.min_value() {
            match candidate {
                Some(value) if value >= min => {}
                _ => return false,
            }
        }
        if let Some(max) = self.max_value() {
            match candidate {
                Some(value) if value <= max => {}
                _ => return false,
            }
        }
        true
    }
}

fn parse_bound(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}

/// Dual representation of the price constraint: slider positions plus the
/// textual bounds shown in the inputs. Every mutation goes through the
/// store, which re-derives the other half, so the two never diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFilter {
    pub slider: [i64; 2],
    pub range: RangeFilter,
}

impl PriceFilter {
    pub fn with_bounds(bounds: [i64; 2]) -> Self {
        Self {
            slider: bounds,
            range: RangeFilter::from_bounds(Some(bounds[0]), Some(bounds[1])),
        }
    }

    pub fn set_slider(&mut self, slider: [i64; 2]) {
        self.slider = slider;
        self.range = RangeFilter::from_bounds(Some(slider[0]), Some(slider[1]));
    }

    /// Apply typed bounds. Absent or non-numeric bounds fall back to the
    /// vertical's defaults so the slider always has two positions.
    pub fn set_range(&mut self, range: RangeFilter, default_bounds: [i64; 2]) {
        let min = range.min_value().unwrap_or(default_bounds[0]);
        let max = range.max_value().unwrap_or(default_bounds[1]);
        self.slider = [min, max];
        self.range = RangeFilter::from_bounds(Some(min), Some(max));
    }
}

/// Sort options offered by the listing grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    HighestDiscount,
    Nearest,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::HighestDiscount => "highest-discount",
            SortOption::Nearest => "nearest",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "price-asc" => SortOption::PriceAsc,
            "price-desc" => SortOption::PriceDesc,
            "highest-discount" => SortOption::HighestDiscount,
            "nearest" => SortOption::Nearest,
            _ => SortOption::Newest,
        }
    }
}

/// Identifies which field an update touched; recorded as the store's
/// last-update marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    ContentType,
    State,
    City,
    VehicleTypes,
    PropertyTypes,
    Category,
    Price,
    Year,
    UsefulArea,
    Brand,
    Model,
    Color,
    Format,
    Origin,
    Place,
}

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::ContentType => "contentType",
            FilterKey::State => "state",
            FilterKey::City => "city",
            FilterKey::VehicleTypes => "vehicleTypes",
            FilterKey::PropertyTypes => "propertyTypes",
            FilterKey::Category => "category",
            FilterKey::Price => "price",
            FilterKey::Year => "year",
            FilterKey::UsefulArea => "usefulArea",
            FilterKey::Brand => "brand",
            FilterKey::Model => "model",
            FilterKey::Color => "color",
            FilterKey::Format => "format",
            FilterKey::Origin => "origin",
            FilterKey::Place => "place",
        }
    }
}

/// Tagged single-field update. All store mutation flows through these so
/// the cross-field invariants live in one exhaustive match.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    ContentType(ContentType),
    State(Option<String>),
    City(Option<String>),
    VehicleTypes(Vec<String>),
    PropertyTypes(Vec<String>),
    Category(Choice),
    PriceSlider([i64; 2]),
    PriceRange(RangeFilter),
    Year(RangeFilter),
    UsefulArea(RangeFilter),
    Brand(Choice),
    Model(Choice),
    Color(Choice),
    Format(Option<SaleFormat>),
    Origin(Option<SaleOrigin>),
    Place(Option<Praca>),
}

impl FilterUpdate {
    pub fn key(&self) -> FilterKey {
        match self {
            FilterUpdate::ContentType(_) => FilterKey::ContentType,
            FilterUpdate::State(_) => FilterKey::State,
            FilterUpdate::City(_) => FilterKey::City,
            FilterUpdate::VehicleTypes(_) => FilterKey::VehicleTypes,
            FilterUpdate::PropertyTypes(_) => FilterKey::PropertyTypes,
            FilterUpdate::Category(_) => FilterKey::Category,
            FilterUpdate::PriceSlider(_) | FilterUpdate::PriceRange(_) => FilterKey::Price,
            FilterUpdate::Year(_) => FilterKey::Year,
            FilterUpdate::UsefulArea(_) => FilterKey::UsefulArea,
            FilterUpdate::Brand(_) => FilterKey::Brand,
            FilterUpdate::Model(_) => FilterKey::Model,
            FilterUpdate::Color(_) => FilterKey::Color,
            FilterUpdate::Format(_) => FilterKey::Format,
            FilterUpdate::Origin(_) => FilterKey::Origin,
            FilterUpdate::Place(_) => FilterKey::Place,
        }
    }
}

/// What the most recent store mutation was. Bulk loads and resets are
/// tagged distinctly so consumers can suppress per-field side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastUpdate {
    None,
    Field(FilterKey),
    Bulk,
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub state: Option<String>,
    pub city: Option<String>,
}

impl LocationFilter {
    pub fn is_set(&self) -> bool {
        self.state.is_some() || self.city.is_some()
    }
}

/// The full filter record for one vertical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub content_type: ContentType,
    pub location: LocationFilter,
    pub vehicle_types: Vec<String>,
    pub property_types: Vec<String>,
    pub category: Choice,
    pub price: PriceFilter,
    pub year: RangeFilter,
    pub useful_area: RangeFilter,
    pub brand: Choice,
    pub model: Choice,
    pub color: Choice,
    pub format: Option<SaleFormat>,
    pub origin: Option<SaleOrigin>,
    pub place: Option<Praca>,
}

impl FilterState {
    pub fn defaults(content_type: ContentType) -> Self {
        Self {
            content_type,
            location: LocationFilter::default(),
            vehicle_types: Vec::new(),
            property_types: Vec::new(),
            category: Choice::Any,
            price: PriceFilter::with_bounds(Self::default_price_bounds(content_type)),
            year: RangeFilter::default(),
            useful_area: RangeFilter::default(),
            brand: Choice::Any,
            model: Choice::Any,
            color: Choice::Any,
            format: None,
            origin: None,
            place: None,
        }
    }

    /// Default slider positions per vertical.
    pub fn default_price_bounds(content_type: ContentType) -> [i64; 2] {
        match content_type {
            ContentType::Property => [10_000, 1_000_000],
            ContentType::Vehicle => [5_000, 500_000],
        }
    }

    /// The type multi-select relevant to the current vertical.
    pub fn type_selection(&self) -> &[String] {
        match self.content_type {
            ContentType::Vehicle => &self.vehicle_types,
            ContentType::Property => &self.property_types,
        }
    }
}

/// UI expand/collapse state per filter section; lifecycle independent of
/// the filter values themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedSections {
    sections: BTreeMap<String, bool>,
}

impl ExpandedSections {
    pub const KEYS: [&'static str; 7] = [
        "location",
        "type",
        "price",
        "year",
        "usefulArea",
        "characteristics",
        "auction",
    ];

    const OPEN_BY_DEFAULT: [&'static str; 3] = ["location", "type", "price"];

    pub fn toggle(&mut self, key: &str) {
        if let Some(expanded) = self.sections.get_mut(key) {
            *expanded = !*expanded;
        }
    }

    pub fn expand_all(&mut self) {
        for expanded in self.sections.values_mut() {
            *expanded = true;
        }
    }

    pub fn collapse_all(&mut self) {
        for expanded in self.sections.values_mut() {
            *expanded = false;
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.sections.get(key).copied().unwrap_or(false)
    }
}

impl Default for ExpandedSections {
    fn default() -> Self {
        let sections = Self::KEYS
            .iter()
            .map(|key| (key.to_string(), Self::OPEN_BY_DEFAULT.contains(key)))
            .collect();
        Self { sections }
    }
}
