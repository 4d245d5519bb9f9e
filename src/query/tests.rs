use crate::filters::store::FilterStore;
use crate::filters::types::{Choice, FilterUpdate, RangeFilter, SortOption};
use crate::listings::types::{ContentType, SaleFormat};

use super::params::QueryParams;
use super::sync::{load_from_params, write_to_params};

#[test]
fn default_state_writes_empty_query() {
    let store = FilterStore::new(ContentType::Property);
    let mut params = QueryParams::new();
    write_to_params(store.filters(), SortOption::Newest, &mut params);
    assert!(params.is_empty());
    assert_eq!(params.to_query_string(), "");
}

#[test]
fn round_trip_reproduces_filter_state_and_query() {
    let mut store = FilterStore::new(ContentType::Vehicle);
    store.apply(FilterUpdate::State(Some("SP".to_string())));
    store.apply(FilterUpdate::City(Some("São Paulo".to_string())));
    store.apply(FilterUpdate::VehicleTypes(vec![
        "carro".to_string(),
        "moto".to_string(),
    ]));
    store.apply(FilterUpdate::Brand(Choice::Value("Fiat".to_string())));
    store.apply(FilterUpdate::Year(RangeFilter::new(
        Some("2018".to_string()),
        None,
    )));
    store.apply(FilterUpdate::PriceSlider([20_000, 500_000]));
    store.apply(FilterUpdate::Format(Some(SaleFormat::Auction)));

    let mut params = QueryParams::new();
    write_to_params(store.filters(), SortOption::PriceAsc, &mut params);
    let encoded = params.to_query_string();

    let reparsed = QueryParams::parse(&encoded);
    let loaded = load_from_params(&reparsed, ContentType::Vehicle).expect("relevant keys present");
    assert_eq!(loaded.sort, Some(SortOption::PriceAsc));

    let mut restored = FilterStore::new(ContentType::Vehicle);
    restored.apply_bulk(loaded.updates);
    assert_eq!(restored.filters(), store.filters());

    // Re-encoding the restored state yields the identical query string.
    let mut rewritten = QueryParams::new();
    write_to_params(restored.filters(), SortOption::PriceAsc, &mut rewritten);
    assert_eq!(rewritten.to_query_string(), encoded);
}

#[test]
fn write_omits_default_price_bound() {
    let mut store = FilterStore::new(ContentType::Property);
    // Max stays at the property default of 1_000_000.
    store.apply(FilterUpdate::PriceRange(RangeFilter::from_bounds(
        Some(100_000),
        None,
    )));

    let mut params = QueryParams::new();
    write_to_params(store.filters(), SortOption::Newest, &mut params);
    assert_eq!(params.get("priceMin"), Some("100000"));
    assert!(!params.contains("priceMax"));
}

#[test]
fn sort_key_only_written_when_not_default() {
    let store = FilterStore::new(ContentType::Property);

    let mut params = QueryParams::new();
    write_to_params(store.filters(), SortOption::HighestDiscount, &mut params);
    assert_eq!(params.get("sort"), Some("highest-discount"));

    let mut defaulted = QueryParams::new();
    write_to_params(store.filters(), SortOption::Newest, &mut defaulted);
    assert!(!defaulted.contains("sort"));
}

#[test]
fn page_preserved_when_filter_subset_unchanged() {
    let mut store = FilterStore::new(ContentType::Property);
    store.apply(FilterUpdate::State(Some("SP".to_string())));

    let mut params = QueryParams::parse("state=SP&page=3");
    write_to_params(store.filters(), SortOption::Newest, &mut params);
    assert_eq!(params.get("page"), Some("3"));
    assert_eq!(params.get("state"), Some("SP"));
}

#[test]
fn page_resets_when_any_filter_key_changes() {
    let mut store = FilterStore::new(ContentType::Property);
    store.apply(FilterUpdate::State(Some("SP".to_string())));
    store.apply(FilterUpdate::City(Some("Campinas".to_string())));

    let mut params = QueryParams::parse("state=SP&page=3");
    write_to_params(store.filters(), SortOption::Newest, &mut params);
    assert!(!params.contains("page"));
    assert_eq!(params.get("city"), Some("Campinas"));
}

#[test]
fn sort_change_alone_preserves_page() {
    let mut store = FilterStore::new(ContentType::Property);
    store.apply(FilterUpdate::State(Some("SP".to_string())));

    let mut params = QueryParams::parse("state=SP&sort=price-asc&page=2");
    write_to_params(store.filters(), SortOption::PriceDesc, &mut params);
    assert_eq!(params.get("page"), Some("2"));
    assert_eq!(params.get("sort"), Some("price-desc"));
}

#[test]
fn page_one_is_never_written() {
    let mut store = FilterStore::new(ContentType::Property);
    store.apply(FilterUpdate::State(Some("SP".to_string())));

    let mut params = QueryParams::parse("state=SP&page=1");
    write_to_params(store.filters(), SortOption::Newest, &mut params);
    assert!(!params.contains("page"));
}

#[test]
fn legacy_location_key_maps_to_city() {
    let params = QueryParams::parse("location=Campinas");
    let loaded = load_from_params(&params, ContentType::Property).expect("legacy key is relevant");
    assert!(loaded
        .updates
        .contains(&FilterUpdate::City(Some("Campinas".to_string()))));

    // The split keys win over the legacy one when both are present.
    let split = QueryParams::parse("city=Santos&location=Campinas");
    let loaded = load_from_params(&split, ContentType::Property).expect("city key is relevant");
    assert!(loaded
        .updates
        .contains(&FilterUpdate::City(Some("Santos".to_string()))));
    assert!(!loaded
        .updates
        .contains(&FilterUpdate::City(Some("Campinas".to_string()))));
}

#[test]
fn malformed_numeric_params_fall_back_to_defaults() {
    let params = QueryParams::parse("yearMin=abc&yearMax=2x00");
    let loaded = load_from_params(&params, ContentType::Vehicle).expect("year keys are relevant");

    let mut store = FilterStore::new(ContentType::Vehicle);
    store.apply_bulk(loaded.updates);
    assert!(store.filters().year.is_unset());
    assert_eq!(store.active_filters(), 0);
}

#[test]
fn unknown_enum_values_degrade_to_unconstrained() {
    let params = QueryParams::parse("format=banana&place=15");
    let loaded = load_from_params(&params, ContentType::Property).expect("keys are relevant");

    let mut store = FilterStore::new(ContentType::Property);
    store.apply_bulk(loaded.updates);
    assert_eq!(store.filters().format, None);
    assert_eq!(store.filters().place, None);
}

#[test]
fn load_returns_none_without_relevant_keys() {
    assert!(load_from_params(&QueryParams::new(), ContentType::Property).is_none());

    let noise = QueryParams::parse("utm_source=mail&page=4");
    assert!(load_from_params(&noise, ContentType::Property).is_none());
}

#[test]
fn load_reads_sort_and_page() {
    let params = QueryParams::parse("brand=Fiat&sort=nearest&page=5");
    let loaded = load_from_params(&params, ContentType::Vehicle).expect("brand key is relevant");
    assert_eq!(loaded.sort, Some(SortOption::Nearest));
    assert_eq!(loaded.page, Some(5));
}

#[test]
fn types_are_comma_joined_and_split() {
    let mut store = FilterStore::new(ContentType::Vehicle);
    store.apply(FilterUpdate::VehicleTypes(vec![
        "carro".to_string(),
        "caminhao".to_string(),
    ]));

    let mut params = QueryParams::new();
    write_to_params(store.filters(), SortOption::Newest, &mut params);
    assert_eq!(params.get("types"), Some("carro,caminhao"));

    let loaded =
        load_from_params(&params, ContentType::Vehicle).expect("types key is relevant");
    assert!(loaded
        .updates
        .contains(&FilterUpdate::VehicleTypes(vec![
            "carro".to_string(),
            "caminhao".to_string(),
        ])));
}

#[test]
fn query_params_container_semantics() {
    let mut params = QueryParams::parse("state=SP&page=2");
    assert_eq!(params.len(), 2);

    params.set("state", "RJ");
    assert_eq!(params.get("state"), Some("RJ"));
    assert_eq!(params.len(), 2);

    params.remove("page");
    assert!(!params.contains("page"));
    assert_eq!(params.len(), 1);
}

#[test]
fn query_params_percent_encoding_round_trips() {
    let mut params = QueryParams::new();
    params.set("city", "São Paulo");
    let encoded = params.to_query_string();
    assert!(!encoded.contains(' '));

    let reparsed = QueryParams::parse(&encoded);
    assert_eq!(reparsed.get("city"), Some("São Paulo"));
}
