//! Deterministic sample dataset standing in for the marketplace backend.
//!
//! Seeded so repeated runs (and tests) see the same catalog.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{ContentType, Listing, Praca, SaleFormat, SaleOrigin};

const SAMPLE_SEED: u64 = 0x4152_5245;

const PROPERTY_COUNT: usize = 36;
const VEHICLE_COUNT: usize = 24;

const LOCATIONS: [(&str, &str); 8] = [
    ("SP", "São Paulo"),
    ("SP", "Campinas"),
    ("SP", "Santos"),
    ("RJ", "Rio de Janeiro"),
    ("MG", "Belo Horizonte"),
    ("PR", "Curitiba"),
    ("BA", "Salvador"),
    ("RS", "Porto Alegre"),
];

const SITES: [&str; 5] = [
    "Mega Leilões",
    "Sodré Santoro",
    "Zukerman",
    "Superbid",
    "Freitas Leiloeiro",
];

const PROPERTY_TYPES: [(&str, &str); 6] = [
    ("apartamento", "residencial"),
    ("casa", "residencial"),
    ("terreno", "residencial"),
    ("sala-comercial", "comercial"),
    ("galpao", "comercial"),
    ("chacara", "rural"),
];

const VEHICLE_TYPES: [(&str, &str); 5] = [
    ("carro", "leves"),
    ("carro", "leves"),
    ("moto", "leves"),
    ("utilitario", "leves"),
    ("caminhao", "pesados"),
];

const VEHICLES: [(&str, &str); 10] = [
    ("Fiat", "Uno"),
    ("Fiat", "Strada"),
    ("Volkswagen", "Gol"),
    ("Volkswagen", "Saveiro"),
    ("Chevrolet", "Onix"),
    ("Chevrolet", "S10"),
    ("Toyota", "Corolla"),
    ("Toyota", "Hilux"),
    ("Honda", "Civic"),
    ("Honda", "CG 160"),
];

const COLORS: [&str; 6] = ["branco", "preto", "prata", "vermelho", "azul", "cinza"];

/// Build the full sample catalog: both verticals, all auction mechanics
/// represented, prices inside the default slider bounds of each vertical.
pub fn sample_listings() -> Vec<Listing> {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let now = Utc::now();
    let mut listings = Vec::with_capacity(PROPERTY_COUNT + VEHICLE_COUNT);

    for i in 0..PROPERTY_COUNT {
        let (state, city) = LOCATIONS[i % LOCATIONS.len()];
        let (type_name, category) = PROPERTY_TYPES[i % PROPERTY_TYPES.len()];
        let price = rng.gen_range(40_000..900_000);
        let original_price = if i % 5 == 0 {
            None
        } else {
            Some(price + price * rng.gen_range(5..60) / 100)
        };
        let useful_area = match category {
            "rural" => rng.gen_range(800..20_000),
            "comercial" => rng.gen_range(60..2_000),
            _ => rng.gen_range(30..400),
        };
        let (format, place) = sale_mechanics(i);

        listings.push(Listing {
            id: format!("prop-{:03}", i + 1),
            content_type: ContentType::Property,
            title: format!("{} em {}", title_case(type_name), city),
            state: state.to_string(),
            city: city.to_string(),
            type_name: type_name.to_string(),
            category: category.to_string(),
            brand: None,
            model: None,
            color: None,
            year: None,
            useful_area_m2: Some(useful_area),
            price,
            original_price,
            format,
            origin: origin_for(i),
            place,
            site: SITES[i % SITES.len()].to_string(),
            created_at: now - Duration::days(rng.gen_range(0..540)),
            url: format!("https://leiloes.example.com.br/lote/prop-{:03}", i + 1),
        });
    }

    for i in 0..VEHICLE_COUNT {
        let (state, city) = LOCATIONS[(i + 3) % LOCATIONS.len()];
        let (type_name, category) = VEHICLE_TYPES[i % VEHICLE_TYPES.len()];
        let (brand, model) = VEHICLES[i % VEHICLES.len()];
        let year = rng.gen_range(2008..=2025);
        let price = match category {
            "pesados" => rng.gen_range(60_000..450_000),
            _ => rng.gen_range(8_000..180_000),
        };
        let original_price = if i % 4 == 0 {
            None
        } else {
            Some(price + price * rng.gen_range(10..50) / 100)
        };
        let (format, place) = sale_mechanics(i);

        listings.push(Listing {
            id: format!("veh-{:03}", i + 1),
            content_type: ContentType::Vehicle,
            title: format!("{} {} {}", brand, model, year),
            state: state.to_string(),
            city: city.to_string(),
            type_name: type_name.to_string(),
            category: category.to_string(),
            brand: Some(brand.to_string()),
            model: Some(model.to_string()),
            color: Some(COLORS[i % COLORS.len()].to_string()),
            year: Some(year),
            useful_area_m2: None,
            price,
            original_price,
            format,
            origin: origin_for(i),
            place,
            site: SITES[(i + 2) % SITES.len()].to_string(),
            created_at: now - Duration::days(rng.gen_range(0..540)),
            url: format!("https://leiloes.example.com.br/lote/veh-{:03}", i + 1),
        });
    }

    listings
}

fn sale_mechanics(index: usize) -> (SaleFormat, Option<Praca>) {
    if index % 4 == 3 {
        (SaleFormat::DirectSale, None)
    } else if index % 2 == 0 {
        (SaleFormat::Auction, Some(Praca::First))
    } else {
        (SaleFormat::Auction, Some(Praca::Second))
    }
}

fn origin_for(index: usize) -> SaleOrigin {
    if index % 3 == 0 {
        SaleOrigin::Extrajudicial
    } else {
        SaleOrigin::Judicial
    }
}

fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
