use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level listing vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Property,
    Vehicle,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Property => "property",
            ContentType::Vehicle => "vehicle",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "vehicle" | "veiculo" | "veiculos" => ContentType::Vehicle,
            _ => ContentType::Property,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sale mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleFormat {
    Auction,
    DirectSale,
}

impl SaleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleFormat::Auction => "leilao",
            SaleFormat::DirectSale => "venda-direta",
        }
    }

    /// Unknown spellings parse to `None` (no constraint).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "leilao" => Some(SaleFormat::Auction),
            "venda-direta" => Some(SaleFormat::DirectSale),
            _ => None,
        }
    }
}

/// Legal origin of the sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleOrigin {
    Judicial,
    Extrajudicial,
}

impl SaleOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleOrigin::Judicial => "judicial",
            SaleOrigin::Extrajudicial => "extrajudicial",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "judicial" => Some(SaleOrigin::Judicial),
            "extrajudicial" => Some(SaleOrigin::Extrajudicial),
            _ => None,
        }
    }
}

/// Auction stage (praça). Only meaningful for staged auction sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Praca {
    First,
    Second,
}

impl Praca {
    pub fn as_str(&self) -> &'static str {
        match self {
            Praca::First => "primeira",
            Praca::Second => "segunda",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "primeira" | "1" => Some(Praca::First),
            "segunda" | "2" => Some(Praca::Second),
            _ => None,
        }
    }
}

/// Core listing record shared by both verticals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub content_type: ContentType,
    pub title: String,
    /// UF code, e.g. "SP".
    pub state: String,
    pub city: String,
    /// Fine-grained type within the vertical ("apartamento", "carro", ...).
    pub type_name: String,
    /// Coarse grouping ("residencial", "comercial", "leves", "pesados", ...).
    pub category: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub year: Option<i32>,
    pub useful_area_m2: Option<i32>,
    /// Current bid in whole BRL.
    pub price: i64,
    /// Appraised value in whole BRL, when published.
    pub original_price: Option<i64>,
    pub format: SaleFormat,
    pub origin: SaleOrigin,
    /// None for direct sales.
    pub place: Option<Praca>,
    /// Auction house running the sale.
    pub site: String,
    pub created_at: DateTime<Utc>,
    pub url: String,
}

impl Listing {
    /// Discount of the current bid against the appraised value, in 0.0..=1.0.
    /// Zero when no appraised value is published.
    pub fn discount_fraction(&self) -> f64 {
        match self.original_price {
            Some(original) if original > 0 => {
                (original - self.price).max(0) as f64 / original as f64
            }
            _ => 0.0,
        }
    }

    /// "city/UF" label used for display and the alphabetical nearest sort.
    pub fn location_label(&self) -> String {
        format!("{}/{}", self.city, self.state)
    }
}
