// src/domain/listing.rs

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::category::{PropertyType, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "VES")]
    Ves,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ves => "VES",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "USD" | "usd" => Some(Currency::Usd),
            "VES" | "ves" => Some(Currency::Ves),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "US$",
            Currency::Ves => "Bs.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Sold,
    Rented,
    Inactive,
}

impl ListingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Sold => "sold",
            ListingStatus::Rented => "rented",
            ListingStatus::Inactive => "inactive",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "active" => Some(ListingStatus::Active),
            "sold" => Some(ListingStatus::Sold),
            "rented" => Some(ListingStatus::Rented),
            "inactive" => Some(ListingStatus::Inactive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Active => "activa",
            ListingStatus::Sold => "vendida",
            ListingStatus::Rented => "alquilada",
            ListingStatus::Inactive => "inactiva",
        }
    }
}

/// A property listing as stored in the `listings` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRecord {
    pub id: i64,
    pub owner_id: Option<i64>,

    pub title: String,
    pub description: String,

    pub price: i64,
    pub currency: Currency,

    pub property_type: PropertyType,
    pub transaction_type: TransactionType,

    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub area_m2: Option<i64>,

    // Location
    pub city: String,
    pub state: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub images: Vec<String>,
    pub features: Vec<String>,

    pub status: ListingStatus,
    pub featured: bool,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ListingRecord {
    pub fn detail_path(&self) -> String {
        format!("/propiedades/{}", self.id)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Amenities a publisher may tick on the publish form.
pub const COMMON_FEATURES: &[&str] = &[
    "Piscina",
    "Jardín",
    "Garaje",
    "Seguridad 24h",
    "Aire acondicionado",
    "Cocina integral",
    "Vista panorámica",
    "Balcón",
    "Terraza",
    "Ascensor",
    "Portería",
    "Gym",
    "Área social",
    "Parqueadero visitantes",
    "Depósito",
    "Cuarto de servicio",
    "Vigilancia",
    "Transporte público cerca",
];
