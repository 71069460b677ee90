// src/domain/category.rs

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Commercial,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Commercial,
        PropertyType::Land,
    ];

    /// Machine code, as stored in the `listings.property_type` column.
    pub fn code(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "house" => Some(PropertyType::House),
            "apartment" => Some(PropertyType::Apartment),
            "commercial" => Some(PropertyType::Commercial),
            "land" => Some(PropertyType::Land),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "Casa",
            PropertyType::Apartment => "Apartamento",
            PropertyType::Commercial => "Local Comercial",
            PropertyType::Land => "Terreno",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Rent,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Sale, TransactionType::Rent];

    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Rent => "rent",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "sale" => Some(TransactionType::Sale),
            "rent" => Some(TransactionType::Rent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Sale => "Venta",
            TransactionType::Rent => "Alquiler",
        }
    }

    /// Call-to-action verb used in headings ("Comprar casa", "Alquilar casa").
    pub fn verb(&self) -> &'static str {
        match self {
            TransactionType::Sale => "Comprar",
            TransactionType::Rent => "Alquilar",
        }
    }
}

/// Row of the property reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyCategory {
    pub code: PropertyType,
    pub display_label: &'static str,
    pub url_slug: &'static str,
}

/// Row of the transaction reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionCategory {
    pub code: TransactionType,
    pub display_label: &'static str,
    pub url_slug: &'static str,
}

pub static PROPERTY_CATEGORIES: &[PropertyCategory] = &[
    PropertyCategory {
        code: PropertyType::House,
        display_label: "Casa",
        url_slug: "casa",
    },
    PropertyCategory {
        code: PropertyType::Apartment,
        display_label: "Apartamento",
        url_slug: "apartamento",
    },
    PropertyCategory {
        code: PropertyType::Commercial,
        display_label: "Local Comercial",
        url_slug: "local-comercial",
    },
    PropertyCategory {
        code: PropertyType::Land,
        display_label: "Terreno",
        url_slug: "terreno",
    },
];

pub static TRANSACTION_CATEGORIES: &[TransactionCategory] = &[
    TransactionCategory {
        code: TransactionType::Sale,
        display_label: "Venta",
        url_slug: "venta",
    },
    TransactionCategory {
        code: TransactionType::Rent,
        display_label: "Alquiler",
        url_slug: "alquiler",
    },
];
