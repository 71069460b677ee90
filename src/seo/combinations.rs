// src/seo/combinations.rs

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::category::{
    PropertyCategory, PropertyType, TransactionCategory, TransactionType,
};
use crate::geos::CityEntry;
use crate::seo::catalog::{validate_tables, CatalogError};
use crate::seo::SITE_NAME;

/// Joining word between the category part and the city part of a route slug.
pub const SLUG_JOIN_WORD: &str = "en";

/// One (city, property category, transaction category) triple and the page
/// text derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteCombination {
    pub route_slug: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub city: String,
    pub region: String,
    pub city_slug: String,
    pub property_type: PropertyType,
    pub transaction_type: TransactionType,
}

pub fn route_slug(
    city: &CityEntry,
    property: &PropertyCategory,
    transaction: &TransactionCategory,
) -> String {
    format!(
        "{}-{}-{SLUG_JOIN_WORD}-{}",
        transaction.url_slug, property.url_slug, city.url_slug
    )
}

fn keywords(city: &str, property_label: &str, transaction_label: &str) -> String {
    [
        format!("{transaction_label} {property_label} en {city}"),
        format!("{property_label} en {transaction_label} {city}"),
        format!("inmuebles en {city}"),
        format!("propiedades en {city}"),
        format!("bienes raíces {city}"),
        format!("{city} inmobiliaria"),
        format!("{transaction_label} {city}"),
        format!("{property_label} {city}"),
        format!("casas en {city}"),
        format!("apartamentos en {city}"),
    ]
    .join(", ")
}

fn build_one(
    city: &CityEntry,
    property: &PropertyCategory,
    transaction: &TransactionCategory,
) -> RouteCombination {
    let property_lower = property.display_label.to_lowercase();
    let transaction_lower = transaction.display_label.to_lowercase();

    RouteCombination {
        route_slug: route_slug(city, property, transaction),
        title: format!(
            "{} en {} en {} | {SITE_NAME}",
            property.display_label, transaction.display_label, city.display_name
        ),
        description: format!(
            "Encuentra las mejores opciones de {property_lower} en {transaction_lower} en {}, {}. \
             {SITE_NAME} es tu plataforma inmobiliaria de confianza en Venezuela. \
             ¡Descubre tu próximo hogar hoy!",
            city.display_name, city.region
        ),
        keywords: keywords(city.display_name, &property_lower, &transaction_lower),
        city: city.display_name.to_string(),
        region: city.region.to_string(),
        city_slug: city.url_slug.to_string(),
        property_type: property.code,
        transaction_type: transaction.code,
    }
}

/// Enumerate every triple, city-major, then property, then transaction.
///
/// Tables are validated first; any malformed or duplicated slug aborts the
/// whole generation. The output is a pure function of the inputs, so two
/// calls with the same tables are equal element for element.
pub fn generate_combinations(
    cities: &[CityEntry],
    properties: &[PropertyCategory],
    transactions: &[TransactionCategory],
) -> Result<Vec<RouteCombination>, CatalogError> {
    validate_tables(cities, properties, transactions)?;

    let mut out = Vec::with_capacity(cities.len() * properties.len() * transactions.len());
    let mut seen = HashSet::with_capacity(out.capacity());

    for city in cities {
        for property in properties {
            for transaction in transactions {
                let combo = build_one(city, property, transaction);
                if !seen.insert(combo.route_slug.clone()) {
                    return Err(CatalogError::RouteCollision {
                        slug: combo.route_slug,
                    });
                }
                out.push(combo);
            }
        }
    }

    Ok(out)
}
