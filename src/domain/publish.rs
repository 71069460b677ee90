// src/domain/publish.rs

use crate::domain::category::{PropertyType, TransactionType};
use crate::domain::listing::{Currency, COMMON_FEATURES};
use crate::forms::FormData;
use crate::geos::find_city_by_slug;

/// A validated listing ready to be inserted. City and state come from the
/// city table, never from free text.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub currency: Currency,
    pub property_type: PropertyType,
    pub transaction_type: TransactionType,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub area_m2: Option<i64>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
}

impl NewListing {
    /// Validate the publish form. Errors are user-facing Spanish messages,
    /// one per failed field.
    pub fn from_form(form: &FormData) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();

        let title = required(form, "title", "El título es requerido", &mut errors);
        let description = required(form, "description", "La descripción es requerida", &mut errors);
        let address = required(form, "address", "La dirección es requerida", &mut errors);

        let price = match (form.get("price"), form.get_i64("price")) {
            (_, Some(p)) if p > 0 => p,
            (Some(_), None) => {
                errors.push("El precio debe ser un número entero".to_string());
                0
            }
            _ => {
                errors.push("El precio debe ser mayor a 0".to_string());
                0
            }
        };

        let currency = form
            .get("currency")
            .map_or(Some(Currency::Usd), Currency::parse)
            .unwrap_or_else(|| {
                errors.push("Moneda inválida".to_string());
                Currency::Usd
            });

        let property_type = form.get("property_type").and_then(PropertyType::parse);
        if property_type.is_none() {
            errors.push("Selecciona el tipo de propiedad".to_string());
        }
        let transaction_type = form.get("transaction_type").and_then(TransactionType::parse);
        if transaction_type.is_none() {
            errors.push("Selecciona el tipo de operación".to_string());
        }

        let city = match form.get("city") {
            None => {
                errors.push("La ciudad es requerida".to_string());
                None
            }
            Some(slug) => {
                let found = find_city_by_slug(slug);
                if found.is_none() {
                    errors.push("Ciudad desconocida".to_string());
                }
                found
            }
        };

        let bedrooms = non_negative(form, "bedrooms", "habitaciones", &mut errors);
        let bathrooms = non_negative(form, "bathrooms", "baños", &mut errors);
        let area_m2 = non_negative(form, "area_m2", "área", &mut errors);

        let features: Vec<String> = form.get_all("features").into_iter().map(str::to_string).collect();
        if let Some(bad) = features.iter().find(|f| !COMMON_FEATURES.contains(&f.as_str())) {
            errors.push(format!("Característica desconocida: {bad}"));
        }

        let images = form
            .get("images")
            .map(|raw| {
                raw.lines()
                    .map(str::trim)
                    .filter(|l| l.starts_with("http://") || l.starts_with("https://"))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        match (city, property_type, transaction_type) {
            (Some(city), Some(property_type), Some(transaction_type)) if errors.is_empty() => {
                Ok(Self {
                    title,
                    description,
                    price,
                    currency,
                    property_type,
                    transaction_type,
                    bedrooms,
                    bathrooms,
                    area_m2,
                    city: city.display_name.to_string(),
                    state: city.region.to_string(),
                    address,
                    images,
                    features,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required(form: &FormData, key: &str, message: &str, errors: &mut Vec<String>) -> String {
    match form.get(key) {
        Some(v) => v.to_string(),
        None => {
            errors.push(message.to_string());
            String::new()
        }
    }
}

fn non_negative(form: &FormData, key: &str, label: &str, errors: &mut Vec<String>) -> Option<i64> {
    form.get(key)?;
    match form.get_i64(key) {
        Some(n) if n >= 0 => Some(n),
        _ => {
            errors.push(format!("El campo {label} debe ser un número mayor o igual a 0"));
            None
        }
    }
}
