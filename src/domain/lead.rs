// src/domain/lead.rs

use crate::auth::magic::MagicLinkService;
use crate::domain::logic::digits_only;
use crate::forms::FormData;

/// Options offered in the contact form's "interés" select.
pub const INTEREST_OPTIONS: &[&str] = &[
    "Comprar una propiedad",
    "Alquilar una propiedad",
    "Vender mi propiedad",
    "Publicar en alquiler",
    "Otro",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub property_interest: String,
    pub listing_id: Option<i64>,
}

impl NewLead {
    pub fn from_form(form: &FormData) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();

        let name = form.get("name").unwrap_or_default().to_string();
        if name.chars().count() < 2 {
            errors.push("El nombre debe tener al menos 2 caracteres".to_string());
        }

        let email = match MagicLinkService::normalize_email(form.get("email").unwrap_or_default()) {
            Ok(e) => e,
            Err(_) => {
                errors.push("Ingresa un email válido".to_string());
                String::new()
            }
        };

        let phone = form.get("phone").unwrap_or_default().to_string();
        if digits_only(&phone).len() < 10 {
            errors.push("El teléfono debe tener al menos 10 dígitos".to_string());
        }

        let message = form.get("message").unwrap_or_default().to_string();
        if message.chars().count() < 10 {
            errors.push("El mensaje debe tener al menos 10 caracteres".to_string());
        }

        let property_interest = form.get("property_interest").unwrap_or_default().to_string();
        if property_interest.is_empty() {
            errors.push("Selecciona tu interés".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name,
            email,
            phone,
            message,
            property_interest,
            listing_id: form.get_i64("listing_id"),
        })
    }
}
