use maud::{html, Markup};

use crate::domain::lead::INTEREST_OPTIONS;
use crate::forms::FormData;

/// Lead form. `values` refills the fields after a failed submit.
pub fn contact_form(listing_id: Option<i64>, values: &FormData, errors: &[String]) -> Markup {
    let interest = values.get("property_interest");
    html! {
        form class="contact-form" method="post" action="/contacto" {
            @if !errors.is_empty() {
                ul class="form-errors" role="alert" {
                    @for e in errors { li { (e) } }
                }
            }
            @if let Some(id) = listing_id {
                input type="hidden" name="listing_id" value=(id);
            }

            label for="lead-name" { "Nombre" }
            input type="text" id="lead-name" name="name" required minlength="2"
                value=(values.get("name").unwrap_or_default());

            label for="lead-email" { "Email" }
            input type="email" id="lead-email" name="email" required
                value=(values.get("email").unwrap_or_default());

            label for="lead-phone" { "Teléfono" }
            input type="tel" id="lead-phone" name="phone" required
                value=(values.get("phone").unwrap_or_default());

            label for="lead-interest" { "¿Qué te interesa?" }
            select id="lead-interest" name="property_interest" required {
                option value="" { "Selecciona una opción" }
                @for opt in INTEREST_OPTIONS {
                    option value=(opt) selected[interest == Some(*opt)] { (opt) }
                }
            }

            label for="lead-message" { "Mensaje" }
            textarea id="lead-message" name="message" rows="4" required minlength="10" {
                (values.get("message").unwrap_or_default())
            }

            button type="submit" class="primary" { "Enviar mensaje" }
        }
    }
}
