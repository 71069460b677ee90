use maud::{html, Markup};

use crate::geos::VENEZUELAN_CITIES;

/// Magic-link request form. With `register` it also asks for the profile
/// fields stored at sign-up.
pub fn email_cta_form(register: bool) -> Markup {
    html! {
        div class="email-cta-wrapper" {
            form
                method="post"
                action="/auth/request-link"
                hx-post="/auth/request-link"
                hx-target="#auth-result"
                hx-swap="innerHTML"
                hx-disabled-elt="button"
                class="email-cta"
            {
                @if register {
                    label for="full_name" { "Nombre completo" }
                    input type="text" id="full_name" name="full_name" autocomplete="name" required;

                    label for="phone" { "Teléfono" }
                    input type="tel" id="phone" name="phone" autocomplete="tel" placeholder="0414-123-4567";

                    label for="city" { "Ciudad" }
                    select id="city" name="city" {
                        option value="" { "Selecciona tu ciudad" }
                        @for c in VENEZUELAN_CITIES {
                            option value=(c.url_slug) { (c.display_name) ", " (c.region) }
                        }
                    }
                }

                label for="email" { "Correo electrónico" }
                input
                    type="email"
                    id="email"
                    name="email"
                    placeholder="tu@correo.com"
                    autocomplete="email"
                    required;

                button type="submit" class="primary" {
                    span class="btn-text" {
                        @if register { "Crear cuenta" } @else { "Recibir enlace" }
                    }
                    span class="spinner" aria-hidden="true" {}
                }

                p class="microcopy" {
                    "Te enviaremos un enlace seguro para ingresar. Sin contraseñas."
                }
            }

            div id="auth-result" {}
        }
    }
}
