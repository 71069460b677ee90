use crate::seo::PageMeta;
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

/// Success message swapped in place of the login form by htmx.
pub fn check_email_content(email: &str) -> Markup {
    html! {
        div class="text-center py-8 px-4 fade-in" {
            h3 class="text-lg leading-6 font-medium text-gray-900" { "Revisa tu correo" }

            div class="mt-2" {
                p class="text-sm text-gray-500" {
                    "Enviamos un enlace para ingresar a "
                    strong class="text-gray-900" { (email) }
                    "."
                }
                p class="text-sm text-gray-500 mt-2" {
                    "Haz clic en el enlace del correo para ingresar. Vence en 15 minutos."
                }
            }

            div class="mt-6" {
                a href="/login" class="text-sm font-medium text-blue-600 hover:text-blue-500" {
                    "Usar otro correo"
                }
            }
        }
    }
}

/// Full page for plain form posts (no htmx).
pub fn check_email_page(ctx: &PageContext<'_>, email: &str) -> Markup {
    desktop_layout(
        &PageMeta::page("Revisa tu correo", "/login"),
        ctx,
        html! {
            main class="container narrow" {
                (check_email_content(email))
            }
        },
    )
}

/// Inline error shown under the login form when the request is rejected.
pub fn auth_error_content(message: &str) -> Markup {
    html! {
        p class="form-errors" role="alert" { (message) }
    }
}
