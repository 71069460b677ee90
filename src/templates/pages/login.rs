use crate::seo::PageMeta;
use crate::templates::{components::email_cta_form, desktop_layout, PageContext};
use maud::{html, Markup};

pub fn login_page(ctx: &PageContext<'_>) -> Markup {
    let meta = PageMeta::page("Ingresar", "/login")
        .with_description("Ingresa a tu cuenta de Turanchito para publicar y guardar propiedades.");
    desktop_layout(
        &meta,
        ctx,
        html! {
            main class="container narrow" {
                h1 { "Ingresar" }
                p class="lead" {
                    "Escribe tu correo y te enviaremos un enlace seguro para ingresar."
                }

                (email_cta_form(false))

                p { "¿No tienes cuenta? " a href="/registro" { "Regístrate" } }
            }
        },
    )
}

pub fn register_page(ctx: &PageContext<'_>) -> Markup {
    let meta = PageMeta::page("Crear cuenta", "/registro")
        .with_description("Crea tu cuenta gratis en Turanchito y publica tus propiedades.");
    desktop_layout(
        &meta,
        ctx,
        html! {
            main class="container narrow" {
                h1 { "Crear cuenta" }
                p class="lead" {
                    "Publica tus propiedades y guarda tus favoritas. Solo necesitas tu correo."
                }

                (email_cta_form(true))

                p { "¿Ya tienes cuenta? " a href="/login" { "Ingresa" } }
            }
        },
    )
}
