// templates/pages/contact.rs

use maud::{html, Markup};

use crate::forms::FormData;
use crate::seo::PageMeta;
use crate::templates::components::contact_form;
use crate::templates::{desktop_layout, PageContext};

pub fn contact_page(ctx: &PageContext<'_>, values: &FormData, errors: &[String], sent: bool) -> Markup {
    let meta = PageMeta::page("Contacto", "/contacto").with_description(
        "Escríbenos si quieres comprar, vender o alquilar una propiedad en Venezuela.",
    );

    desktop_layout(
        &meta,
        ctx,
        html! {
            main class="container narrow contact-page" {
                h1 { "Contáctanos" }
                @if sent {
                    div class="notice success" role="status" {
                        h2 { "¡Mensaje enviado!" }
                        p { "Gracias por escribirnos. Te contactaremos muy pronto." }
                        a href="/buscar" { "Seguir buscando propiedades" }
                    }
                } @else {
                    p class="lead" { "Cuéntanos qué buscas y un asesor te responderá a la brevedad." }
                    (contact_form(values.get_i64("listing_id"), values, errors))
                }
            }
        },
    )
}
