// templates/pages/my_properties.rs

use maud::{html, Markup};

use crate::domain::listing::{ListingRecord, ListingStatus};
use crate::domain::logic::format_price;
use crate::seo::PageMeta;
use crate::templates::{desktop_layout, PageContext};

pub fn my_properties_page(
    ctx: &PageContext<'_>,
    listings: &[ListingRecord],
    status_filter: Option<ListingStatus>,
) -> Markup {
    let meta = PageMeta::page("Mis propiedades", "/mis-propiedades");
    let tabs = [
        (None, "Todas"),
        (Some(ListingStatus::Active), "Activas"),
        (Some(ListingStatus::Inactive), "Inactivas"),
    ];

    desktop_layout(
        &meta,
        ctx,
        html! {
            main class="container my-properties" {
                div class="page-head" {
                    h1 { "Mis propiedades" }
                    a href="/publicar" class="btn primary" { "Publicar nueva" }
                }

                nav class="tabs" {
                    @for (status, label) in tabs {
                        @let href = match status {
                            Some(s) => format!("/mis-propiedades?status={}", s.code()),
                            None => "/mis-propiedades".to_string(),
                        };
                        a.active[status == status_filter] href=(href) { (label) }
                    }
                }

                @if listings.is_empty() {
                    p class="empty-state" { "No tienes propiedades en esta vista." }
                } @else {
                    table class="owner-listings" {
                        thead {
                            tr { th { "Propiedad" } th { "Precio" } th { "Estado" } th { "Acciones" } }
                        }
                        tbody {
                            @for l in listings {
                                tr {
                                    td {
                                        @if l.status == ListingStatus::Active {
                                            a href=(l.detail_path()) { (l.title) }
                                        } @else {
                                            (l.title)
                                        }
                                        br;
                                        small { (l.city) ", " (l.state) }
                                    }
                                    td { (format_price(l.price, l.currency)) }
                                    td { span class={ "status " (l.status.code()) } { (l.status.label()) } }
                                    td class="actions" {
                                        form method="post" action={ "/mis-propiedades/" (l.id) "/toggle" } class="inline" {
                                            button type="submit" {
                                                @if l.status == ListingStatus::Active { "Desactivar" } @else { "Activar" }
                                            }
                                        }
                                        form method="post" action={ "/mis-propiedades/" (l.id) "/delete" } class="inline"
                                            onsubmit="return confirm('¿Eliminar esta propiedad? Esta acción no se puede deshacer.')" {
                                            button type="submit" class="danger" { "Eliminar" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
