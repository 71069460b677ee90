// templates/pages/property.rs

use maud::{html, Markup};

use crate::domain::favorite::FavoriteToggle;
use crate::domain::listing::ListingRecord;
use crate::domain::logic::{format_area, format_price};
use crate::forms::FormData;
use crate::seo::{PageMeta, RouteCombination};
use crate::templates::components::{contact_form, favorite_button};
use crate::templates::{desktop_layout, PageContext};

pub struct PropertyVm<'a> {
    pub listing: &'a ListingRecord,
    /// Landing page for the listing's city and category, when the city is known.
    pub combo: Option<&'a RouteCombination>,
    pub favorited: Option<bool>,
}

pub fn property_page(ctx: &PageContext<'_>, vm: &PropertyVm<'_>) -> Markup {
    let l = vm.listing;
    let meta = PageMeta::for_listing(l, ctx.base_url);

    desktop_layout(
        &meta,
        ctx,
        html! {
            main class="container property-detail" {
                nav class="breadcrumbs" {
                    a href="/" { "Inicio" } " › "
                    @if let Some(c) = vm.combo {
                        a href={ "/" (c.city_slug) } { (c.city) } " › "
                        a href={ "/" (c.route_slug) } {
                            (c.property_type.label()) " en " (c.transaction_type.label().to_lowercase())
                        }
                        " › "
                    }
                    span { (l.title) }
                }

                div class="gallery" {
                    @if l.images.is_empty() {
                        div class="image-placeholder" { "Sin imágenes" }
                    }
                    @for (i, src) in l.images.iter().enumerate() {
                        img src=(src) alt={ (l.title) " - foto " (i + 1) } loading=(if i == 0 { "eager" } else { "lazy" });
                    }
                }

                header class="detail-header" {
                    div {
                        span class={ "badge " (l.transaction_type.code()) } { (l.transaction_type.label()) }
                        h1 { (l.title) }
                        p class="location" { (l.address) ", " (l.city) ", " (l.state) }
                    }
                    div class="detail-price" {
                        p class="price" { (format_price(l.price, l.currency)) }
                        @if let Some(fav) = vm.favorited {
                            (favorite_button(&FavoriteToggle::confirmed(l.id, fav)))
                        }
                    }
                }

                section class="facts" {
                    dl {
                        dt { "Tipo" } dd { (l.property_type.label()) }
                        @if let Some(b) = l.bedrooms { dt { "Habitaciones" } dd { (b) } }
                        @if let Some(b) = l.bathrooms { dt { "Baños" } dd { (b) } }
                        @if let Some(a) = l.area_m2 { dt { "Área" } dd { (format_area(a)) } }
                        dt { "Publicada" } dd { (l.created_at.format("%d/%m/%Y").to_string()) }
                    }
                }

                section class="description" {
                    h2 { "Descripción" }
                    @for para in l.description.split("\n\n") {
                        p { (para) }
                    }
                }

                @if !l.features.is_empty() {
                    section class="features" {
                        h2 { "Características" }
                        ul {
                            @for f in &l.features { li { (f) } }
                        }
                    }
                }

                aside class="contact" {
                    h2 { "¿Te interesa esta propiedad?" }
                    (contact_form(Some(l.id), &FormData::default(), &[]))
                }
            }
        },
    )
}
