// templates/pages/home.rs

use maud::{html, Markup};
use std::collections::HashSet;

use crate::domain::category::TransactionType;
use crate::domain::listing::ListingRecord;
use crate::domain::search::{ListingFilter, SortOrder};
use crate::seo::{PageMeta, RouteTable, SITE_NAME};
use crate::templates::components::{property_grid, search_filters};
use crate::templates::{desktop_layout, PageContext};

/// Slugs of the cities whose combination pages are linked from the home page.
const SHOWCASE_CITIES: &[&str] = &["caracas", "maracaibo", "valencia", "maracay"];

pub struct HomeVm<'a> {
    pub featured: &'a [ListingRecord],
    pub recent: &'a [ListingRecord],
    pub favorites: Option<&'a HashSet<i64>>,
    pub routes: &'a RouteTable,
}

pub fn home_page(ctx: &PageContext<'_>, vm: &HomeVm<'_>) -> Markup {
    let meta = PageMeta::new(
        format!("{SITE_NAME} | Casas y apartamentos en venta y alquiler en Venezuela"),
        "/",
    );

    desktop_layout(
        &meta,
        ctx,
        html! {
            section class="hero" {
                h1 { "Encuentra tu próximo hogar en Venezuela" }
                p class="lead" {
                    "Casas, apartamentos, locales comerciales y terrenos en venta y alquiler en todo el país."
                }
                (search_filters("/buscar", &ListingFilter::default(), SortOrder::Newest, None))
            }

            @if !vm.featured.is_empty() {
                section class="featured" {
                    h2 { "Propiedades destacadas" }
                    (property_grid(vm.featured, vm.favorites, ""))
                }
            }

            section class="recent" {
                h2 { "Publicadas recientemente" }
                (property_grid(vm.recent, vm.favorites, "Aún no hay propiedades publicadas."))
                p { a href="/buscar" class="btn" { "Ver todas las propiedades" } }
            }

            section class="popular-searches" {
                h2 { "Búsquedas populares" }
                div class="link-columns" {
                    @for city in SHOWCASE_CITIES.iter().filter_map(|s| vm.routes.cities().iter().find(|c| c.url_slug == *s)) {
                        div {
                            h3 { a href={ "/" (city.url_slug) } { (city.display_name) } }
                            ul {
                                @for combo in vm.routes.combinations().iter().filter(|c| c.city_slug == city.url_slug && c.transaction_type == TransactionType::Sale) {
                                    li { a href={ "/" (combo.route_slug) } { (combo.property_type.label()) " en venta" } }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
