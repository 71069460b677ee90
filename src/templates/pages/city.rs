// templates/pages/city.rs

use maud::{html, Markup};
use url::form_urlencoded;
use std::collections::HashSet;

use crate::domain::category::TransactionType;
use crate::domain::listing::ListingRecord;
use crate::geos::CityEntry;
use crate::seo::{PageMeta, RouteCombination};
use crate::templates::components::property_grid;
use crate::templates::{desktop_layout, PageContext};

pub fn city_page(
    ctx: &PageContext<'_>,
    city: &CityEntry,
    combos: &[&RouteCombination],
    listings: &[ListingRecord],
    favorites: Option<&HashSet<i64>>,
) -> Markup {
    let meta = PageMeta::for_city(city);
    let search_all = format!(
        "/buscar?{}",
        form_urlencoded::Serializer::new(String::new())
            .append_pair("city", city.display_name)
            .append_pair("state", city.region)
            .finish()
    );

    desktop_layout(
        &meta,
        ctx,
        html! {
            main class="container city-page" {
                nav class="breadcrumbs" {
                    a href="/" { "Inicio" } " › " span { (city.display_name) }
                }
                h1 { "Propiedades en " (city.display_name) ", " (city.region) }
                p class="lead" { (meta.description) }

                @for tx in TransactionType::ALL {
                    section class="category-links" {
                        h2 { (tx.verb()) " en " (city.display_name) }
                        ul {
                            @for c in combos.iter().filter(|c| c.transaction_type == tx) {
                                li { a href={ "/" (c.route_slug) } { (c.property_type.label()) " en " (tx.label().to_lowercase()) } }
                            }
                        }
                    }
                }

                section {
                    h2 { "Publicadas recientemente en " (city.display_name) }
                    (property_grid(listings, favorites, "Todavía no hay propiedades publicadas en esta ciudad."))
                    p {
                        a class="btn" href=(search_all) {
                            "Ver todas en " (city.display_name)
                        }
                    }
                }
            }
        },
    )
}
