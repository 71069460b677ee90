// templates/pages/favorites.rs

use maud::{html, Markup};
use std::collections::HashSet;

use crate::domain::category::PropertyType;
use crate::domain::listing::ListingRecord;
use crate::domain::search::SortOrder;
use crate::seo::PageMeta;
use crate::templates::components::{property_grid, sort_select};
use crate::templates::{desktop_layout, PageContext};

pub fn favorites_page(
    ctx: &PageContext<'_>,
    listings: &[ListingRecord],
    type_filter: Option<PropertyType>,
    sort: SortOrder,
) -> Markup {
    let meta = PageMeta::page("Mis favoritos", "/favoritos");
    // Every listing here is a favorite by definition.
    let ids: HashSet<i64> = listings.iter().map(|l| l.id).collect();

    desktop_layout(
        &meta,
        ctx,
        html! {
            main class="container favorites-page" {
                h1 { "Mis favoritos" }
                p class="results-summary" { (listings.len()) " propiedades guardadas" }

                form class="inline-filters" method="get" action="/favoritos" {
                    select name="property_type" {
                        option value="" { "Todos los tipos" }
                        @for t in PropertyType::ALL {
                            option value=(t.code()) selected[type_filter == Some(t)] { (t.label()) }
                        }
                    }
                    (sort_select(sort))
                    button type="submit" { "Filtrar" }
                }

                (property_grid(
                    listings,
                    Some(&ids),
                    "Todavía no guardaste propiedades. Toca el corazón en cualquier propiedad para guardarla aquí.",
                ))
            }
        },
    )
}
