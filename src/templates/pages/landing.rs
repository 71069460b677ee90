// templates/pages/landing.rs
//! Combination landing page: one (city, property type, transaction) triple.

use maud::{html, Markup};
use std::collections::HashSet;

use crate::domain::search::{ListingPage, Page, SortOrder};
use crate::seo::{PageMeta, RouteCombination};
use crate::templates::components::{pagination, property_grid, sort_select};
use crate::templates::pages::search::results_summary;
use crate::templates::{desktop_layout, PageContext};

pub struct LandingVm<'a> {
    pub combo: &'a RouteCombination,
    /// Other combinations for the same city.
    pub related: &'a [&'a RouteCombination],
    pub results: &'a ListingPage,
    pub sort: SortOrder,
    pub page: Page,
    pub favorites: Option<&'a HashSet<i64>>,
}

pub fn landing_page(ctx: &PageContext<'_>, vm: &LandingVm<'_>) -> Markup {
    let combo = vm.combo;
    let meta = PageMeta::for_combination(combo);
    let path = format!("/{}", combo.route_slug);
    let type_label = combo.property_type.label();
    let tx_label = combo.transaction_type.label().to_lowercase();

    desktop_layout(
        &meta,
        ctx,
        html! {
            main class="container landing-page" {
                nav class="breadcrumbs" {
                    a href="/" { "Inicio" } " › "
                    a href={ "/" (combo.city_slug) } { (combo.city) } " › "
                    span { (type_label) " en " (tx_label) }
                }

                h1 { (type_label) " en " (tx_label) " en " (combo.city) }
                p class="lead" { (combo.description) }

                form class="sort-form" method="get" action=(path) {
                    label { "Ordenar: " (sort_select(vm.sort)) }
                    button type="submit" { "Aplicar" }
                }

                (results_summary(vm.page, vm.results))
                (property_grid(
                    &vm.results.listings,
                    vm.favorites,
                    "No hay propiedades disponibles con estos criterios por ahora.",
                ))
                (pagination(&path, &[], vm.sort, vm.page, vm.results.total))

                section class="seo-copy" {
                    h2 { (combo.transaction_type.verb()) " " (type_label.to_lowercase()) " en " (combo.city) ", " (combo.region) }
                    p {
                        "Explora la oferta de " (type_label.to_lowercase()) " en " (tx_label)
                        " en " (combo.city) ". Compara precios, ubicación y características, "
                        "y contacta directamente a los propietarios."
                    }
                }

                @if !vm.related.is_empty() {
                    section class="related-links" {
                        h2 { "Otras búsquedas en " (combo.city) }
                        ul {
                            @for r in vm.related {
                                li {
                                    a href={ "/" (r.route_slug) } {
                                        (r.property_type.label()) " en " (r.transaction_type.label().to_lowercase())
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
