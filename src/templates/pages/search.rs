// templates/pages/search.rs

use maud::{html, Markup};
use std::collections::HashSet;

use crate::domain::category::TransactionType;
use crate::domain::search::{ListingFilter, ListingPage, Page, SortOrder};
use crate::seo::PageMeta;
use crate::templates::components::{pagination, property_grid, search_filters};
use crate::templates::{desktop_layout, PageContext};

pub struct SearchVm<'a> {
    pub heading: &'a str,
    /// Path the filter form and pagination links point at.
    pub path: &'a str,
    pub filter: &'a ListingFilter,
    pub sort: SortOrder,
    pub page: Page,
    pub results: &'a ListingPage,
    pub favorites: Option<&'a HashSet<i64>>,
    pub fixed_transaction: Option<TransactionType>,
}

/// "Mostrando 21 - 40 de 57 propiedades"
pub fn results_summary(page: Page, results: &ListingPage) -> Markup {
    let (first, last) = page.shown_range(results.listings.len(), results.total);
    html! {
        p class="results-summary" {
            @if results.total == 0 {
                "No se encontraron propiedades"
            } @else {
                "Mostrando " (first) " - " (last) " de " (results.total) " propiedades"
            }
        }
    }
}

pub fn search_page(ctx: &PageContext<'_>, meta: &PageMeta, vm: &SearchVm<'_>) -> Markup {
    desktop_layout(
        meta,
        ctx,
        html! {
            main class="container search-page" {
                h1 { (vm.heading) }
                (search_filters(vm.path, vm.filter, vm.sort, vm.fixed_transaction))
                @if vm.fixed_transaction.is_none() && !vm.filter.is_empty() {
                    p class="clear-filters" { a href=(vm.path) { "Limpiar filtros" } }
                }
                (results_summary(vm.page, vm.results))
                (property_grid(
                    &vm.results.listings,
                    vm.favorites,
                    "Prueba con otros filtros o amplía tu búsqueda.",
                ))
                (pagination(vm.path, &vm.filter.query_pairs(), vm.sort, vm.page, vm.results.total))
            }
        },
    )
}
