use maud::{html, Markup};

use crate::domain::category::{PropertyType, TransactionType};
use crate::domain::listing::Currency;
use crate::domain::search::{ListingFilter, SortOrder};
use crate::geos::regions;

/// Filter form. `fixed_transaction` hides the operation select on the
/// buy/rent pages, where it is implied by the path.
pub fn search_filters(
    action: &str,
    filter: &ListingFilter,
    sort: SortOrder,
    fixed_transaction: Option<TransactionType>,
) -> Markup {
    html! {
        form class="search-filters" method="get" action=(action) {
            input type="search" name="search" placeholder="Buscar por título, descripción o dirección"
                value=(filter.search.as_deref().unwrap_or_default());
            input type="text" name="city" placeholder="Ciudad"
                value=(filter.city.as_deref().unwrap_or_default());
            select name="state" {
                option value="" { "Estado" }
                @for region in regions() {
                    option value=(region) selected[filter.state.as_deref() == Some(region)] { (region) }
                }
            }

            select name="property_type" {
                option value="" { "Tipo de propiedad" }
                @for t in PropertyType::ALL {
                    option value=(t.code()) selected[filter.property_type == Some(t)] { (t.label()) }
                }
            }

            @match fixed_transaction {
                Some(t) => {
                    input type="hidden" name="transaction_type" value=(t.code());
                }
                None => {
                    select name="transaction_type" {
                        option value="" { "Operación" }
                        @for t in TransactionType::ALL {
                            option value=(t.code()) selected[filter.transaction_type == Some(t)] { (t.label()) }
                        }
                    }
                }
            }

            input type="number" name="price_min" min="0" placeholder="Precio mínimo"
                value=[filter.price_min];
            input type="number" name="price_max" min="0" placeholder="Precio máximo"
                value=[filter.price_max];

            select name="bedrooms" {
                option value="" { "Habitaciones" }
                @for n in 1..=5_i64 {
                    option value=(n) selected[filter.bedrooms == Some(n)] { (n) "+" }
                }
            }

            select name="currency" {
                option value="" { "Moneda" }
                @for c in [Currency::Usd, Currency::Ves] {
                    option value=(c.code()) selected[filter.currency == Some(c)] { (c.symbol()) }
                }
            }

            (sort_select(sort))

            button type="submit" class="primary" { "Buscar" }
        }
    }
}

pub fn sort_select(sort: SortOrder) -> Markup {
    html! {
        select name="sort" aria-label="Ordenar" {
            @for s in SortOrder::ALL {
                option value=(s.code()) selected[s == sort] { (s.label()) }
            }
        }
    }
}
