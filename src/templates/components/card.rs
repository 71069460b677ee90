use maud::{html, Markup};
use std::collections::HashSet;

use crate::domain::favorite::FavoriteToggle;
use crate::domain::listing::ListingRecord;
use crate::domain::logic::{format_area, format_price};
use crate::templates::components::favorite_button;

/// Listing summary used on every results grid. `favorited` is `None` for
/// anonymous visitors, which hides the heart.
pub fn property_card(listing: &ListingRecord, favorited: Option<bool>) -> Markup {
    html! {
        article class="property-card" {
            a href=(listing.detail_path()) class="card-image" {
                @match listing.cover_image() {
                    Some(src) => {
                        img src=(src) alt=(listing.title) loading="lazy";
                    }
                    None => {
                        div class="image-placeholder" { "Sin imagen" }
                    }
                }
                span class={ "badge " (listing.transaction_type.code()) } {
                    (listing.transaction_type.label())
                }
                @if listing.featured {
                    span class="badge featured" { "Destacada" }
                }
            }
            @if let Some(fav) = favorited {
                (favorite_button(&FavoriteToggle::confirmed(listing.id, fav)))
            }
            div class="card-body" {
                p class="price" { (format_price(listing.price, listing.currency)) }
                h3 { a href=(listing.detail_path()) { (listing.title) } }
                p class="location" { (listing.city) ", " (listing.state) }
                ul class="facts" {
                    li { (listing.property_type.label()) }
                    @if let Some(b) = listing.bedrooms {
                        li { (b) " hab." }
                    }
                    @if let Some(b) = listing.bathrooms {
                        li { (b) " baños" }
                    }
                    @if let Some(a) = listing.area_m2 {
                        li { (format_area(a)) }
                    }
                }
            }
        }
    }
}

/// Grid of cards, or an empty-state message. `favorites` is the viewer's
/// favorite set, `None` when nobody is signed in.
pub fn property_grid(
    listings: &[ListingRecord],
    favorites: Option<&HashSet<i64>>,
    empty_message: &str,
) -> Markup {
    html! {
        @if listings.is_empty() {
            p class="empty-state" { (empty_message) }
        } @else {
            div class="property-grid" {
                @for l in listings {
                    (property_card(l, favorites.map(|f| f.contains(&l.id))))
                }
            }
        }
    }
}
