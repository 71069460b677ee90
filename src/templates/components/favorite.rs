use maud::{html, Markup};

use crate::domain::favorite::{FavoriteState, FavoriteToggle};

/// Heart button. Posts to the toggle endpoint, which answers with this same
/// fragment re-rendered from the settled state.
pub fn favorite_button(toggle: &FavoriteToggle) -> Markup {
    let shown = toggle.shown();
    let label = if shown {
        "Quitar de favoritos"
    } else {
        "Agregar a favoritos"
    };
    let action = format!("/favoritos/{}/toggle", toggle.listing_id);

    html! {
        form.favorite-toggle.active[shown]
            id={ "fav-" (toggle.listing_id) }
            method="post"
            action=(action)
            hx-post=(action)
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="button"
        {
            button type="submit" aria-label=(label) title=(label) aria-pressed=(if shown { "true" } else { "false" })
                aria-busy=(if toggle.is_pending() { "true" } else { "false" }) {
                @if shown { "♥" } @else { "♡" }
            }
            @match toggle.state() {
                FavoriteState::Failed { reason, .. } => {
                    span class="favorite-error" role="alert" { (reason) }
                }
                _ => {}
            }
        }
    }
}
