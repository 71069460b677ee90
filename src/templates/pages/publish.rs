// templates/pages/publish.rs

use maud::{html, Markup};

use crate::domain::category::{PropertyType, TransactionType};
use crate::domain::listing::{Currency, COMMON_FEATURES};
use crate::forms::FormData;
use crate::geos::VENEZUELAN_CITIES;
use crate::seo::PageMeta;
use crate::templates::{desktop_layout, PageContext};

/// Publish form. After a rejected submit `values` holds what was typed and
/// `errors` what was wrong with it.
pub fn publish_page(ctx: &PageContext<'_>, values: &FormData, errors: &[String]) -> Markup {
    let meta = PageMeta::page("Publicar propiedad", "/publicar");
    let v = |k: &str| values.get(k).unwrap_or_default().to_string();
    let checked_features = values.get_all("features");

    desktop_layout(
        &meta,
        ctx,
        html! {
            main class="container publish-page" {
                h1 { "Publicar propiedad" }

                @if !errors.is_empty() {
                    ul class="form-errors" role="alert" {
                        @for e in errors { li { (e) } }
                    }
                }

                form method="post" action="/publicar" class="publish-form" {
                    fieldset {
                        legend { "Información básica" }
                        label for="title" { "Título" }
                        input type="text" id="title" name="title" required value=(v("title"));

                        label for="description" { "Descripción" }
                        textarea id="description" name="description" rows="6" required { (v("description")) }

                        label for="property_type" { "Tipo de propiedad" }
                        select id="property_type" name="property_type" required {
                            option value="" { "Selecciona" }
                            @for t in PropertyType::ALL {
                                option value=(t.code()) selected[values.get("property_type") == Some(t.code())] { (t.label()) }
                            }
                        }

                        label for="transaction_type" { "Operación" }
                        select id="transaction_type" name="transaction_type" required {
                            @for t in TransactionType::ALL {
                                option value=(t.code()) selected[values.get("transaction_type") == Some(t.code())] { (t.label()) }
                            }
                        }
                    }

                    fieldset {
                        legend { "Precio" }
                        label for="price" { "Precio" }
                        input type="number" id="price" name="price" min="1" required value=(v("price"));

                        label for="currency" { "Moneda" }
                        select id="currency" name="currency" {
                            @for c in [Currency::Usd, Currency::Ves] {
                                option value=(c.code()) selected[values.get("currency") == Some(c.code())] { (c.symbol()) " (" (c.code()) ")" }
                            }
                        }
                    }

                    fieldset {
                        legend { "Detalles" }
                        label for="bedrooms" { "Habitaciones" }
                        input type="number" id="bedrooms" name="bedrooms" min="0" value=(v("bedrooms"));
                        label for="bathrooms" { "Baños" }
                        input type="number" id="bathrooms" name="bathrooms" min="0" value=(v("bathrooms"));
                        label for="area_m2" { "Área (m²)" }
                        input type="number" id="area_m2" name="area_m2" min="0" value=(v("area_m2"));
                    }

                    fieldset {
                        legend { "Ubicación" }
                        label for="city" { "Ciudad" }
                        select id="city" name="city" required {
                            option value="" { "Selecciona la ciudad" }
                            @for c in VENEZUELAN_CITIES {
                                option value=(c.url_slug) selected[values.get("city") == Some(c.url_slug)] {
                                    (c.display_name) ", " (c.region)
                                }
                            }
                        }
                        label for="address" { "Dirección" }
                        input type="text" id="address" name="address" required value=(v("address"));
                    }

                    fieldset {
                        legend { "Características" }
                        div class="feature-grid" {
                            @for f in COMMON_FEATURES {
                                label class="checkbox" {
                                    input type="checkbox" name="features" value=(f) checked[checked_features.contains(f)];
                                    " " (f)
                                }
                            }
                        }
                    }

                    fieldset {
                        legend { "Imágenes" }
                        label for="images" { "URLs de imágenes (una por línea)" }
                        textarea id="images" name="images" rows="4" placeholder="https://..." { (v("images")) }
                    }

                    button type="submit" class="primary" { "Publicar propiedad" }
                }
            }
        },
    )
}
