use maud::{html, Markup, DOCTYPE};

use crate::seo::SITE_NAME;

/// Standalone error page. It does not use the site layout, so it renders
/// even when the request never got as far as resolving a session.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="robots" content="noindex";
                title { "Error " (status) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Volver al inicio" } }
                p { a href="/buscar" { "Buscar propiedades" } }
            }
        }
    }
}
