use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::geos::find_city_by_slug;
use crate::seo::meta::absolute;
use crate::seo::{PageMeta, SITE_NAME};
use crate::templates::PageContext;

/// City pages linked from the footer.
const FOOTER_CITY_SLUGS: &[&str] = &[
    "caracas",
    "maracaibo",
    "valencia",
    "barquisimeto",
    "maracay",
    "barcelona-anzoategui",
    "merida",
    "puerto-la-cruz",
];

pub fn desktop_layout(meta: &PageMeta, ctx: &PageContext<'_>, content: Markup) -> Markup {
    let canonical = absolute(ctx.base_url, &meta.canonical_path);

    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                @if let Some(k) = &meta.keywords {
                    meta name="keywords" content=(k);
                }
                link rel="canonical" href=(canonical);

                meta property="og:type" content="website";
                meta property="og:site_name" content=(SITE_NAME);
                meta property="og:locale" content="es_VE";
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:url" content=(canonical);
                @if let Some(img) = &meta.image {
                    meta property="og:image" content=(img);
                }
                meta name="twitter:card" content="summary_large_image";

                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};

                @if let Some(ld) = &meta.json_ld {
                    script type="application/ld+json" { (PreEscaped(ld)) }
                }
            }
            body {
                (site_header(ctx))
                (content)
                (site_footer())
            }
        }
    }
}

fn site_header(ctx: &PageContext<'_>) -> Markup {
    html! {
        header class="flex items-center justify-between px-6 py-3 shadow" {
            a href="/" class="brand" { (SITE_NAME) }
            nav {
                ul {
                    li { a href="/comprar" { "Comprar" } }
                    li { a href="/alquilar" { "Alquilar" } }
                    li { a href="/buscar" { "Buscar" } }
                    li { a href="/publicar" { "Publicar" } }
                    li { a href="/contacto" { "Contacto" } }
                }
            }
            @match ctx.user {
                Some(user) => {
                    div class="user-menu" {
                        span class="user-name" { (user.display_name()) }
                        a href="/favoritos" { "Favoritos" }
                        a href="/mis-propiedades" { "Mis Propiedades" }
                        form method="post" action="/auth/logout" class="inline" {
                            button type="submit" class="link" { "Cerrar sesión" }
                        }
                    }
                }
                None => {
                    div class="user-menu" {
                        a href="/login" class="text-base font-medium" { "Ingresar" }
                        a href="/registro" class="btn primary" { "Registrarse" }
                    }
                }
            }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-cities" {
                h4 { "Ciudades populares" }
                ul {
                    @for city in FOOTER_CITY_SLUGS.iter().filter_map(|s| find_city_by_slug(s)) {
                        li { a href={ "/" (city.url_slug) } { "Propiedades en " (city.display_name) } }
                    }
                }
            }
            p class="copyright" { "© " (SITE_NAME) " · Bienes raíces en Venezuela" }
        }
    }
}
