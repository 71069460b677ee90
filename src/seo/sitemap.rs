// src/seo/sitemap.rs

use chrono::NaiveDate;
use maud::{html, PreEscaped};

use crate::seo::routes::RouteTable;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub path: String,
    pub change_freq: ChangeFreq,
    /// Kept as text so the output never depends on float formatting.
    pub priority: &'static str,
}

pub const STATIC_PAGES: &[(&str, ChangeFreq, &str)] = &[
    ("/", ChangeFreq::Daily, "1.0"),
    ("/comprar", ChangeFreq::Daily, "0.9"),
    ("/alquilar", ChangeFreq::Daily, "0.9"),
    ("/buscar", ChangeFreq::Daily, "0.8"),
    ("/contacto", ChangeFreq::Monthly, "0.6"),
    ("/login", ChangeFreq::Monthly, "0.5"),
    ("/registro", ChangeFreq::Monthly, "0.5"),
];

/// Static pages, then one page per city, then one per combination.
pub fn sitemap_entries(routes: &RouteTable) -> Vec<SitemapEntry> {
    let statics = STATIC_PAGES
        .iter()
        .map(|(path, change_freq, priority)| SitemapEntry {
            path: path.to_string(),
            change_freq: *change_freq,
            priority,
        });

    let cities = routes.cities().iter().map(|c| SitemapEntry {
        path: format!("/{}", c.url_slug),
        change_freq: ChangeFreq::Weekly,
        priority: "0.8",
    });

    let combos = routes.combinations().iter().map(|c| SitemapEntry {
        path: format!("/{}", c.route_slug),
        change_freq: ChangeFreq::Weekly,
        priority: "0.7",
    });

    statics.chain(cities).chain(combos).collect()
}

/// Render the sitemap XML. `last_modified` is only written when given, so
/// equal inputs always produce byte-identical output.
pub fn render_sitemap(
    base_url: &str,
    routes: &RouteTable,
    last_modified: Option<NaiveDate>,
) -> String {
    let base = base_url.trim_end_matches('/');
    let entries = sitemap_entries(routes);

    html! {
        (PreEscaped(XML_DECLARATION))
        urlset xmlns=(SITEMAP_NS) {
            @for e in &entries {
                url {
                    loc { (base) (e.path) }
                    @if let Some(d) = last_modified {
                        lastmod { (d.format("%Y-%m-%d").to_string()) }
                    }
                    changefreq { (e.change_freq.as_str()) }
                    priority { (e.priority) }
                }
            }
        }
    }
    .into_string()
}

pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /auth/\nDisallow: /mis-propiedades\nDisallow: /favoritos\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_count_covers_every_route() {
        let routes = RouteTable::standard().unwrap();
        let entries = sitemap_entries(&routes);
        assert_eq!(entries.len(), STATIC_PAGES.len() + routes.len());
        assert_eq!(entries[0].path, "/");
        assert!(entries.iter().any(|e| e.path == "/venta-casa-en-maracay"));
    }

    #[test]
    fn render_is_byte_stable() {
        let routes = RouteTable::standard().unwrap();
        let a = render_sitemap("https://turanchito.com/", &routes, None);
        let b = render_sitemap("https://turanchito.com", &routes, None);
        assert_eq!(a, b);
        assert!(a.starts_with(XML_DECLARATION));
        assert!(a.contains("<loc>https://turanchito.com/alquiler-terreno-en-caracas</loc>"));
        assert!(!a.contains("<lastmod>"));
    }

    #[test]
    fn lastmod_is_written_when_supplied() {
        let routes = RouteTable::standard().unwrap();
        let d = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let xml = render_sitemap("https://turanchito.com", &routes, Some(d));
        assert!(xml.contains("<lastmod>2026-10-17</lastmod>"));
    }

    #[test]
    fn base_url_is_escaped() {
        let routes = RouteTable::standard().unwrap();
        let xml = render_sitemap("https://example.com/?a=1&b=2", &routes, None);
        assert!(xml.contains("https://example.com/?a=1&amp;b=2"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let txt = robots_txt("https://turanchito.com/");
        assert!(txt.ends_with("Sitemap: https://turanchito.com/sitemap.xml\n"));
    }
}
