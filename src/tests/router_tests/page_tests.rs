use astra::Body;
use http::{Method, Request};

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, seed_listing, test_state, user_id, BASE_URL};

#[test]
fn home_lists_recent_listings() {
    let (_dir, state) = test_state();
    let owner = user_id(&state, "owner@example.com");
    seed_listing(&state, owner, "Casa con piscina en El Limón", 85_000);

    let resp = get(&state, "/", None);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Encuentra tu próximo hogar en Venezuela"));
    assert!(body.contains("Casa con piscina en El Limón"));
    assert!(body.contains("US$ 85.000"));
    assert!(body.contains(&format!(r#"<link rel="canonical" href="{BASE_URL}/">"#)));
}

#[test]
fn search_filters_by_price() {
    let (_dir, state) = test_state();
    let owner = user_id(&state, "owner@example.com");
    seed_listing(&state, owner, "Casa económica", 40_000);
    seed_listing(&state, owner, "Casa grande", 300_000);

    let body = body_string(get(&state, "/buscar?price_max=100000", None));
    assert!(body.contains("Casa económica"));
    assert!(!body.contains("Casa grande"));
}

#[test]
fn rent_preset_excludes_sales() {
    let (_dir, state) = test_state();
    let owner = user_id(&state, "owner@example.com");
    seed_listing(&state, owner, "Casa en venta", 90_000);

    let resp = get(&state, "/alquilar", None);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Propiedades en alquiler"));
    assert!(!body.contains("Casa en venta"));
}

#[test]
fn combination_landing_renders_seo_copy_and_matches() {
    let (_dir, state) = test_state();
    let owner = user_id(&state, "owner@example.com");
    seed_listing(&state, owner, "Casa en Maracay centro", 120_000);

    let resp = get(&state, "/venta-casa-en-maracay", None);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("<title>Casa en Venta en Maracay | Turanchito</title>"));
    assert!(body.contains(r#"name="keywords""#));
    assert!(body.contains("Casa en Maracay centro"));
    assert!(body.contains(&format!("{BASE_URL}/venta-casa-en-maracay")));
}

#[test]
fn combination_for_other_city_is_empty() {
    let (_dir, state) = test_state();
    let owner = user_id(&state, "owner@example.com");
    seed_listing(&state, owner, "Casa en Maracay centro", 120_000);

    let body = body_string(get(&state, "/venta-casa-en-caracas", None));
    assert!(!body.contains("Casa en Maracay centro"));
}

#[test]
fn city_page_links_its_combinations() {
    let (_dir, state) = test_state();
    let body = body_string(get(&state, "/maracay", None));
    assert!(body.contains("/venta-apartamento-en-maracay"));
    assert!(body.contains("/alquiler-terreno-en-maracay"));
}

#[test]
fn unknown_slug_is_not_found() {
    let (_dir, state) = test_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/venta-castillo-en-maracay")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}

#[test]
fn listing_detail_has_meta_and_json_ld() {
    let (_dir, state) = test_state();
    let owner = user_id(&state, "owner@example.com");
    let id = seed_listing(&state, owner, "Casa con jardín", 120_000);

    let resp = get(&state, &format!("/propiedades/{id}"), None);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("<title>Casa en Maracay - US$ 120.000 | Turanchito</title>"));
    assert!(body.contains("application/ld+json"));
    assert!(body.contains("/venta-casa-en-maracay"));
    assert!(body.contains(r#"action="/contacto""#));
}

#[test]
fn non_numeric_listing_id_is_not_found() {
    let (_dir, state) = test_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/propiedades/abc")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}

#[test]
fn sitemap_and_robots() {
    let (_dir, state) = test_state();

    let resp = get(&state, "/sitemap.xml", None);
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").unwrap().starts_with("application/xml"));
    let xml = body_string(resp);
    assert!(xml.contains(&format!("<loc>{BASE_URL}/venta-casa-en-maracay</loc>")));
    assert!(!xml.contains("<lastmod>"));

    let robots = body_string(get(&state, "/robots.txt", None));
    assert!(robots.contains(&format!("Sitemap: {BASE_URL}/sitemap.xml")));
}
