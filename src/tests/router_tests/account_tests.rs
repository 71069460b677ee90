use astra::Body;
use http::{Method, Request};

use crate::db::favorites::is_favorite;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, header, post_form, seed_listing, sign_in, test_state, user_id,
};

const PUBLISH_FORM: &str = "title=Apartamento+en+Altamira&description=Vista+al+%C3%81vila\
    &property_type=apartment&transaction_type=rent&price=650&currency=USD&bedrooms=2\
    &city=caracas&address=Av.+Luis+Roche&features=Piscina&features=Garaje";

#[test]
fn publish_requires_sign_in() {
    let (_dir, state) = test_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/publicar")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::Unauthorized(_))));
}

#[test]
fn publish_creates_listing_and_redirects() {
    let (_dir, state) = test_state();
    let cookie = sign_in(&state, "pub@example.com");

    let resp = post_form(&state, "/publicar", PUBLISH_FORM, Some(&cookie), false);
    assert_eq!(resp.status(), 303);
    let location = header(&resp, "Location").unwrap().to_string();
    assert!(location.starts_with("/propiedades/"));

    let body = body_string(get(&state, &location, Some(&cookie)));
    assert!(body.contains("Apartamento en Altamira"));
    assert!(body.contains("Distrito Capital"));
    assert!(body.contains("Garaje"));
}

#[test]
fn publish_rejects_invalid_form_and_keeps_values() {
    let (_dir, state) = test_state();
    let cookie = sign_in(&state, "pub@example.com");

    let resp = post_form(&state, "/publicar", "title=Solo+t%C3%ADtulo&price=0", Some(&cookie), false);
    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("form-errors"));
    assert!(body.contains(r#"value="Solo título""#));
}

#[test]
fn favorite_toggle_round_trip() {
    let (_dir, state) = test_state();
    let owner = user_id(&state, "owner@example.com");
    let id = seed_listing(&state, owner, "Casa favorita", 70_000);
    let cookie = sign_in(&state, "fan@example.com");
    let fan = user_id(&state, "fan@example.com");

    let resp = post_form(&state, &format!("/favoritos/{id}/toggle"), "", Some(&cookie), true);
    assert_eq!(resp.status(), 200);
    let fragment = body_string(resp);
    assert!(fragment.contains("Quitar de favoritos"));
    assert!(!fragment.contains("<html"));
    assert!(state.db.with_conn(|c| is_favorite(c, fan, id)).unwrap());

    let list = body_string(get(&state, "/favoritos", Some(&cookie)));
    assert!(list.contains("Casa favorita"));

    let fragment = body_string(post_form(&state, &format!("/favoritos/{id}/toggle"), "", Some(&cookie), true));
    assert!(fragment.contains("Agregar a favoritos"));
    assert!(!state.db.with_conn(|c| is_favorite(c, fan, id)).unwrap());
}

#[test]
fn favorite_toggle_on_missing_listing_rolls_back() {
    let (_dir, state) = test_state();
    let cookie = sign_in(&state, "fan@example.com");

    let fragment = body_string(post_form(&state, "/favoritos/9999/toggle", "", Some(&cookie), true));
    assert!(fragment.contains("No se pudo actualizar favoritos"));
    assert!(fragment.contains("Agregar a favoritos"));
}

#[test]
fn my_properties_toggle_and_delete() {
    let (_dir, state) = test_state();
    let cookie = sign_in(&state, "owner@example.com");
    let owner = user_id(&state, "owner@example.com");
    let id = seed_listing(&state, owner, "Mi casa", 50_000);

    let resp = post_form(&state, &format!("/mis-propiedades/{id}/toggle"), "", Some(&cookie), false);
    assert_eq!(resp.status(), 303);

    let inactive = body_string(get(&state, "/mis-propiedades?status=inactive", Some(&cookie)));
    assert!(inactive.contains("Mi casa"));
    let active = body_string(get(&state, "/mis-propiedades?status=active", Some(&cookie)));
    assert!(!active.contains("Mi casa"));

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!("/propiedades/{id}"))
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));

    post_form(&state, &format!("/mis-propiedades/{id}/delete"), "", Some(&cookie), false);
    let all = body_string(get(&state, "/mis-propiedades", Some(&cookie)));
    assert!(!all.contains("Mi casa"));
}

#[test]
fn cannot_delete_someone_elses_listing() {
    let (_dir, state) = test_state();
    let owner = user_id(&state, "owner@example.com");
    let id = seed_listing(&state, owner, "Ajena", 50_000);
    let cookie = sign_in(&state, "intruder@example.com");

    let req = Request::builder()
        .method(Method::POST)
        .uri(format!("/mis-propiedades/{id}/delete"))
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}

#[test]
fn contact_form_stores_lead() {
    let (_dir, state) = test_state();
    let form = "name=Luis&email=luis%40example.com&phone=0414-123-4567\
        &message=Quiero+visitar+la+casa&property_interest=Comprar+una+propiedad";

    let resp = post_form(&state, "/contacto", form, None, false);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("¡Mensaje enviado!"));

    let count: i64 = state
        .db
        .with_conn(|conn| {
            conn.query_row("select count(*) from leads", [], |r| r.get(0))
                .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn contact_form_reports_errors() {
    let (_dir, state) = test_state();
    let resp = post_form(&state, "/contacto", "name=L&email=bad&phone=123", None, false);
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("form-errors"));
}

#[test]
fn contact_page_prefills_signed_in_profile() {
    let (_dir, state) = test_state();
    let form = "email=marta%40example.com&full_name=Marta+Rojas&phone=04241112233";
    post_form(&state, "/registro", form, None, false);
    let cookie = sign_in(&state, "marta@example.com");

    let body = body_string(get(&state, "/contacto", Some(&cookie)));
    assert!(body.contains(r#"value="Marta Rojas""#));
    assert!(body.contains(r#"value="marta@example.com""#));
    assert!(body.contains(r#"value="04241112233""#));
}
