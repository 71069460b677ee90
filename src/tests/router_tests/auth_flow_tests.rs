use crate::auth::sessions::SESSION_COOKIE;
use crate::db::magic_auth::{request_magic_link, Registration};
use crate::db::users::get_user;
use crate::tests::utils::{body_string, get, header, now, post_form, sign_in, test_state};

#[test]
fn login_page_loads_successfully() {
    let (_dir, state) = test_state();
    let resp = get(&state, "/login", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Ingresar"));
    assert!(body.contains(r#"hx-post="/auth/request-link""#));
}

#[test]
fn register_page_asks_for_profile() {
    let (_dir, state) = test_state();
    let body = body_string(get(&state, "/registro", None));
    assert!(body.contains(r#"name="full_name""#));
    assert!(body.contains(r#"value="maracay""#));
}

#[test]
fn request_link_returns_partial_html_for_htmx() {
    let (_dir, state) = test_state();
    let resp = post_form(&state, "/auth/request-link", "email=Test%40Example.com", None, true);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Revisa tu correo"));
    assert!(body.contains("test@example.com"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn request_link_with_bad_email_shows_inline_error() {
    let (_dir, state) = test_state();
    let body = body_string(post_form(&state, "/auth/request-link", "email=nope", None, true));
    assert!(body.contains("Email inválido"));
}

#[test]
fn registration_stores_profile() {
    let (_dir, state) = test_state();
    let form = "email=ana%40example.com&full_name=Ana+P%C3%A9rez&phone=04141234567&city=maracay";
    let resp = post_form(&state, "/registro", form, None, false);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("<!DOCTYPE html>"));

    let issued = request_magic_link(&state.db, "ana@example.com", &Registration::default(), now()).unwrap();
    let profile = state
        .db
        .with_conn(|conn| get_user(conn, issued.user_id))
        .unwrap()
        .unwrap();
    assert_eq!(profile.full_name.as_deref(), Some("Ana Pérez"));
    assert_eq!(profile.city.as_deref(), Some("Maracay"));
}

#[test]
fn magic_link_sets_cookie_and_is_single_use() {
    let (_dir, state) = test_state();
    let issued = request_magic_link(&state.db, "u@example.com", &Registration::default(), now()).unwrap();

    let resp = get(&state, &issued.link, None);
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), Some("/"));
    let cookie = header(&resp, "Set-Cookie").unwrap().to_string();
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(cookie.contains("Max-Age=604800"));

    let session = cookie.split(';').next().unwrap();
    let body = body_string(get(&state, "/", Some(session)));
    assert!(body.contains("Cerrar sesión"));

    let req = http::Request::builder()
        .uri(issued.link.as_str())
        .body(astra::Body::empty())
        .unwrap();
    assert!(matches!(
        crate::router::handle(req, &state),
        Err(crate::errors::ServerError::Unauthorized(_))
    ));
}

#[test]
fn logout_revokes_session() {
    let (_dir, state) = test_state();
    let cookie = sign_in(&state, "out@example.com");

    let resp = post_form(&state, "/auth/logout", "", Some(&cookie), false);
    assert_eq!(resp.status(), 303);
    assert!(header(&resp, "Set-Cookie").unwrap().contains("Max-Age=0"));

    let body = body_string(get(&state, "/", Some(&cookie)));
    assert!(body.contains("Ingresar"));
    assert!(!body.contains("Cerrar sesión"));
}
