use std::io::Read;

use astra::{Body, Response};
use chrono::NaiveDate;
use http::{Method, Request};
use tempfile::TempDir;

use crate::auth::sessions::SESSION_COOKIE;
use crate::config::Config;
use crate::db::listings::insert_listing;
use crate::db::listings::tests::new_listing;
use crate::db::magic_auth::{redeem_magic_link, request_magic_link, Registration};
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use crate::seo::RouteTable;

pub const BASE_URL: &str = "https://turanchito.test";

/// Fresh state on its own SQLite file. Keep the `TempDir` alive for the
/// duration of the test.
pub fn test_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("router.sqlite3");
    let db = Database::new(db_path.clone());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        workers: 1,
        database_path: db_path,
        base_url: BASE_URL.to_string(),
        mail: None,
    };

    let state = AppState {
        db,
        config,
        routes: RouteTable::standard().unwrap(),
        mailer: None,
    };
    (dir, state)
}

/// Sign a user in through the magic-link flow and return the `Cookie` header.
pub fn sign_in(state: &AppState, email: &str) -> String {
    let issued = request_magic_link(&state.db, email, &Registration::default(), now()).unwrap();
    let session = redeem_magic_link(&state.db, &issued.token, now()).unwrap();
    format!("{SESSION_COOKIE}={session}")
}

pub fn user_id(state: &AppState, email: &str) -> i64 {
    state
        .db
        .with_conn(|conn| crate::db::auth::get_or_create_user(conn, email, now()))
        .unwrap()
}

/// Insert an active Maracay house for sale.
pub fn seed_listing(state: &AppState, owner_id: i64, title: &str, price: i64) -> i64 {
    let created = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    insert_listing(&state.db, owner_id, &new_listing(title, price), created).unwrap()
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn get(state: &AppState, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    let req = builder.body(Body::empty()).unwrap();
    handle(req, state).expect("Failed to handle request")
}

pub fn post_form(state: &AppState, uri: &str, form: &str, cookie: Option<&str>, htmx: bool) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    let req = builder.body(Body::from(form.as_bytes().to_vec())).unwrap();
    handle(req, state).expect("Failed to handle request")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header<'a>(resp: &'a Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}
