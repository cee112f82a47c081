// src/tests/utils.rs
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::Body;
use http::{Method, Request};

use crate::auth::sessions::load_user_from_session;
use crate::db::connection::{init_db, Database};
use crate::domain::user::User;
use crate::router::handle;
use crate::AppState;

/// Fresh app state over a throwaway database file, using the
/// production schema.
pub fn test_state() -> AppState {
    let path = std::env::temp_dir().join(format!(
        "smartbin_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    AppState::new(db)
}

/// Sign in through the real route and return the session token from
/// the Set-Cookie header.
pub fn sign_in(state: &AppState, name: &str, role: &str) -> String {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(
            format!("name={name}&role={role}").as_bytes().to_vec(),
        ))
        .unwrap();

    let resp = handle(req, state).expect("login request failed");
    assert_eq!(resp.status(), 302, "login should redirect");

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .expect("login should set a cookie")
        .to_str()
        .unwrap();

    cookie
        .strip_prefix("session=")
        .expect("cookie should start with session=")
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Resolve a session token back to its user.
pub fn user_for(state: &AppState, token: &str) -> User {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    state
        .db
        .with_conn(|conn| load_user_from_session(conn, token, now))
        .unwrap()
        .expect("session should resolve to a user")
}

pub fn get(state: &AppState, path: &str, token: Option<&str>) -> astra::Response {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(token) = token {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    let req = builder.body(Body::empty()).unwrap();

    handle(req, state).unwrap_or_else(crate::responses::error_to_response)
}

pub fn post_form(
    state: &AppState,
    path: &str,
    token: Option<&str>,
    form_body: &str,
) -> astra::Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    let req = builder
        .body(Body::from(form_body.as_bytes().to_vec()))
        .unwrap();

    handle(req, state).unwrap_or_else(crate::responses::error_to_response)
}

pub fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
