// src/tests/router_tests/auth_flow_tests.rs
use crate::tests::utils::{body_string, get, post_form, sign_in, test_state};

#[test]
fn login_page_loads_successfully() {
    let state = test_state();

    let resp = get(&state, "/login", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn login_sets_session_cookie_and_redirects_to_dashboard() {
    let state = test_state();

    let resp = post_form(&state, "/login", None, "name=Dana&role=resident");
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/dashboard"
    );

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .expect("should set session cookie")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn register_works_like_login() {
    let state = test_state();

    let resp = post_form(&state, "/register", None, "name=Sam&role=collector");
    assert_eq!(resp.status(), 302);
    assert!(resp.headers().get("Set-Cookie").is_some());
}

#[test]
fn login_with_unknown_role_is_rejected() {
    let state = test_state();

    let resp = post_form(&state, "/login", None, "name=Dana&role=mayor");
    assert_eq!(resp.status(), 400);
}

#[test]
fn login_without_name_is_rejected() {
    let state = test_state();

    let resp = post_form(&state, "/login", None, "name=&role=resident");
    assert_eq!(resp.status(), 400);
}

#[test]
fn dashboard_redirects_to_login_without_a_session() {
    let state = test_state();

    let resp = get(&state, "/dashboard", None);
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/login"
    );
}

#[test]
fn dashboard_greets_the_signed_in_user() {
    let state = test_state();
    let token = sign_in(&state, "Dana", "resident");

    let resp = get(&state, "/dashboard", Some(&token));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Dana"));
    assert!(body.contains("Resident"));
}

#[test]
fn logout_revokes_the_session() {
    let state = test_state();
    let token = sign_in(&state, "Dana", "resident");

    let resp = post_form(&state, "/logout", Some(&token), "");
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );

    // The old cookie no longer resolves.
    let resp = get(&state, "/dashboard", Some(&token));
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/login"
    );
}
