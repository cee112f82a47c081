// src/tests/router_tests/access_tests.rs
use crate::tests::utils::{body_string, get, sign_in, test_state};

#[test]
fn home_page_is_public() {
    let state = test_state();

    let resp = get(&state, "/", None);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("SmartBin"));
}

#[test]
fn stylesheet_is_served() {
    let state = test_state();

    let resp = get(&state, "/static/main.css", None);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn analytics_is_admin_only() {
    let state = test_state();

    let admin = sign_in(&state, "Priya", "admin");
    let resp = get(&state, "/analytics", Some(&admin));
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Waste Analytics"));

    let resident = sign_in(&state, "Dana", "resident");
    assert_eq!(get(&state, "/analytics", Some(&resident)).status(), 403);

    let collector = sign_in(&state, "Sam", "collector");
    assert_eq!(get(&state, "/analytics", Some(&collector)).status(), 403);
}

#[test]
fn guide_needs_a_session_but_any_role_may_read_it() {
    let state = test_state();

    let resp = get(&state, "/guide", None);
    assert_eq!(resp.status(), 302);

    let token = sign_in(&state, "Sam", "collector");
    let resp = get(&state, "/guide", Some(&token));
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Recycling"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();

    let resp = get(&state, "/no-such-page", None);
    assert_eq!(resp.status(), 404);
}

#[test]
fn nav_links_follow_the_role() {
    let state = test_state();

    let resident = sign_in(&state, "Dana", "resident");
    let body = body_string(get(&state, "/dashboard", Some(&resident)));
    assert!(body.contains("/issues"));
    assert!(!body.contains("/analytics"));
    assert!(!body.contains("/collections"));

    let collector = sign_in(&state, "Sam", "collector");
    let body = body_string(get(&state, "/dashboard", Some(&collector)));
    assert!(body.contains("/collections"));
    assert!(!body.contains("/issues"));

    let admin = sign_in(&state, "Priya", "admin");
    let body = body_string(get(&state, "/dashboard", Some(&admin)));
    assert!(body.contains("/analytics"));
    assert!(body.contains("/issues"));
    assert!(body.contains("/collections"));
}
