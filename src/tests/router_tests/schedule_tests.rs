// src/tests/router_tests/schedule_tests.rs
use crate::domain::schedule::PickupStatus;
use crate::domain::stats::collection_stats;
use crate::tests::utils::{body_string, get, post_form, sign_in, test_state, user_for};

#[test]
fn schedules_page_shows_the_seed_data_to_any_role() {
    let state = test_state();
    let token = sign_in(&state, "Dana", "resident");

    let resp = get(&state, "/schedules", Some(&token));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Downtown"));
    assert!(body.contains("scheduled"));
    // Residents don't get the add form.
    assert!(!body.contains("Add schedule"));
}

#[test]
fn admin_sees_the_add_form_and_can_add_a_schedule() {
    let state = test_state();
    let token = sign_in(&state, "Priya", "admin");

    let resp = get(&state, "/schedules", Some(&token));
    assert!(body_string(resp).contains("Add schedule"));

    let resp = post_form(
        &state,
        "/schedules",
        Some(&token),
        "area=Old+Town&address=5+Canal+Street&date=2025-09-01&time=07%3A45&waste_type=recycling",
    );
    assert_eq!(resp.status(), 302);

    let added = state
        .schedules
        .list()
        .into_iter()
        .find(|s| s.address == "5 Canal Street")
        .expect("new schedule should be persisted");
    assert_eq!(added.area, "Old Town");
    assert_eq!(added.status, PickupStatus::Scheduled);
    assert!(added.collected_by.is_none());
}

#[test]
fn resident_cannot_add_a_schedule() {
    let state = test_state();
    let token = sign_in(&state, "Dana", "resident");

    let resp = post_form(
        &state,
        "/schedules",
        Some(&token),
        "area=Downtown&address=1+Main&date=2025-09-01&time=08:00&waste_type=general",
    );
    assert_eq!(resp.status(), 403);
}

#[test]
fn add_schedule_validates_presence_and_format() {
    let state = test_state();
    let token = sign_in(&state, "Priya", "admin");

    // Missing area
    let resp = post_form(
        &state,
        "/schedules",
        Some(&token),
        "address=1+Main&date=2025-09-01&time=08:00&waste_type=general",
    );
    assert_eq!(resp.status(), 400);

    // Bad date
    let resp = post_form(
        &state,
        "/schedules",
        Some(&token),
        "area=Downtown&address=1+Main&date=tomorrow&time=08:00&waste_type=general",
    );
    assert_eq!(resp.status(), 400);
}

#[test]
fn collector_marks_a_pickup_missed_and_stats_move_by_one() {
    let state = test_state();
    let token = sign_in(&state, "Sam", "collector");
    let collector = user_for(&state, &token);

    let before = collection_stats(&state.schedules.list(), &[]);
    let target = state.schedules.list()[0].clone();

    let resp = post_form(
        &state,
        "/schedules/status",
        Some(&token),
        &format!("id={}&status=missed", target.id),
    );
    assert_eq!(resp.status(), 302);

    let after_list = state.schedules.list();
    let updated = after_list.iter().find(|s| s.id == target.id).unwrap();
    assert_eq!(updated.status, PickupStatus::Missed);
    assert_eq!(updated.collected_by.as_deref(), Some(collector.id.as_str()));
    assert!(updated.collected_at.is_some());

    let after = collection_stats(&after_list, &[]);
    assert_eq!(after.collections.missed, before.collections.missed + 1);
    assert_eq!(after.collections.scheduled, before.collections.scheduled - 1);
    assert_eq!(after.collections.total, before.collections.total);
}

#[test]
fn resident_cannot_transition_a_pickup() {
    let state = test_state();
    let token = sign_in(&state, "Dana", "resident");
    let target = state.schedules.list()[0].clone();

    let resp = post_form(
        &state,
        "/schedules/status",
        Some(&token),
        &format!("id={}&status=collected", target.id),
    );
    assert_eq!(resp.status(), 403);
}

#[test]
fn transitioning_an_unknown_pickup_is_not_found() {
    let state = test_state();
    let token = sign_in(&state, "Sam", "collector");

    let resp = post_form(
        &state,
        "/schedules/status",
        Some(&token),
        "id=no-such-id&status=collected",
    );
    assert_eq!(resp.status(), 404);
}

#[test]
fn scheduled_is_not_a_valid_transition_target() {
    let state = test_state();
    let token = sign_in(&state, "Sam", "collector");
    let target = state.schedules.list()[0].clone();

    let resp = post_form(
        &state,
        "/schedules/status",
        Some(&token),
        &format!("id={}&status=scheduled", target.id),
    );
    assert_eq!(resp.status(), 400);
}

#[test]
fn collections_page_is_for_collectors_and_admins_only() {
    let state = test_state();

    let collector = sign_in(&state, "Sam", "collector");
    assert_eq!(get(&state, "/collections", Some(&collector)).status(), 200);

    let resident = sign_in(&state, "Dana", "resident");
    assert_eq!(get(&state, "/collections", Some(&resident)).status(), 403);
}
