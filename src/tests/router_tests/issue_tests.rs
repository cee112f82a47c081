// src/tests/router_tests/issue_tests.rs
use crate::domain::issue::IssueStatus;
use crate::tests::utils::{body_string, get, post_form, sign_in, test_state, user_for};

#[test]
fn resident_reports_an_issue() {
    let state = test_state();
    let token = sign_in(&state, "Dana", "resident");
    let resident = user_for(&state, &token);

    let resp = post_form(
        &state,
        "/issues",
        Some(&token),
        "title=Missed+pickup&description=Bin+was+not+emptied&area=Downtown&address=214+Main+Street",
    );
    assert_eq!(resp.status(), 302);

    let issues = state.issues.list();
    assert_eq!(issues.len(), 1);
    let issue = &issues[0];
    assert_eq!(issue.title, "Missed pickup");
    assert_eq!(issue.area, "Downtown");
    assert_eq!(issue.status, IssueStatus::Reported);
    assert_eq!(issue.reported_by, resident.id);
    assert!(issue.resolved_by.is_none());
    assert!(issue.resolved_at.is_none());
}

#[test]
fn issue_report_requires_every_field() {
    let state = test_state();
    let token = sign_in(&state, "Dana", "resident");

    let resp = post_form(
        &state,
        "/issues",
        Some(&token),
        "title=Missed+pickup&area=Downtown&address=214+Main+Street",
    );
    assert_eq!(resp.status(), 400);
    assert!(state.issues.list().is_empty());
}

#[test]
fn residents_only_see_their_own_issues() {
    let state = test_state();

    let dana = sign_in(&state, "Dana", "resident");
    post_form(
        &state,
        "/issues",
        Some(&dana),
        "title=Overflowing+bin&description=x&area=Downtown&address=1+Main",
    );

    let omar = sign_in(&state, "Omar", "resident");
    post_form(
        &state,
        "/issues",
        Some(&omar),
        "title=Broken+container&description=y&area=Northside&address=2+Hill",
    );

    let body = body_string(get(&state, "/issues", Some(&dana)));
    assert!(body.contains("Overflowing bin"));
    assert!(!body.contains("Broken container"));
}

#[test]
fn admin_sees_every_issue_and_can_resolve() {
    let state = test_state();

    let dana = sign_in(&state, "Dana", "resident");
    post_form(
        &state,
        "/issues",
        Some(&dana),
        "title=Missed+pickup&description=x&area=Downtown&address=1+Main",
    );

    let admin_token = sign_in(&state, "Priya", "admin");
    let admin = user_for(&state, &admin_token);

    let body = body_string(get(&state, "/issues", Some(&admin_token)));
    assert!(body.contains("Missed pickup"));
    // Admins see the reporter's name next to each report.
    assert!(body.contains("Dana"));

    let issue_id = state.issues.list()[0].id.clone();
    let resp = post_form(
        &state,
        "/issues/status",
        Some(&admin_token),
        &format!("id={issue_id}&status=resolved"),
    );
    assert_eq!(resp.status(), 302);

    let resolved = state.issues.list()[0].clone();
    assert_eq!(resolved.status, IssueStatus::Resolved);
    assert_eq!(resolved.resolved_by.as_deref(), Some(admin.id.as_str()));
    assert!(resolved.resolved_at.is_some());
}

#[test]
fn collector_is_denied_the_issues_page_entirely() {
    let state = test_state();
    let token = sign_in(&state, "Sam", "collector");

    assert_eq!(get(&state, "/issues", Some(&token)).status(), 403);

    let resp = post_form(
        &state,
        "/issues",
        Some(&token),
        "title=T&description=D&area=A&address=B",
    );
    assert_eq!(resp.status(), 403);
}

#[test]
fn resident_cannot_resolve_an_issue() {
    let state = test_state();

    let dana = sign_in(&state, "Dana", "resident");
    post_form(
        &state,
        "/issues",
        Some(&dana),
        "title=Missed+pickup&description=x&area=Downtown&address=1+Main",
    );
    let issue_id = state.issues.list()[0].id.clone();

    let resp = post_form(
        &state,
        "/issues/status",
        Some(&dana),
        &format!("id={issue_id}&status=resolved"),
    );
    assert_eq!(resp.status(), 403);
    assert_eq!(state.issues.list()[0].status, IssueStatus::Reported);
}

#[test]
fn resolving_an_unknown_issue_is_not_found() {
    let state = test_state();
    let token = sign_in(&state, "Priya", "admin");

    let resp = post_form(
        &state,
        "/issues/status",
        Some(&token),
        "id=no-such-id&status=resolved",
    );
    assert_eq!(resp.status(), 404);
}
