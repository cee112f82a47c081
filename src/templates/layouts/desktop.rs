// src/templates/layouts/desktop.rs
use crate::auth::access::{can_perform, issue_scope, Action, IssueScope};
use crate::domain::user::User;
use maud::{html, Markup, DOCTYPE};

/// Shared page chrome. The navbar asks the access gate what to render,
/// so a collector never sees the Issues link and only admins see
/// Analytics.
pub fn desktop_layout(title: &str, user: Option<&User>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | SmartBin" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site" {
                    h3 { a href="/" style="color: inherit; text-decoration: none;" { "SmartBin" } }
                    nav {
                        ul {
                            @if let Some(user) = user {
                                li { a href="/dashboard" { "Dashboard" } }
                                li { a href="/schedules" { "Schedules" } }
                                @if can_perform(user.role, Action::TransitionSchedule) {
                                    li { a href="/collections" { "Collections" } }
                                }
                                @if issue_scope(user.role) != IssueScope::Denied {
                                    li { a href="/issues" { "Issues" } }
                                }
                                @if can_perform(user.role, Action::ViewAnalytics) {
                                    li { a href="/analytics" { "Analytics" } }
                                }
                                li { a href="/guide" { "Waste Guide" } }
                            } @else {
                                li { a href="/" { "Home" } }
                            }
                        }
                    }
                    @if let Some(user) = user {
                        div {
                            span style="color: #6b7280; margin-right: 0.75rem;" {
                                (user.name) " (" (user.role.label()) ")"
                            }
                            form class="inline" action="/logout" method="post" {
                                button type="submit" class="inline" { "Sign out" }
                            }
                        }
                    } @else {
                        a href="/login" { "Sign in" }
                    }
                }
                (content)
            }
        }
    }
}
