// src/templates/pages/dashboard.rs

use crate::auth::access::{can_perform, Action};
use crate::domain::stats::CollectionStats;
use crate::domain::user::{Role, User};
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub struct DashboardVm {
    pub user: User,
    pub stats: CollectionStats,
    /// Open reports by this user (residents only).
    pub own_open_issues: usize,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let role = vm.user.role;

    desktop_layout(
        "Dashboard",
        Some(&vm.user),
        html! {
            main class="container" {
                h1 { "Hello, " (vm.user.name) }
                p class="lead" {
                    @match role {
                        Role::Resident => { "Here's what's happening with waste collection in your area." }
                        Role::Collector => { "Here's your collection overview for the coming days." }
                        Role::Admin => { "Here's the city-wide collection picture." }
                    }
                }

                section class="card" {
                    div class="grid" {
                        div class="stat" {
                            div class="num" { (vm.stats.collections.scheduled) }
                            div class="label" { "Scheduled pickups" }
                        }
                        div class="stat" {
                            div class="num" { (vm.stats.collections.collected) }
                            div class="label" { "Collected" }
                        }
                        div class="stat" {
                            div class="num" { (vm.stats.collections.missed) }
                            div class="label" { "Missed" }
                        }
                        @if role == Role::Resident {
                            div class="stat" {
                                div class="num" { (vm.own_open_issues) }
                                div class="label" { "Your open reports" }
                            }
                        } @else if role == Role::Admin {
                            div class="stat" {
                                div class="num" { (vm.stats.issues.pending) }
                                div class="label" { "Open issues" }
                            }
                        }
                    }
                }

                div class="grid" {
                    (card("Pickup schedules", html! {
                        p { "Collection times for every area." }
                        a class="button" href="/schedules" { "View schedules" }
                    }))

                    @if can_perform(role, Action::TransitionSchedule) {
                        (card("Collections", html! {
                            p { "Mark today's pickups as collected or missed." }
                            a class="button" href="/collections" { "Update statuses" }
                        }))
                    }

                    @if can_perform(role, Action::CreateIssue) {
                        (card("Report an issue", html! {
                            p { "Missed pickup? Overflowing bin? Let us know." }
                            a class="button" href="/issues" { "Report issue" }
                        }))
                    }

                    @if can_perform(role, Action::ResolveIssue) {
                        (card("Issue management", html! {
                            p { (vm.stats.issues.pending) " issue(s) waiting for a response." }
                            a class="button" href="/issues" { "Manage issues" }
                        }))
                    }

                    @if can_perform(role, Action::ViewAnalytics) {
                        (card("Analytics", html! {
                            p { "Collection performance by status, type, and area." }
                            a class="button" href="/analytics" { "Open analytics" }
                        }))
                    }

                    (card("Waste guide", html! {
                        p { "What goes in which bin, and where the rest goes." }
                        a class="button" href="/guide" { "Open guide" }
                    }))
                }
            }
        },
    )
}
