// src/templates/pages/issues.rs

use std::collections::HashMap;

use crate::domain::issue::{Issue, IssueStatus};
use crate::domain::user::{Role, User};
use crate::templates::components::{issue_status_badge, notice_banner, short_datetime};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct IssuesVm {
    pub user: User,
    pub issues: Vec<Issue>,
    /// Reporter id -> display name, filled for the admin view.
    pub reporter_names: HashMap<String, String>,
    pub notice: Option<String>,
}

pub fn issues_page(vm: &IssuesVm) -> Markup {
    let is_admin = vm.user.role == Role::Admin;
    let is_resident = vm.user.role == Role::Resident;

    desktop_layout(
        "Issues",
        Some(&vm.user),
        html! {
            main class="container" {
                h1 {
                    @if is_admin { "Issue Management" } @else { "Report Issues" }
                }
                p class="lead" {
                    @if is_admin {
                        "Resident reports from every area"
                    } @else {
                        "Your reports and their current status"
                    }
                }

                (notice_banner(vm.notice.as_deref()))

                @if is_resident {
                    section class="card" {
                        h3 { "Report a new issue" }
                        form class="stacked" action="/issues" method="post" {
                            label for="title" { "Title" }
                            input type="text" id="title" name="title" required placeholder="e.g. Missed pickup";

                            label for="description" { "Description" }
                            textarea id="description" name="description" rows="3" required
                                placeholder="What happened?" {}

                            label for="area" { "Area" }
                            input type="text" id="area" name="area" required placeholder="e.g. Downtown";

                            label for="address" { "Address" }
                            input type="text" id="address" name="address" required placeholder="e.g. 214 Main Street";

                            button type="submit" { "Submit report" }
                        }
                    }
                }

                section class="card" {
                    h3 {
                        @if is_admin { "All issues" } @else { "Your issues" }
                    }
                    @if vm.issues.is_empty() {
                        p { "No issues reported." }
                    } @else {
                        table {
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Area" }
                                    @if is_admin { th { "Reported by" } }
                                    th { "Reported" }
                                    th { "Status" }
                                    @if is_admin { th { "Actions" } }
                                }
                            }
                            tbody {
                                @for issue in &vm.issues {
                                    tr {
                                        td {
                                            strong { (issue.title) }
                                            br;
                                            span style="color: #6b7280; font-size: 0.85rem;" {
                                                (issue.description)
                                            }
                                        }
                                        td { (issue.area) ", " (issue.address) }
                                        @if is_admin {
                                            td {
                                                @match vm.reporter_names.get(&issue.reported_by) {
                                                    Some(name) => { (name) }
                                                    None => { "Unknown" }
                                                }
                                            }
                                        }
                                        td { (short_datetime(&issue.reported_at)) }
                                        td { (issue_status_badge(issue.status)) }
                                        @if is_admin {
                                            td {
                                                @if issue.status != IssueStatus::Resolved {
                                                    @if issue.status == IssueStatus::Reported {
                                                        form class="inline" action="/issues/status" method="post" {
                                                            input type="hidden" name="id" value=(issue.id);
                                                            input type="hidden" name="status" value="in-progress";
                                                            button type="submit" class="inline" { "Start" }
                                                        }
                                                        " "
                                                    }
                                                    form class="inline" action="/issues/status" method="post" {
                                                        input type="hidden" name="id" value=(issue.id);
                                                        input type="hidden" name="status" value="resolved";
                                                        button type="submit" class="inline" { "Resolve" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
