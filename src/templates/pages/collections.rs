// src/templates/pages/collections.rs

use crate::domain::schedule::PickupSchedule;
use crate::domain::user::User;
use crate::templates::components::{notice_banner, pickup_status_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CollectionsVm {
    pub user: User,
    /// Still `scheduled` and not yet due or due today, soonest first.
    pub upcoming: Vec<PickupSchedule>,
    /// Terminal or overdue, latest first.
    pub past: Vec<PickupSchedule>,
    pub notice: Option<String>,
}

pub fn collections_page(vm: &CollectionsVm) -> Markup {
    desktop_layout(
        "Collection Status",
        Some(&vm.user),
        html! {
            main class="container" {
                h1 { "Collection Status" }
                p class="lead" { "Track and update waste collection statuses" }

                (notice_banner(vm.notice.as_deref()))

                section class="card" {
                    h3 { "Upcoming" }
                    @if vm.upcoming.is_empty() {
                        p { "Nothing left to collect. Nice work." }
                    } @else {
                        table {
                            thead {
                                tr {
                                    th { "Area" }
                                    th { "Address" }
                                    th { "Date" }
                                    th { "Time" }
                                    th { "Type" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                @for s in &vm.upcoming {
                                    tr {
                                        td { (s.area) }
                                        td { (s.address) }
                                        td { (s.date) }
                                        td { (s.time) }
                                        td { (s.waste_type.label()) }
                                        td {
                                            form class="inline" action="/schedules/status" method="post" {
                                                input type="hidden" name="id" value=(s.id);
                                                input type="hidden" name="status" value="collected";
                                                button type="submit" class="inline" { "Collected" }
                                            }
                                            " "
                                            form class="inline" action="/schedules/status" method="post" {
                                                input type="hidden" name="id" value=(s.id);
                                                input type="hidden" name="status" value="missed";
                                                button type="submit" class="inline danger" { "Missed" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "Past" }
                    @if vm.past.is_empty() {
                        p { "No past collections yet." }
                    } @else {
                        table {
                            thead {
                                tr {
                                    th { "Area" }
                                    th { "Address" }
                                    th { "Date" }
                                    th { "Time" }
                                    th { "Type" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                @for s in &vm.past {
                                    tr {
                                        td { (s.area) }
                                        td { (s.address) }
                                        td { (s.date) }
                                        td { (s.time) }
                                        td { (s.waste_type.label()) }
                                        td { (pickup_status_badge(s.status)) }
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
