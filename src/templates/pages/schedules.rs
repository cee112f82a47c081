// src/templates/pages/schedules.rs

use crate::domain::schedule::{PickupSchedule, WASTE_TYPES};
use crate::domain::user::{Role, User};
use crate::templates::components::{notice_banner, pickup_status_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct SchedulesVm {
    pub user: User,
    pub schedules: Vec<PickupSchedule>,
    pub notice: Option<String>,
}

pub fn schedules_page(vm: &SchedulesVm) -> Markup {
    let is_admin = vm.user.role == Role::Admin;

    desktop_layout(
        "Pickup Schedules",
        Some(&vm.user),
        html! {
            main class="container" {
                h1 { "Pickup Schedules" }
                p class="lead" {
                    @if is_admin {
                        "Manage waste collection schedules for all areas"
                    } @else {
                        "View upcoming waste collection schedules in your area"
                    }
                }

                (notice_banner(vm.notice.as_deref()))

                @if is_admin {
                    section class="card" {
                        h3 { "Add a pickup" }
                        form class="stacked" action="/schedules" method="post" {
                            label for="area" { "Area" }
                            input type="text" id="area" name="area" required placeholder="e.g. Downtown";

                            label for="address" { "Address" }
                            input type="text" id="address" name="address" required placeholder="e.g. 214 Main Street";

                            label for="date" { "Date" }
                            input type="date" id="date" name="date" required;

                            label for="time" { "Time" }
                            input type="time" id="time" name="time" required;

                            label for="waste_type" { "Waste type" }
                            select id="waste_type" name="waste_type" required {
                                @for t in WASTE_TYPES {
                                    option value=(t.as_str()) { (t.label()) }
                                }
                            }

                            button type="submit" { "Add schedule" }
                        }
                    }
                }

                section class="card" {
                    h3 { "All pickups" }
                    @if vm.schedules.is_empty() {
                        p { "No pickups scheduled yet." }
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
                                @for s in &vm.schedules {
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
