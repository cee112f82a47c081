// src/templates/pages/analytics.rs

use crate::domain::stats::CollectionStats;
use crate::domain::user::User;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AnalyticsVm {
    pub user: User,
    pub stats: CollectionStats,
}

pub fn analytics_page(vm: &AnalyticsVm) -> Markup {
    let c = &vm.stats.collections;

    desktop_layout(
        "Analytics",
        Some(&vm.user),
        html! {
            main class="container" {
                h1 { "Waste Analytics" }
                p class="lead" { "Collection performance across the city" }

                section class="card" {
                    h3 { "Collections" }
                    div class="grid" {
                        div class="stat" {
                            div class="num" { (c.total) }
                            div class="label" { "Total pickups" }
                        }
                        div class="stat" {
                            div class="num" { (c.collected) }
                            div class="label" { "Collected" }
                        }
                        div class="stat" {
                            div class="num" { (c.missed) }
                            div class="label" { "Missed" }
                        }
                        div class="stat" {
                            div class="num" { (c.scheduled) }
                            div class="label" { "Still scheduled" }
                        }
                    }
                }

                section class="card" {
                    h3 { "By waste type" }
                    table {
                        thead {
                            tr {
                                th { "Type" }
                                th { "Pickups" }
                            }
                        }
                        tbody {
                            @for row in &vm.stats.waste_types {
                                tr {
                                    td { (row.waste_type.label()) }
                                    td { (row.count) }
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "By area" }
                    @if vm.stats.areas.is_empty() {
                        p { "No data yet." }
                    } @else {
                        table {
                            thead {
                                tr {
                                    th { "Area" }
                                    th { "Total" }
                                    th { "Collected" }
                                    th { "Missed" }
                                    th { "Scheduled" }
                                }
                            }
                            tbody {
                                @for area in &vm.stats.areas {
                                    tr {
                                        td { (area.area) }
                                        td { (area.total) }
                                        td { (area.collected) }
                                        td { (area.missed) }
                                        td { (area.scheduled) }
                                    }
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "Issues" }
                    div class="grid" {
                        div class="stat" {
                            div class="num" { (vm.stats.issues.total) }
                            div class="label" { "Reported" }
                        }
                        div class="stat" {
                            div class="num" { (vm.stats.issues.resolved) }
                            div class="label" { "Resolved" }
                        }
                        div class="stat" {
                            div class="num" { (vm.stats.issues.pending) }
                            div class="label" { "Open" }
                        }
                    }
                }
            }
        },
    )
}
