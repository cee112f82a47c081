// src/templates/pages/home.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        None,
        html! {
            main class="container" {
                h1 { "Smarter waste collection for your neighbourhood" }
                p class="lead" {
                    "SmartBin tracks pickup schedules, lets residents report problems, "
                    "and gives the city a live view of how collections are going."
                }

                div class="grid" {
                    (card("Residents", html! {
                        p { "See when your bins are collected and report missed pickups or overflowing bins." }
                    }))
                    (card("Collectors", html! {
                        p { "Work through today's route and mark each pickup collected or missed as you go." }
                    }))
                    (card("Administrators", html! {
                        p { "Plan schedules, resolve reported issues, and watch the collection analytics." }
                    }))
                }

                p {
                    a class="button" href="/login" { "Sign in" }
                    " "
                    a class="button" href="/register" { "Create account" }
                }
            }
        },
    )
}
