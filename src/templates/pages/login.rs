// src/templates/pages/login.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

/// The demo sign-in: any name, self-picked role, no password.
pub fn login_page() -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                p class="lead" {
                    "Pick a name and a role to try the demo. No password needed."
                }

                form class="stacked" action="/login" method="post" {
                    label for="name" { "Your name" }
                    input type="text" id="name" name="name" required placeholder="e.g. Dana";

                    label for="role" { "Role" }
                    select id="role" name="role" required {
                        option value="resident" { "Resident" }
                        option value="collector" { "Collector" }
                        option value="admin" { "Admin" }
                    }

                    button type="submit" { "Sign in" }
                }

                p { "New here? " a href="/register" { "Create an account" } }
            }
        },
    )
}
