// src/templates/pages/register.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Registration is the same shape as sign-in: the app mints a fresh
/// identity either way.
pub fn register_page() -> Markup {
    desktop_layout(
        "Create account",
        None,
        html! {
            main class="container narrow" {
                h1 { "Create account" }
                p class="lead" {
                    "Choose how you want to use SmartBin. You can always sign in "
                    "again with a different role."
                }

                form class="stacked" action="/register" method="post" {
                    label for="name" { "Your name" }
                    input type="text" id="name" name="name" required placeholder="e.g. Dana";

                    label for="role" { "I am a..." }
                    select id="role" name="role" required {
                        option value="resident" { "Resident" }
                        option value="collector" { "Waste collector" }
                        option value="admin" { "City administrator" }
                    }

                    button type="submit" { "Create account" }
                }

                p { "Already have an account? " a href="/login" { "Sign in" } }
            }
        },
    )
}
