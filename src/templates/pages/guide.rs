// src/templates/pages/guide.rs

use crate::domain::guide::WasteGuideItem;
use crate::domain::user::User;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn guide_page(user: &User, items: &[WasteGuideItem]) -> Markup {
    desktop_layout(
        "Waste Guide",
        Some(user),
        html! {
            main class="container" {
                h1 { "Waste Sorting Guide" }
                p class="lead" { "What goes where, and how to get rid of the rest" }

                @for item in items {
                    section class="card" {
                        h3 { (item.category) }
                        p { (item.description) }
                        p {
                            strong { "Common items: " }
                            (item.items.join(", "))
                        }
                        p {
                            strong { "How to dispose: " }
                            (item.disposal_method)
                        }
                    }
                }
            }
        },
    )
}
