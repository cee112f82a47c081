use maud::{html, Markup};

use crate::domain::issue::IssueStatus;
use crate::domain::schedule::PickupStatus;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}

/// Green banner shown after a redirect with a `notice` query param.
pub fn notice_banner(notice: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = notice {
            div class="notice" { (msg) }
        }
    }
}

pub fn pickup_status_badge(status: PickupStatus) -> Markup {
    html! {
        span class={ "badge " (status.as_str()) } { (status.as_str()) }
    }
}

pub fn issue_status_badge(status: IssueStatus) -> Markup {
    html! {
        span class={ "badge " (status.as_str()) } { (status.label()) }
    }
}

/// "2025-08-11T08:00:00+00:00" -> "2025-08-11 08:00" for table cells.
pub fn short_datetime(ts: &str) -> String {
    match ts.get(..16) {
        Some(prefix) => prefix.replace('T', " "),
        None => ts.to_string(),
    }
}
