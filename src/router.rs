// src/router.rs
use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use url::form_urlencoded;
use uuid::Uuid;

use crate::auth::access::{can_perform, issue_scope, Action, IssueScope};
use crate::auth::sessions::{create_session, load_user_from_session, revoke_session};
use crate::db::issues::NewIssue;
use crate::db::schedules::NewSchedule;
use crate::db::users::{find_user_name, insert_user};
use crate::domain::guide::waste_guide_items;
use crate::domain::issue::IssueStatus;
use crate::domain::schedule::{PickupSchedule, PickupStatus, WasteType};
use crate::domain::stats::collection_stats;
use crate::domain::user::{Role, User};
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, redirect, redirect_with_cookie, ResultResp};
use crate::templates::pages::{
    analytics_page, collections_page, dashboard_page, guide_page, home_page, issues_page,
    login_page, register_page, schedules_page, AnalyticsVm, CollectionsVm, DashboardVm, IssuesVm,
    SchedulesVm,
};
use crate::AppState;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(home_page()),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        ("GET", "/login") => html_response(login_page()),
        ("GET", "/register") => html_response(register_page()),
        // Register and login are the same operation in this demo: both
        // mint a fresh identity from a name and a self-declared role.
        ("POST", "/login") | ("POST", "/register") => sign_in(&mut req, state),
        ("POST", "/logout") => sign_out(&req, state),

        ("GET", "/dashboard") => dashboard(&req, state),
        ("GET", "/schedules") => schedules(&req, state),
        ("POST", "/schedules") => add_schedule(&mut req, state),
        ("POST", "/schedules/status") => update_schedule_status(&mut req, state),
        ("GET", "/collections") => collections(&req, state),
        ("GET", "/issues") => issues(&req, state),
        ("POST", "/issues") => report_issue(&mut req, state),
        ("POST", "/issues/status") => update_issue_status(&mut req, state),
        ("GET", "/analytics") => analytics(&req, state),
        ("GET", "/guide") => guide(&req, state),

        _ => Err(ServerError::NotFound),
    }
}

// ---------- auth ----------

fn sign_in(req: &mut Request, state: &AppState) -> ResultResp {
    let form = parse_form(req)?;
    let name = require_field(&form, "name")?.to_string();
    let role = Role::parse(require_field(&form, "role")?)
        .ok_or_else(|| ServerError::BadRequest("unknown role".into()))?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        name,
        role,
    };

    let now = Utc::now().timestamp();
    let token = state.db.with_conn(|conn| {
        insert_user(conn, &user, now)?;
        create_session(conn, &user.id, now)
    })?;

    log::info!("new {} session for {}", user.role.as_str(), user.name);

    redirect_with_cookie(
        "/dashboard",
        &format!("session={token}; Path=/; HttpOnly; SameSite=Lax"),
    )
}

fn sign_out(req: &Request, state: &AppState) -> ResultResp {
    if let Some(token) = session_token(req) {
        let now = Utc::now().timestamp();
        state
            .db
            .with_conn(|conn| revoke_session(conn, &token, now))?;
    }

    redirect_with_cookie("/", "session=; Path=/; HttpOnly; Max-Age=0")
}

// ---------- pages ----------

fn dashboard(req: &Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };

    let schedules = state.schedules.list();
    let all_issues = state.issues.list();
    let stats = collection_stats(&schedules, &all_issues);

    let own_open_issues = if user.role == Role::Resident {
        state
            .issues
            .list_for_reporter(&user.id)
            .iter()
            .filter(|i| i.status != IssueStatus::Resolved)
            .count()
    } else {
        0
    };

    html_response(dashboard_page(&DashboardVm {
        user,
        stats,
        own_open_issues,
    }))
}

fn schedules(req: &Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };
    if !can_perform(user.role, Action::ViewAllSchedules) {
        return Err(ServerError::Forbidden);
    }

    html_response(schedules_page(&SchedulesVm {
        user,
        schedules: state.schedules.list(),
        notice: query_param(req, "notice"),
    }))
}

fn add_schedule(req: &mut Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };
    if !can_perform(user.role, Action::CreateSchedule) {
        return Err(ServerError::Forbidden);
    }

    // The stores take whatever they're given; field checks live here.
    let form = parse_form(req)?;
    let area = require_field(&form, "area")?.to_string();
    let address = require_field(&form, "address")?.to_string();
    let date = require_field(&form, "date")?.to_string();
    let time = require_field(&form, "time")?.to_string();
    let waste_type = WasteType::parse(require_field(&form, "waste_type")?)
        .ok_or_else(|| ServerError::BadRequest("unknown waste type".into()))?;

    NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ServerError::BadRequest("date must be YYYY-MM-DD".into()))?;
    NaiveTime::parse_from_str(&time, "%H:%M")
        .map_err(|_| ServerError::BadRequest("time must be HH:MM".into()))?;

    state.schedules.add(NewSchedule {
        area,
        address,
        date,
        time,
        waste_type,
    })?;

    redirect("/schedules?notice=Schedule+added")
}

fn update_schedule_status(req: &mut Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };
    if !can_perform(user.role, Action::TransitionSchedule) {
        return Err(ServerError::Forbidden);
    }

    let form = parse_form(req)?;
    let id = require_field(&form, "id")?;
    let status = PickupStatus::parse(require_field(&form, "status")?)
        .filter(|s| *s != PickupStatus::Scheduled)
        .ok_or_else(|| ServerError::BadRequest("status must be collected or missed".into()))?;

    state.schedules.set_status(id, status, &user.id, Utc::now())?;

    match status {
        PickupStatus::Collected => redirect("/collections?notice=Marked+as+collected"),
        _ => redirect("/collections?notice=Marked+as+missed"),
    }
}

fn collections(req: &Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };
    if !can_perform(user.role, Action::TransitionSchedule) {
        return Err(ServerError::Forbidden);
    }

    let now = Local::now().naive_local();
    let mut upcoming: Vec<PickupSchedule> = Vec::new();
    let mut past: Vec<PickupSchedule> = Vec::new();

    for s in state.schedules.list() {
        let due = schedule_datetime(&s);
        let is_upcoming =
            s.status == PickupStatus::Scheduled && due.map(|d| d >= now).unwrap_or(false);
        if is_upcoming {
            upcoming.push(s);
        } else {
            past.push(s);
        }
    }

    upcoming.sort_by_key(|s| schedule_datetime(s).unwrap_or(NaiveDateTime::MIN));
    past.sort_by_key(|s| std::cmp::Reverse(schedule_datetime(s).unwrap_or(NaiveDateTime::MIN)));

    html_response(collections_page(&CollectionsVm {
        user,
        upcoming,
        past,
        notice: query_param(req, "notice"),
    }))
}

fn issues(req: &Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };

    let scope = issue_scope(user.role);
    let issues = match scope {
        IssueScope::All => state.issues.list(),
        IssueScope::OwnOnly => state.issues.list_for_reporter(&user.id),
        IssueScope::Denied => return Err(ServerError::Forbidden),
    };

    // Admins see who filed each report; the lookup can miss for ids
    // whose user row predates a database reset.
    let mut reporter_names: HashMap<String, String> = HashMap::new();
    if scope == IssueScope::All {
        state.db.with_conn(|conn| {
            for issue in &issues {
                if !reporter_names.contains_key(&issue.reported_by) {
                    if let Some(name) = find_user_name(conn, &issue.reported_by)? {
                        reporter_names.insert(issue.reported_by.clone(), name);
                    }
                }
            }
            Ok(())
        })?;
    }

    html_response(issues_page(&IssuesVm {
        user,
        issues,
        reporter_names,
        notice: query_param(req, "notice"),
    }))
}

fn report_issue(req: &mut Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };
    if !can_perform(user.role, Action::CreateIssue) {
        return Err(ServerError::Forbidden);
    }

    let form = parse_form(req)?;
    let new = NewIssue {
        title: require_field(&form, "title")?.to_string(),
        description: require_field(&form, "description")?.to_string(),
        area: require_field(&form, "area")?.to_string(),
        address: require_field(&form, "address")?.to_string(),
        reported_by: user.id.clone(),
    };

    state.issues.add(new, Utc::now())?;

    redirect("/issues?notice=Issue+reported")
}

fn update_issue_status(req: &mut Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };
    if !can_perform(user.role, Action::ResolveIssue) {
        return Err(ServerError::Forbidden);
    }

    let form = parse_form(req)?;
    let id = require_field(&form, "id")?;
    let status = IssueStatus::parse(require_field(&form, "status")?)
        .ok_or_else(|| ServerError::BadRequest("unknown issue status".into()))?;

    state.issues.set_status(id, status, &user.id, Utc::now())?;

    match status {
        IssueStatus::Resolved => redirect("/issues?notice=Issue+resolved"),
        _ => redirect("/issues?notice=Issue+updated"),
    }
}

fn analytics(req: &Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };
    if !can_perform(user.role, Action::ViewAnalytics) {
        return Err(ServerError::Forbidden);
    }

    let stats = collection_stats(&state.schedules.list(), &state.issues.list());

    html_response(analytics_page(&AnalyticsVm { user, stats }))
}

fn guide(req: &Request, state: &AppState) -> ResultResp {
    let Some(user) = current_user(req, state)? else {
        return redirect("/login");
    };

    html_response(guide_page(&user, &waste_guide_items()))
}

// ---------- helpers ----------

/// Resolve the session cookie to a user, if there is a live session.
fn current_user(req: &Request, state: &AppState) -> Result<Option<User>, ServerError> {
    let Some(token) = session_token(req) else {
        return Ok(None);
    };

    let now = Utc::now().timestamp();
    state
        .db
        .with_conn(|conn| load_user_from_session(conn, &token, now))
}

fn session_token(req: &Request) -> Option<String> {
    let cookies = req.headers().get("Cookie")?.to_str().ok()?;
    cookies.split(';').find_map(|part| {
        part.trim()
            .strip_prefix("session=")
            .map(|token| token.to_string())
    })
}

fn query_param(req: &Request, name: &str) -> Option<String> {
    let query = req.uri().query()?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|_| ServerError::BadRequest("could not read request body".into()))?;

    Ok(form_urlencoded::parse(&buf).into_owned().collect())
}

fn require_field<'m>(form: &'m HashMap<String, String>, name: &str) -> Result<&'m str, ServerError> {
    match form.get(name).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServerError::BadRequest(format!("missing field: {name}"))),
    }
}

fn schedule_datetime(s: &PickupSchedule) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", s.date, s.time), "%Y-%m-%d %H:%M").ok()
}
