pub mod analytics;
pub mod collections;
pub mod dashboard;
pub mod guide;
pub mod home;
pub mod issues;
pub mod login;
pub mod register;
pub mod schedules;

pub use analytics::{analytics_page, AnalyticsVm};
pub use collections::{collections_page, CollectionsVm};
pub use dashboard::{dashboard_page, DashboardVm};
pub use guide::guide_page;
pub use home::home_page;
pub use issues::{issues_page, IssuesVm};
pub use login::login_page;
pub use register::register_page;
pub use schedules::{schedules_page, SchedulesVm};
