mod access_tests;
mod auth_flow_tests;
mod issue_tests;
mod schedule_tests;
