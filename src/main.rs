use std::net::SocketAddr;
use std::sync::Arc;

use astra::Server;

use crate::db::connection::{init_db, Database};
use crate::db::issues::IssueStore;
use crate::db::schedules::ScheduleStore;
use crate::db::storage::SqliteStorage;
use crate::responses::error_to_response;
use crate::router::handle;

mod auth;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

/// Everything a request handler needs. Cheap to clone: the stores share
/// one storage backend over the same database handle.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub schedules: ScheduleStore,
    pub issues: IssueStore,
}

impl AppState {
    pub fn new(db: Database) -> AppState {
        let storage = Arc::new(SqliteStorage::new(db.clone()));
        AppState {
            schedules: ScheduleStore::new(storage.clone()),
            issues: IssueStore::new(storage),
            db,
        }
    }
}

fn main() {
    env_logger::builder().format_timestamp(None).init();

    let db_path = std::env::var("SMARTBIN_DB").unwrap_or_else(|_| "smartbin.sqlite3".into());
    let db = Database::new(db_path);

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    let state = AppState::new(db);

    let addr: SocketAddr = std::env::var("SMARTBIN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".into())
        .parse()
        .unwrap();

    log::info!("starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }
}
