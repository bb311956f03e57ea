use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use rusqlite::Connection;

use crate::{
    AppState, build_router,
    stores::sqlite::{SQLiteTransactionStore, create_app_state},
};

/// A server backed by an initialized, empty in-memory database.
pub(crate) fn get_test_server() -> TestServer {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    let state = create_app_state(connection).expect("Could not create app state");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

/// A server whose database has no tables, so every query fails with an SQL error.
pub(crate) fn get_test_server_without_tables() -> TestServer {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)));

    TestServer::try_new(build_router(AppState::new(store))).expect("Could not create test server.")
}
