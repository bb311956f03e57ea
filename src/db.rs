//! Opening the application database and adding the tables for the domain models.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, transaction::create_transaction_table};

/// Open a SQLite database from a database URL.
///
/// Accepts a plain file path, a path prefixed with `sqlite://` or `sqlite:`,
/// or `:memory:` for a throwaway in-memory database.
///
/// # Errors
/// Returns an [Error::SqlError] if the database file cannot be opened.
pub fn open_connection(database_url: &str) -> Result<Connection, Error> {
    let path = database_path(database_url);

    let connection = if path == ":memory:" {
        Connection::open_in_memory()?
    } else {
        Connection::open(path)?
    };

    Ok(connection)
}

fn database_path(database_url: &str) -> &str {
    database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url)
}

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
/// Returns an error if a table cannot be created or there is some other SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
