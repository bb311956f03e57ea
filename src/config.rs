//! Server configuration read from the command line and the environment.

use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

/// The REST API server for the transaction ledger.
///
/// Every option can also be set with the environment variable named in its
/// help text, or in a `.env` file in the working directory.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The port to serve the API from.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// The SQLite database to store transactions in: a file path, optionally
    /// prefixed with `sqlite://`, or `:memory:`.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// A file to append debug level logs to.
    #[arg(long, env = "LOG_PATH")]
    pub log_path: Option<String>,
}

impl Config {
    /// The address to listen on, all interfaces on [Config::port].
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
