#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod server;

pub(crate) use http::assert_json_content_type;
pub(crate) use server::{get_test_server, get_test_server_without_tables};
