use crate::config::AppConfig;
use crate::error::Result;
use crate::web::server::build_server;
use rocket::{Build, Rocket};

pub mod api;
pub mod download;
pub mod error;
pub mod frontend;
pub mod server;
pub mod session_cookie;
pub mod session_storage;
pub mod session_view;

pub fn start_servers(config: &AppConfig) -> Result<Rocket<Build>> {
    build_server(config)
}
