mod backend;
mod config;
mod error;
mod registration;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

use crate::config::AppConfig;
use crate::error::ApplicationError;
use crate::web::start_servers;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let rocket_build = AppConfig::from_args()
        .map_err(ApplicationError::from)
        .and_then(|config| start_servers(&config));
    match rocket_build {
        Ok(rocket_build) => rocket_build,
        Err(error) => {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    }
}
