use crate::web::api::session_controller;
use crate::web::server::Server;
use rocket::{Build, Rocket};

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    /// Reads the sessions managed by the frontend.
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
    }

    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.mount("/api/", routes![session_controller::get_session])
    }
}
