use crate::backend::Backend;
use crate::web::frontend::{filters, frontend_controller};
use crate::web::server::Server;
use crate::web::session_storage::Sessions;
use reqwest::Client;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

pub struct FrontendServer {
    sessions: Sessions,
    backend: Backend,
    client: Client,
}

impl FrontendServer {
    pub fn new(sessions: Sessions, backend: Backend, client: Client) -> Self {
        Self {
            sessions,
            backend,
            client,
        }
    }
}

impl Server for FrontendServer {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .manage(self.sessions.clone())
            .manage(self.backend.clone())
            .manage(self.client.clone())
    }

    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .mount(
                "/",
                routes![
                    frontend_controller::index,
                    frontend_controller::validate_key,
                    frontend_controller::select_photo,
                    frontend_controller::submit_form,
                    frontend_controller::toggle_history,
                    frontend_controller::restart,
                    frontend_controller::open_document,
                    frontend_controller::download_document,
                ],
            )
            .mount("/", FileServer::from("./public/static"))
            .register("/", catchers![frontend_controller::not_found])
            .attach(Template::custom(|engines| {
                engines
                    .tera
                    .register_filter("arabic_digits", filters::arabic_digits)
            }))
    }
}
