use crate::backend::{Backend, build_backend};
use crate::config::AppConfig;
use crate::error::Result;
use crate::registration::photo::MAX_PHOTO_SIZE;
use crate::tools::web::build_client;
use crate::web::api::server::ApiServer;
use crate::web::frontend::server::FrontendServer;
use crate::web::session_storage::{SessionStorage, Sessions};
use reqwest::Client;
use rocket::data::{ByteUnit, Limits, ToByteUnit};
use rocket::{Build, Rocket};
use std::sync::{Arc, Mutex};

pub trait Server {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server(config: &AppConfig) -> Result<Rocket<Build>> {
    let backend = build_backend(config)?;
    let client = build_client()?;
    let rocket_build = rocket::build().configure(
        rocket::Config::figment()
            .merge(("port", config.port()))
            .merge(("limits", upload_limits())),
    );

    Ok(mount_servers(rocket_build, backend, client))
}

pub fn mount_servers(rocket_build: Rocket<Build>, backend: Backend, client: Client) -> Rocket<Build> {
    let sessions: Sessions = Arc::new(Mutex::new(SessionStorage::default()));

    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(ApiServer::new()),
        Box::new(FrontendServer::new(sessions, backend, client)),
    ];
    servers.iter().fold(rocket_build, |rocket_build, server| {
        server.mount_routes(server.initialize_managed_states(rocket_build))
    })
}

/// Photos slightly over the maximum size still have to reach the photo intake,
/// which tells the visitor what went wrong.
pub fn upload_limits() -> Limits {
    let photo_limit = ByteUnit::from(MAX_PHOTO_SIZE) + 1.mebibytes();
    Limits::default()
        .limit("file", photo_limit)
        .limit("data-form", photo_limit + 1.mebibytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use rocket::local::asynchronous::Client as LocalClient;
    use std::time::Duration;

    #[test]
    fn should_accept_uploads_over_max_photo_size() {
        let limits = upload_limits();

        assert_eq!(Some(21.mebibytes()), limits.get("file"));
        assert_eq!(Some(22.mebibytes()), limits.get("data-form"));
    }

    #[test]
    fn should_let_each_server_manage_its_states() {
        let sessions: Sessions = Arc::new(Mutex::new(SessionStorage::default()));
        let backend: Backend = Arc::new(MockBackend::new(Duration::ZERO, Duration::ZERO));
        let frontend = FrontendServer::new(sessions, backend, Client::new());

        let api_states = ApiServer::new().initialize_managed_states(rocket::build());
        let frontend_states = frontend.initialize_managed_states(rocket::build());

        assert!(api_states.state::<Sessions>().is_none());
        assert!(frontend_states.state::<Sessions>().is_some());
        assert!(frontend_states.state::<Backend>().is_some());
        assert!(frontend_states.state::<Client>().is_some());
    }

    #[async_test]
    async fn should_configure_server_from_config() {
        let rocket = build_server(&AppConfig::new_test(None)).unwrap();
        let client = LocalClient::untracked(rocket).await.unwrap();

        let config = client.rocket().config();
        assert_eq!(8000, config.port);
        assert_eq!(Some(21.mebibytes()), config.limits.get("file"));
    }
}
