use crate::registration::session::Session;
use crate::tools::log_error_and_return;
use cached::{Cached, TimedSizedCache};
use rocket::http::Status;
use std::sync::{Arc, Mutex};

const CACHE_SIZE: usize = 1000;
const SESSION_LIFESPAN_SECONDS: u64 = 60 * 60 * 24;

/// The storage as managed by Rocket. Backend calls running in the background keep a handle on it.
pub type Sessions = Arc<Mutex<SessionStorage>>;

/// A container for the sessions of all visitors. Only 1000 sessions can be stored at a time,
/// and they expire after one day.
#[derive(Debug)]
pub struct SessionStorage {
    sessions: TimedSizedCache<String, Session>,
}

impl SessionStorage {
    /// The session stored under `id`. A blank one is stored first if there is none.
    pub fn get_or_create(&mut self, id: &str) -> &mut Session {
        self.sessions
            .cache_get_or_set_with(id.to_owned(), Session::default)
    }
}

impl Default for SessionStorage {
    fn default() -> Self {
        let sessions = TimedSizedCache::with_size_and_lifespan(CACHE_SIZE, SESSION_LIFESPAN_SECONDS);
        Self { sessions }
    }
}

/// Lock the storage and run `action` on the session of `id`.
/// The lock is released before returning: never call this across an `.await`.
pub fn with_session<T>(
    storage: &Mutex<SessionStorage>,
    id: &str,
    action: impl FnOnce(&mut Session) -> T,
) -> Result<T, Status> {
    let mut storage = storage
        .lock()
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(action(storage.get_or_create(id)))
}
