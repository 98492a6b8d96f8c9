use rocket::http::{Cookie, SameSite};
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use rocket::time::Duration;
use std::convert::Infallible;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "Registration-Session";

/// Identifies the session of the visitor.
///
/// It is passed from the browser to the server using a `Registration-Session` private cookie.
/// A visitor without such a cookie is given a new identifier, and the cookie is set on the response.
#[derive(Debug, PartialEq, Clone)]
pub struct SessionId(String);

impl SessionId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Per-request cache, so that a single identifier is created even when the guard runs twice.
struct CachedSessionId(String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionId {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let CachedSessionId(id) = req.local_cache(|| {
            match req.cookies().get_private(SESSION_COOKIE) {
                Some(cookie) => CachedSessionId(cookie.value().to_owned()),
                None => {
                    let id = Uuid::new_v4().to_string();
                    debug!("Opening new session [id: {id}]");
                    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
                        .http_only(true)
                        .same_site(SameSite::Lax)
                        .max_age(Duration::days(1))
                        .build();
                    req.cookies().add_private(cookie);
                    CachedSessionId(id)
                }
            }
        });

        Outcome::Success(SessionId(id.clone()))
    }
}
