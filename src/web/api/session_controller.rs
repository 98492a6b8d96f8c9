use crate::web::session_cookie::SessionId;
use crate::web::session_storage::{Sessions, with_session};
use crate::web::session_view::SessionView;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

/// The session of the visitor, as JSON.
/// Unlike the rendered pages, reading it leaves the pending notification in place.
#[get("/session")]
pub async fn get_session(
    sessions: &State<Sessions>,
    session_id: SessionId,
) -> Result<Json<SessionView>, Status> {
    let view = with_session(sessions, session_id.value(), |session| {
        SessionView::for_api(session)
    })?;

    Ok(Json(view))
}
