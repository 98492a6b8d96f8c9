use crate::backend::Backend;
use crate::registration::applicant::ApplicantFields;
use crate::registration::error::RegistrationError;
use crate::registration::error::RegistrationError::{
    MissingPhoto, NoPendingOperation, PhotoTooLarge, UnreadablePhoto,
};
use crate::registration::photo::{Photo, check_selection};
use crate::registration::session::Session;
use crate::registration::step::Step;
use crate::tools::log_message_and_return;
use crate::web::download::{DocumentDownload, fetch_document};
use crate::web::error::WebError;
use crate::web::session_cookie::SessionId;
use crate::web::session_storage::{SessionStorage, Sessions, with_session};
use crate::web::session_view::SessionView;
use dto::document_links::DocumentKind;
use dto::gender::Gender;
use reqwest::Client;
use rocket::form::error::ErrorKind;
use rocket::form::{self, Errors, Form};
use rocket::fs::TempFile;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::tokio::io::AsyncReadExt;
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};
use dto::submission_payload::SubmissionPayload;
use std::pin::pin;
use std::sync::Mutex;

const TITLE: &str = "نموذج التسجيل";

#[derive(FromForm)]
pub struct KeyForm {
    #[field(default = String::new())]
    key: String,
}

#[derive(FromForm)]
pub struct ApplicantForm<'r> {
    #[field(default = String::new())]
    full_name: String,
    #[field(default = String::new())]
    team_number: String,
    #[field(default = String::new())]
    serial_number: String,
    gender: Option<String>,
    photo: form::Result<'r, Option<TempFile<'r>>>,
}

type PhotoField<'r> = form::Result<'r, Option<TempFile<'r>>>;

impl<'r> ApplicantForm<'r> {
    fn into_parts(self) -> (ApplicantFields, PhotoField<'r>) {
        let gender = self
            .gender
            .as_deref()
            .map(str::trim)
            .filter(|gender| !gender.is_empty())
            .and_then(|gender| {
                gender
                    .parse::<Gender>()
                    .map_err(|error| warn!("Ignoring gender: {error}"))
                    .ok()
            });

        (
            ApplicantFields::new(self.full_name, self.team_number, self.serial_number, gender),
            self.photo,
        )
    }
}

/// Render the current step of the visitor.
/// A pending notification is displayed once, then forgotten.
#[get("/")]
pub async fn index(
    sessions: &State<Sessions>,
    session_id: SessionId,
) -> Result<Template, Status> {
    let (template_name, view) = with_session(sessions, session_id.value(), |session| {
        let notification = session.take_notification();
        (
            session.step().template_name(),
            SessionView::for_page(session, notification),
        )
    })?;

    Ok(Template::render(
        template_name,
        context! {
            title: TITLE,
            session: view
        },
    ))
}

#[post("/key", data = "<form>")]
pub async fn validate_key(
    sessions: &State<Sessions>,
    backend: &State<Backend>,
    session_id: SessionId,
    form: Form<KeyForm>,
) -> Result<Redirect, Status> {
    let key = with_session(sessions, session_id.value(), |session| {
        let key = session.begin_key_validation(&form.key);
        or_report(session, key)
    })?;

    if let Some(key) = key {
        spawn_key_validation(sessions.inner().clone(), backend.inner().clone(), session_id, key);
    }

    Ok(Redirect::to(uri!(index)))
}

/// Keep the typed fields and take the attached photo in, without submitting.
#[post("/form/photo", data = "<form>")]
pub async fn select_photo(
    sessions: &State<Sessions>,
    session_id: SessionId,
    form: Result<Form<ApplicantForm<'_>>, Errors<'_>>,
) -> Result<Redirect, Status> {
    let (fields, photo) = match form {
        Ok(form) => form.into_inner().into_parts(),
        Err(errors) => return report_unreadable_form(sessions, &session_id, &errors),
    };
    let selection = read_photo(photo).await;

    with_session(sessions, session_id.value(), |session| {
        let outcome = match selection {
            Some(selection) => store_form(session, fields, Some(selection)),
            None => session.update_fields(fields).and(Err(MissingPhoto)),
        };
        or_report(session, outcome);
    })?;

    Ok(Redirect::to(uri!(index)))
}

/// Keep the typed fields, take an attached photo in, then submit the form.
#[post("/form", data = "<form>")]
pub async fn submit_form(
    sessions: &State<Sessions>,
    backend: &State<Backend>,
    session_id: SessionId,
    form: Result<Form<ApplicantForm<'_>>, Errors<'_>>,
) -> Result<Redirect, Status> {
    let (fields, photo) = match form {
        Ok(form) => form.into_inner().into_parts(),
        Err(errors) => return report_unreadable_form(sessions, &session_id, &errors),
    };
    let selection = read_photo(photo).await;

    let payload = with_session(sessions, session_id.value(), |session| {
        let payload =
            store_form(session, fields, selection).and_then(|_| session.begin_submission());
        or_report(session, payload)
    })?;

    if let Some(payload) = payload {
        spawn_submission(sessions.inner().clone(), backend.inner().clone(), session_id, payload);
    }

    Ok(Redirect::to(uri!(index)))
}

#[post("/history/toggle")]
pub async fn toggle_history(
    sessions: &State<Sessions>,
    session_id: SessionId,
) -> Result<Redirect, Status> {
    with_session(sessions, session_id.value(), Session::toggle_history)?;

    Ok(Redirect::to(uri!(index)))
}

#[post("/restart")]
pub async fn restart(
    sessions: &State<Sessions>,
    session_id: SessionId,
) -> Result<Redirect, Status> {
    with_session(sessions, session_id.value(), |session| {
        let restart = session.restart();
        or_report(session, restart);
    })?;

    Ok(Redirect::to(uri!(index)))
}

/// Send the browser to the document itself.
#[get("/documents/<slot>")]
pub async fn open_document(
    sessions: &State<Sessions>,
    session_id: SessionId,
    slot: &str,
) -> Result<Redirect, Status> {
    let kind = DocumentKind::from_slot(slot).ok_or(Status::NotFound)?;
    let document = with_session(sessions, session_id.value(), |session| session.document(kind))?
        .map_err(log_message_and_return("Can't open document", Status::NotFound))?;

    Ok(Redirect::to(document.url().clone()))
}

/// Fetch the document and serve it as an attachment named after the applicant.
#[get("/documents/<slot>/download")]
pub async fn download_document(
    sessions: &State<Sessions>,
    client: &State<Client>,
    session_id: SessionId,
    slot: &str,
) -> Result<DocumentDownload, Status> {
    let kind = DocumentKind::from_slot(slot).ok_or(Status::NotFound)?;
    let document = with_session(sessions, session_id.value(), |session| session.document(kind))?
        .map_err(log_message_and_return("Can't download document", Status::NotFound))?;

    let content = fetch_document(client, document.url())
        .await
        .map_err(|error| match error {
            WebError::NotFound => Status::NotFound,
            _ => Status::BadGateway,
        })?;

    Ok(DocumentDownload::new(content, document.filename()))
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            title: TITLE,
            uri: req.uri()
        },
    )
}

/// The visitor is redirected right away and watches the progress until the backend answers.
fn spawn_key_validation(sessions: Sessions, backend: Backend, session_id: SessionId, key: String) {
    rocket::tokio::spawn(async move {
        let outcome = backend.validate_key(&key).await;
        finish_operation(&sessions, &session_id, |session| {
            session.finish_key_validation(outcome)
        });
    });
}

fn spawn_submission(
    sessions: Sessions,
    backend: Backend,
    session_id: SessionId,
    payload: SubmissionPayload,
) {
    rocket::tokio::spawn(async move {
        let outcome = backend.submit_form(&payload).await;
        finish_operation(&sessions, &session_id, |session| session.finish_submission(outcome));
    });
}

fn finish_operation(
    sessions: &Mutex<SessionStorage>,
    session_id: &SessionId,
    finish: impl FnOnce(&mut Session) -> Result<Step, RegistrationError>,
) {
    let stored = with_session(sessions, session_id.value(), |session| match finish(session) {
        Err(NoPendingOperation) => warn!(
            "Dropping backend outcome, no operation pending [session: {}]",
            session_id.value()
        ),
        step => {
            or_report(session, step);
        }
    });
    if let Err(status) = stored {
        error!("Backend outcome lost [status: {status}]");
    }
}

/// Show the error to the visitor, if any.
fn or_report<T>(session: &mut Session, result: Result<T, RegistrationError>) -> Option<T> {
    result.map_err(|error| session.report(&error)).ok()
}

fn store_form(
    session: &mut Session,
    fields: ApplicantFields,
    selection: Option<Result<Photo, RegistrationError>>,
) -> Result<(), RegistrationError> {
    session.update_fields(fields)?;
    match selection {
        Some(selection) => session.select_photo(selection),
        None => Ok(()),
    }
}

/// The whole form is lost when the upload exceeds the limits: only the error can be shown.
fn report_unreadable_form(
    sessions: &Mutex<SessionStorage>,
    session_id: &SessionId,
    errors: &Errors<'_>,
) -> Result<Redirect, Status> {
    let error = photo_error(errors);
    with_session(sessions, session_id.value(), |session| session.report(&error))?;

    Ok(Redirect::to(uri!(index)))
}

async fn read_photo(photo: PhotoField<'_>) -> Option<Result<Photo, RegistrationError>> {
    match photo {
        Ok(None) => None,
        Ok(Some(file)) if is_left_blank(&file) => None,
        Ok(Some(file)) => Some(take_photo(&file).await),
        Err(errors) => Some(Err(photo_error(&errors))),
    }
}

/// Browsers send an empty nameless part when the file input is left blank.
fn is_left_blank(file: &TempFile<'_>) -> bool {
    file.len() == 0 && file.name().is_none_or(str::is_empty)
}

fn photo_error(errors: &Errors<'_>) -> RegistrationError {
    if errors
        .iter()
        .any(|error| matches!(error.kind, ErrorKind::InvalidLength { .. }))
    {
        PhotoTooLarge
    } else {
        error!("Can't receive photo\n{errors:#?}");
        UnreadablePhoto
    }
}

async fn take_photo(file: &TempFile<'_>) -> Result<Photo, RegistrationError> {
    let mime_type = file
        .content_type()
        .map(|content_type| format!("{}/{}", content_type.top(), content_type.sub()))
        .unwrap_or_default()
        .to_lowercase();
    check_selection(&mime_type, file.len())?;

    let reader = file
        .open()
        .await
        .map_err(log_message_and_return("Can't open photo", UnreadablePhoto))?;
    let mut reader = pin!(reader);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(log_message_and_return("Can't read photo", UnreadablePhoto))?;

    Photo::accept(bytes, &mime_type)
}

#[cfg(test)]
mod tests {
    use crate::backend::mock::{MockBackend, UNUSED_KEY};
    use crate::backend::tests::RecordingBackend;
    use crate::registration::error::RegistrationError::{
        EmptyKey, MissingGender, MissingPhoto, PhotoTooLarge, UnsupportedPhotoType,
    };
    use crate::registration::photo::MAX_PHOTO_SIZE;
    use crate::tools::test::tests::{
        Attachment, multipart_body, post_key, read_session, test_client, wait_until_idle,
    };
    use crate::web::session_cookie::SESSION_COOKIE;
    use dto::document_links::DocumentLinks;
    use dto::history_record::HistoryRecord;
    use dto::key_validation::KeyValidation;
    use dto::rank::Rank;
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PNG: Attachment<'static> = ("photo.png", "image/png", b"hello");
    const BLANK_FILE_INPUT: Attachment<'static> = ("", "application/octet-stream", b"");

    fn mock_backend() -> MockBackend {
        MockBackend::new(Duration::ZERO, Duration::ZERO)
    }

    fn leader_fields<'a>(gender: &'a str) -> Vec<(&'a str, &'a str)> {
        vec![
            ("full_name", "محمد أحمد"),
            ("team_number", "5"),
            ("serial_number", "101"),
            ("gender", gender),
        ]
    }

    async fn post_multipart(
        client: &Client,
        uri: &'static str,
        fields: &[(&str, &str)],
        photo: Option<Attachment<'_>>,
    ) -> Status {
        let (content_type, body) = multipart_body(fields, photo);
        let status = client
            .post(uri)
            .header(content_type)
            .body(body)
            .dispatch()
            .await
            .status();
        wait_until_idle(client).await;
        status
    }

    /// A used key whose only record has a certificate hosted on `host`.
    fn used_key_backend(host: &str) -> RecordingBackend {
        RecordingBackend::answering_key_validation(Ok(
            KeyValidation::new(
                true,
                Some(Rank::Scout),
                true,
                vec![HistoryRecord::new(
                    "abcdef".to_owned(),
                    "خالد علي".to_owned(),
                    DocumentLinks::new(Some(format!("{host}/pdf1")), None, None),
                    "2025/04/05".to_owned(),
                    Some(Rank::Scout),
                    Some("7".to_owned()),
                    Some("103".to_owned()),
                    None,
                )],
            ),
        ))
    }

    #[async_test]
    async fn should_render_key_step_for_new_visitor() {
        let client = test_client(mock_backend()).await;

        let response = client.get("/").dispatch().await;

        assert_eq!(Status::Ok, response.status());
        assert!(response.cookies().get(SESSION_COOKIE).is_some());
        let page = response.into_string().await.unwrap();
        assert!(page.contains("dir=\"rtl\""));
        assert!(page.contains("name=\"key\""));
    }

    #[async_test]
    async fn should_move_to_form_with_unused_key() {
        let client = test_client(mock_backend()).await;

        let response = client
            .post("/key")
            .header(ContentType::Form)
            .body(format!("key={UNUSED_KEY}"))
            .dispatch()
            .await;

        assert_eq!(Status::SeeOther, response.status());
        assert_eq!(Some("/"), response.headers().get_one("Location"));
        let session = wait_until_idle(&client).await;
        assert_eq!("form", session["step"]);
        assert_eq!("قائد", session["rank"]);
        assert_eq!(true, session["shows_gender"]);
        assert_eq!(true, session["shows_history"]);
        assert_eq!(false, session["loading"]);
        let page = client.get("/").dispatch().await.into_string().await.unwrap();
        assert!(page.contains("name=\"full_name\""));
        assert!(page.contains("name=\"gender\""));
        assert!(page.contains("name=\"photo\""));
    }

    #[async_test]
    async fn should_show_newest_documents_with_used_key() {
        let client = test_client(mock_backend()).await;

        post_key(&client, "abcdef").await;

        let session = read_session(&client).await;
        assert_eq!("result", session["step"]);
        assert_eq!("خالد علي", session["applicant"]["full_name"]);
        assert_eq!(2, session["documents"].as_array().unwrap().len());
        let page = client.get("/").dispatch().await.into_string().await.unwrap();
        assert!(page.contains("خالد علي"));
        assert!(page.contains("/documents/pdf1/download"));
        assert!(!page.contains("/documents/pdf3"));
    }

    #[async_test]
    async fn should_not_call_backend_with_empty_key() {
        let backend = RecordingBackend::answering_key_validation(Ok(KeyValidation::invalid()));
        let validated_keys = backend.validated_keys.clone();
        let client = test_client(backend).await;

        post_key(&client, "   ").await;

        let session = read_session(&client).await;
        assert_eq!("key", session["step"]);
        assert_eq!(EmptyKey.to_string(), session["error_message"]);
        assert!(validated_keys.lock().await.is_empty());
    }

    #[async_test]
    async fn should_stay_on_key_step_with_invalid_key() {
        let client = test_client(RecordingBackend::answering_key_validation(Ok(
            KeyValidation::invalid(),
        )))
        .await;

        post_key(&client, "wrong").await;

        let session = read_session(&client).await;
        assert_eq!("key", session["step"]);
        assert_eq!("wrong", session["access_key"]);
        let page = client.get("/").dispatch().await.into_string().await.unwrap();
        assert!(page.contains("المفتاح غير صحيح"));
    }

    #[async_test]
    async fn should_submit_leader_form() {
        let client = test_client(mock_backend()).await;
        post_key(&client, UNUSED_KEY).await;

        let status = post_multipart(&client, "/form", &leader_fields("قائدة"), Some(PNG)).await;

        assert_eq!(Status::SeeOther, status);
        let session = read_session(&client).await;
        assert_eq!("result", session["step"]);
        assert_eq!(3, session["documents"].as_array().unwrap().len());
        assert_eq!("success", session["notification"]["level"]);
        let page = client.get("/").dispatch().await.into_string().await.unwrap();
        assert!(page.contains("تم إنشاء الملفات بنجاح"));
        let page = client.get("/").dispatch().await.into_string().await.unwrap();
        assert!(!page.contains("تم إنشاء الملفات بنجاح"));
    }

    #[async_test]
    async fn should_show_progress_while_key_is_validated() {
        let backend = MockBackend::new(Duration::from_millis(500), Duration::ZERO);
        let client = test_client(backend).await;

        let response = client
            .post("/key")
            .header(ContentType::Form)
            .body(format!("key={UNUSED_KEY}"))
            .dispatch()
            .await;

        assert_eq!(Status::SeeOther, response.status());
        let page = client.get("/").dispatch().await.into_string().await.unwrap();
        assert!(page.contains("http-equiv=\"refresh\""));
        assert!(page.contains("class=\"progress\""));
        assert!(page.contains("disabled"));
        assert_eq!(true, read_session(&client).await["loading"]);
        assert_eq!("form", wait_until_idle(&client).await["step"]);
    }

    #[async_test]
    async fn should_show_progress_while_form_is_submitted() {
        let backend = MockBackend::new(Duration::ZERO, Duration::from_millis(500));
        let client = test_client(backend).await;
        post_key(&client, UNUSED_KEY).await;
        let (content_type, body) = multipart_body(&leader_fields("قائدة"), Some(PNG));

        client
            .post("/form")
            .header(content_type)
            .body(body)
            .dispatch()
            .await;

        let page = client.get("/").dispatch().await.into_string().await.unwrap();
        assert!(page.contains("class=\"progress\""));
        assert!(page.contains("disabled"));
        assert_eq!("result", wait_until_idle(&client).await["step"]);
    }

    #[async_test]
    async fn should_keep_previewed_photo_when_file_input_is_left_blank() {
        let client = test_client(mock_backend()).await;
        post_key(&client, UNUSED_KEY).await;
        post_multipart(&client, "/form/photo", &leader_fields(""), Some(PNG)).await;

        let blank = Some(BLANK_FILE_INPUT);
        post_multipart(&client, "/form", &leader_fields("قائد"), blank).await;

        let session = read_session(&client).await;
        assert_eq!("result", session["step"]);
        assert_eq!(true, session["has_photo"]);
        assert_eq!("success", session["notification"]["level"]);
    }

    #[async_test]
    async fn should_ask_for_photo_when_previewing_blank_file_input() {
        let client = test_client(mock_backend()).await;
        post_key(&client, UNUSED_KEY).await;
        post_multipart(&client, "/form/photo", &leader_fields(""), Some(PNG)).await;

        let blank = Some(BLANK_FILE_INPUT);
        post_multipart(&client, "/form/photo", &leader_fields(""), blank).await;

        let session = read_session(&client).await;
        assert_eq!(true, session["has_photo"]);
        assert_eq!(MissingPhoto.to_string(), session["notification"]["message"]);
    }

    #[async_test]
    async fn should_not_submit_incomplete_form() {
        let backend = RecordingBackend::answering_key_validation(Ok(KeyValidation::new(
            true,
            Some(Rank::Leader),
            false,
            vec![],
        )));
        let submitted_payloads = backend.submitted_payloads.clone();
        let client = test_client(backend).await;
        post_key(&client, UNUSED_KEY).await;

        post_multipart(&client, "/form", &leader_fields(""), Some(PNG)).await;

        let session = read_session(&client).await;
        assert_eq!("form", session["step"]);
        assert_eq!(MissingGender.to_string(), session["notification"]["message"]);
        assert_eq!("محمد أحمد", session["applicant"]["full_name"]);
        assert_eq!(true, session["has_photo"]);
        assert!(submitted_payloads.lock().await.is_empty());
    }

    #[async_test]
    async fn should_preview_selected_photo() {
        let client = test_client(mock_backend()).await;
        post_key(&client, UNUSED_KEY).await;

        post_multipart(&client, "/form/photo", &leader_fields(""), Some(PNG)).await;

        let session = read_session(&client).await;
        assert_eq!(true, session["has_photo"]);
        assert_eq!("5", session["applicant"]["team_number"]);
        let page = client.get("/").dispatch().await.into_string().await.unwrap();
        assert!(page.contains("base64,aGVsbG8="));
    }

    #[async_test]
    async fn should_reject_unsupported_photo() {
        let client = test_client(mock_backend()).await;
        post_key(&client, UNUSED_KEY).await;
        post_multipart(&client, "/form/photo", &leader_fields(""), Some(PNG)).await;

        post_multipart(
            &client,
            "/form/photo",
            &leader_fields(""),
            Some(("photo.gif", "image/gif", &b"GIF89a"[..])),
        )
        .await;

        let session = read_session(&client).await;
        assert_eq!(false, session["has_photo"]);
        assert_eq!(
            UnsupportedPhotoType.to_string(),
            session["notification"]["message"]
        );
    }

    #[async_test]
    async fn should_reject_too_large_photo() {
        let client = test_client(mock_backend()).await;
        post_key(&client, UNUSED_KEY).await;
        let content = vec![0u8; MAX_PHOTO_SIZE as usize + 1];

        post_multipart(
            &client,
            "/form/photo",
            &leader_fields(""),
            Some(("photo.jpg", "image/jpeg", content.as_slice())),
        )
        .await;

        let session = read_session(&client).await;
        assert_eq!(false, session["has_photo"]);
        assert_eq!(PhotoTooLarge.to_string(), session["notification"]["message"]);
    }

    #[async_test]
    async fn should_toggle_history() {
        let client = test_client(mock_backend()).await;
        post_key(&client, UNUSED_KEY).await;

        client.post("/history/toggle").dispatch().await;

        assert_eq!(true, read_session(&client).await["history_open"]);
        let page = client.get("/").dispatch().await.into_string().await.unwrap();
        assert!(page.contains("أحمد علي"));
    }

    #[async_test]
    async fn should_restart() {
        let client = test_client(mock_backend()).await;
        post_key(&client, "abcdef").await;

        let response = client.post("/restart").dispatch().await;

        assert_eq!(Status::SeeOther, response.status());
        let session = read_session(&client).await;
        assert_eq!("key", session["step"]);
        assert_eq!("", session["access_key"]);
        assert_eq!("", session["applicant"]["full_name"]);
        assert_eq!(serde_json::Value::Null, session["rank"]);
        assert!(session["documents"].as_array().unwrap().is_empty());
        assert!(session["history"].as_array().unwrap().is_empty());
    }

    #[async_test]
    async fn should_open_document() {
        let client = test_client(mock_backend()).await;
        post_key(&client, "abcdef").await;

        let response = client.get("/documents/pdf2").dispatch().await;

        assert_eq!(Status::SeeOther, response.status());
        assert_eq!(
            Some("https://example.com/pdf2"),
            response.headers().get_one("Location")
        );
    }

    #[async_test]
    async fn should_not_open_missing_document() {
        let client = test_client(mock_backend()).await;
        post_key(&client, "abcdef").await;

        assert_eq!(
            Status::NotFound,
            client.get("/documents/pdf3").dispatch().await.status()
        );
        assert_eq!(
            Status::NotFound,
            client.get("/documents/pdf9").dispatch().await.status()
        );
    }

    #[async_test]
    async fn should_download_document() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pdf1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4".to_vec()))
            .mount(&mock_server)
            .await;
        let client = test_client(used_key_backend(&mock_server.uri())).await;
        post_key(&client, "abcdef").await;

        let response = client.get("/documents/pdf1/download").dispatch().await;

        assert_eq!(Status::Ok, response.status());
        assert_eq!(Some(ContentType::PDF), response.content_type());
        assert!(
            response
                .headers()
                .get_one("Content-Disposition")
                .unwrap()
                .starts_with("attachment;")
        );
        assert_eq!(b"%PDF-1.4".to_vec(), response.into_bytes().await.unwrap());
    }

    #[async_test]
    async fn should_fail_to_download_when_host_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        let client = test_client(used_key_backend(&mock_server.uri())).await;
        post_key(&client, "abcdef").await;

        let response = client.get("/documents/pdf1/download").dispatch().await;

        assert_eq!(Status::BadGateway, response.status());
    }

    #[async_test]
    async fn should_render_404_page() {
        let client = test_client(mock_backend()).await;

        let response = client.get("/unknown/page").dispatch().await;

        assert_eq!(Status::NotFound, response.status());
        assert!(response.into_string().await.unwrap().contains("unknown"));
    }
}
