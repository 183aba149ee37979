//! Typed access to the student API.

mod transport;

pub use transport::{ApiRequest, Body, GlooTransport, Method, RawResponse, Transport, TransportError};

use std::rc::Rc;

use interfacing::{
    ErrorBody, LoginForm, LoginResponse, PercentageRange, RegistrationForm, Student, StudentId,
    StudentPayload,
};
use serde::{de::DeserializeOwned, Serialize};
use url::form_urlencoded;

use crate::conf::ApiConf;
use crate::session::SessionStore;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized { detail: Option<String> },

    #[error("Request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Request error")]
    Transport(#[source] TransportError),

    #[error("Parse error")]
    Parse(#[source] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text shown to the admin: the server's own message when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport(_) => GENERIC_FAILURE.to_owned(),
            _ => self.detail().unwrap_or(fallback).to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    Bearer,
    Anonymous,
}

#[derive(Clone, derivative::Derivative)]
#[derivative(Debug, PartialEq)]
pub struct ApiClient {
    conf: Rc<ApiConf>,
    session: SessionStore,
    #[derivative(Debug = "ignore", PartialEq(compare_with = "Rc::ptr_eq"))]
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(conf: ApiConf, session: SessionStore, transport: Rc<dyn Transport>) -> Self {
        Self {
            conf: Rc::new(conf),
            session,
            transport,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(Method::Get, path, Body::Empty, Auth::Bearer).await?;
        parse(&body)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(Method::Post, path, json(body)?, Auth::Bearer).await?;
        parse(&body)
    }

    // update answers are not read back, the view leaves for the dashboard
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::Put, path, json(body)?, Auth::Bearer)
            .await
            .map(|_| ())
    }

    // delete answers vary between an empty body and a message, neither is needed
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, Body::Empty, Auth::Bearer)
            .await
            .map(|_| ())
    }

    pub async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError> {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form.form_pairs())
            .finish();

        let body = self
            .send(Method::Post, "login", Body::Form(encoded), Auth::Anonymous)
            .await?;
        parse(&body)
    }

    pub async fn register(&self, form: &RegistrationForm) -> Result<(), ApiError> {
        self.send(Method::Post, "admin", json(form)?, Auth::Anonymous)
            .await
            .map(|_| ())
    }

    pub async fn students(&self) -> Result<Vec<Student>, ApiError> {
        self.get("student/all").await
    }

    pub async fn student(&self, id: StudentId) -> Result<Student, ApiError> {
        self.get(&format!("student/{}", id)).await
    }

    pub async fn create_student(&self, payload: &StudentPayload) -> Result<Student, ApiError> {
        self.post("student", payload).await
    }

    pub async fn update_student(
        &self,
        id: StudentId,
        payload: &StudentPayload,
    ) -> Result<(), ApiError> {
        self.put(&format!("student/update/{}", id), payload).await
    }

    pub async fn delete_student(&self, id: StudentId) -> Result<(), ApiError> {
        self.delete(&format!("student/delete/{}", id)).await
    }

    pub async fn percentage_ranges(&self) -> Result<Vec<PercentageRange>, ApiError> {
        self.get("percentage/").await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Body,
        auth: Auth,
    ) -> Result<String, ApiError> {
        let bearer = match auth {
            Auth::Bearer => self.session.read().map(|session| session.token),
            Auth::Anonymous => None,
        };

        let request = ApiRequest {
            method,
            url: self.conf.endpoint(path),
            bearer,
            body,
        };

        log::debug!("{} {}", method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, path, e);
            ApiError::Transport(e)
        })?;

        log::debug!("{} {} status {}", method, path, response.status);

        classify(response)
    }
}

/// Splits a response into its success body or the matching [`ApiError`].
pub fn classify(response: RawResponse) -> Result<String, ApiError> {
    if response.is_success() {
        return Ok(response.body);
    }

    let detail = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message());

    match response.status {
        401 => Err(ApiError::Unauthorized { detail }),
        status => {
            log::warn!("request rejected with status {}: {:?}", status, detail);
            Err(ApiError::Rejected { status, detail })
        }
    }
}

fn json<B: Serialize + ?Sized>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_string(body)
        .map(Body::Json)
        .map_err(ApiError::Parse)
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(ApiError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestBed, LOGIN_OK};
    use claim::*;
    use futures::executor::block_on;
    use secrecy::{ExposeSecret, SecretString};

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_owned(),
        }
    }

    #[test]
    fn classifies_statuses() {
        assert_eq!(assert_ok!(classify(response(201, "{}"))), "{}");

        let unauthorized = assert_err!(classify(response(401, r#"{"detail":"Not authenticated"}"#)));
        assert!(unauthorized.is_unauthorized());
        assert_eq!(unauthorized.detail(), Some("Not authenticated"));

        let rejected = assert_err!(classify(response(500, "<html>oops</html>")));
        assert_matches!(rejected, ApiError::Rejected { status: 500, detail: None });
        assert_eq!(rejected.user_message("Failed to save student"), "Failed to save student");
    }

    #[test]
    fn transport_failures_use_the_generic_message() {
        let error = ApiError::Transport(TransportError("NetworkError".into()));
        assert_eq!(error.user_message("Failed to delete student"), GENERIC_FAILURE);
    }

    #[test]
    fn bearer_is_attached_when_signed_in() {
        let bed = TestBed::signed_in();
        bed.transport.reply(200, "[]");

        assert_ok!(block_on(bed.services.api.percentage_ranges()));

        let request = bed.transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://api.test/percentage/");
        assert_eq!(
            request.bearer.as_ref().map(|token| token.expose_secret().as_str()),
            Some("abc")
        );
    }

    #[test]
    fn no_bearer_without_session() {
        let bed = TestBed::signed_out();
        bed.transport.reply(401, r#"{"detail":"Not authenticated"}"#);

        let error = assert_err!(block_on(bed.services.api.students()));

        assert!(error.is_unauthorized());
        assert_none!(bed.transport.last_request().bearer);
    }

    #[test]
    fn login_is_form_encoded_and_anonymous() {
        let bed = TestBed::signed_in();
        bed.transport.reply(200, LOGIN_OK);

        let form = LoginForm {
            username: "ad min".into(),
            password: SecretString::new("s&cret".into()),
        };
        let response = assert_ok!(block_on(bed.services.api.login(&form)));

        assert_eq!(response.admin_id, "1");
        let request = bed.transport.last_request();
        assert_eq!(request.url, "http://api.test/login");
        assert_eq!(request.body, Body::Form("username=ad+min&password=s%26cret".into()));
        assert_none!(request.bearer);
    }

    #[test]
    fn register_sends_json_without_bearer() {
        let bed = TestBed::signed_in();
        bed.transport.reply(200, r#"{"id":5,"username":"new"}"#);

        let form = RegistrationForm {
            username: "new".into(),
            email: "new@example.com".into(),
            password: SecretString::new("secret1".into()),
        };
        assert_ok!(block_on(bed.services.api.register(&form)));

        let request = bed.transport.last_request();
        assert_eq!(request.url, "http://api.test/admin");
        assert_none!(request.bearer);
        let Body::Json(json) = request.body else {
            panic!("expected a JSON body");
        };
        let json: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(json["password"], "secret1");
        assert_none!(json.get("confirm_password"));
    }

    #[test]
    fn undecodable_success_body_is_a_parse_error() {
        let bed = TestBed::signed_in();
        bed.transport.reply(200, "not json");

        assert_matches!(block_on(bed.services.api.students()), Err(ApiError::Parse(_)));
    }

    #[test]
    fn delete_ignores_the_response_body() {
        let bed = TestBed::signed_in();
        bed.transport.reply(204, "");

        assert_ok!(block_on(bed.services.api.delete_student(9)));
        let request = bed.transport.last_request();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, "http://api.test/student/delete/9");
        assert_eq!(request.body, Body::Empty);
    }

    #[test]
    fn update_puts_json_and_ignores_the_answer() {
        let bed = TestBed::signed_in();
        bed.transport.reply(200, r#"{"message":"updated"}"#);

        let payload = StudentPayload {
            name: "Ada".into(),
            age: 21,
            address: "1 Main St".into(),
            is_active: false,
            percentage_range_id: 2,
            created_id: "1".into(),
        };
        assert_ok!(block_on(bed.services.api.update_student(3, &payload)));

        let request = bed.transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "http://api.test/student/update/3");
        assert_some!(request.bearer);
        assert_matches!(request.body, Body::Json(_));
    }
}
