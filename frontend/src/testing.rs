use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use interfacing::{AdminRef, PercentageRange, Student, StudentId};
use secrecy::SecretString;

use crate::api::{ApiRequest, RawResponse, Transport, TransportError};
use crate::conf::ApiConf;
use crate::dialog::{Dialogs, Notice, Prompt};
use crate::services::Services;
use crate::session::MemoryPersistence;

pub const LOGIN_OK: &str =
    r#"{"access_token":"abc","admin_id":"1","username":"admin","token_type":"bearer"}"#;

#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.to_owned(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let reply = self.replies.borrow_mut().pop_front();
        let reply = reply.unwrap_or_else(|| {
            panic!("unexpected request {} {}", request.method, request.url)
        });
        self.requests.borrow_mut().push(request);
        reply
    }
}

#[derive(Default)]
pub struct ScriptedDialogs {
    notices: RefCell<Vec<Notice>>,
    prompts: RefCell<Vec<Prompt>>,
    answers: RefCell<VecDeque<bool>>,
}

impl ScriptedDialogs {
    pub fn answer(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn last_notice(&self) -> Notice {
        self.notices
            .borrow()
            .last()
            .cloned()
            .expect("no notice was shown")
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Dialogs for ScriptedDialogs {
    async fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    async fn confirm(&self, prompt: Prompt) -> bool {
        self.prompts.borrow_mut().push(prompt);
        // unscripted prompts are declined
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

pub struct TestBed {
    pub services: Services,
    pub transport: Rc<MockTransport>,
    pub dialogs: Rc<ScriptedDialogs>,
    pub persistence: Rc<MemoryPersistence>,
}

impl TestBed {
    pub fn signed_out() -> Self {
        let transport = Rc::new(MockTransport::default());
        let dialogs = Rc::new(ScriptedDialogs::default());
        let persistence = Rc::new(MemoryPersistence::starting_at(1_700_000_000_000));

        let services = Services::new(
            ApiConf::parse("http://api.test").expect("test base URL is valid"),
            persistence.clone(),
            transport.clone(),
            dialogs.clone(),
        );

        Self {
            services,
            transport,
            dialogs,
            persistence,
        }
    }

    /// Signed in as admin `1` with token `abc`.
    pub fn signed_in() -> Self {
        let bed = Self::signed_out();
        bed.services
            .session
            .save(&SecretString::new("abc".into()), "1", "admin")
            .expect("memory persistence accepts writes");
        bed
    }
}

pub fn student(id: StudentId, name: &str, owner: u64) -> Student {
    Student {
        id,
        name: name.to_owned(),
        age: 20,
        address: "1 Main St".to_owned(),
        is_active: true,
        percentage_range: Some(range(2, "60-70%")),
        admin: Some(AdminRef {
            id: owner,
            username: format!("admin{}", owner),
        }),
    }
}

pub fn range(id: u64, label: &str) -> PercentageRange {
    PercentageRange {
        id,
        label: label.to_owned(),
    }
}

pub fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("test fixtures serialize")
}
