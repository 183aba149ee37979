use interfacing::{PercentageRange, StudentId};

use super::{sign_out, DraftField, Outcome, StudentDraft, ValidationError};
use crate::dialog::Notice;
use crate::router::Route;
use crate::services::Services;

const SESSION_EXPIRED: &str = "Your session has expired. Please login again.";

#[derive(Clone, Debug, PartialEq)]
pub struct EditStudentState {
    pub draft: StudentDraft,
    pub percentage_ranges: Vec<PercentageRange>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl Default for EditStudentState {
    fn default() -> Self {
        Self {
            draft: StudentDraft::default(),
            percentage_ranges: Vec::new(),
            loading: true,
            saving: false,
            error: None,
        }
    }
}

impl EditStudentState {
    pub fn edit_draft(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    pub fn student_loaded(&mut self, outcome: Outcome<StudentDraft>) -> Option<Route> {
        self.loading = false;

        match outcome {
            Outcome::Done(draft) => {
                self.draft = draft;
                None
            }
            Outcome::Failed(message) => {
                self.error = Some(message);
                None
            }
            Outcome::SignedOut => Some(Route::Login),
            Outcome::Aborted => None,
        }
    }

    pub fn percentage_ranges_loaded(
        &mut self,
        outcome: Outcome<Vec<PercentageRange>>,
    ) -> Option<Route> {
        match outcome {
            Outcome::Done(ranges) => {
                self.percentage_ranges = ranges;
                None
            }
            Outcome::SignedOut => Some(Route::Login),
            Outcome::Failed(_) | Outcome::Aborted => None,
        }
    }

    pub fn begin_save(&mut self) -> bool {
        !std::mem::replace(&mut self.saving, true)
    }

    pub fn student_saved(&mut self, outcome: Outcome<()>) -> Option<Route> {
        self.saving = false;

        match outcome {
            Outcome::Done(()) => Some(Route::Dashboard),
            Outcome::SignedOut => Some(Route::Login),
            Outcome::Failed(_) | Outcome::Aborted => None,
        }
    }
}

/// Fetches the student behind the route id, shaped as an editable draft.
pub async fn load_student(services: &Services, id: StudentId) -> Outcome<StudentDraft> {
    match services.api.student(id).await {
        Ok(student) => Outcome::Done(StudentDraft::from(&student)),
        Err(e) if e.is_unauthorized() => {
            sign_out(services, Notice::warning("Session Expired", SESSION_EXPIRED)).await;
            Outcome::SignedOut
        }
        Err(e) => {
            log::error!("Error fetching student {}: {}", id, e);
            let message = e.user_message("Failed to fetch student");
            services
                .dialogs
                .notify(Notice::error("Error", message.clone()))
                .await;
            Outcome::Failed(message)
        }
    }
}

/// Sends the draft as the new state of student `id`, edited by `admin_id`.
pub async fn save_student(
    services: &Services,
    id: StudentId,
    draft: &StudentDraft,
    admin_id: &str,
) -> Outcome<()> {
    let payload = match draft.to_payload(admin_id) {
        Ok(payload) => payload,
        Err(e) => {
            let text = match e {
                ValidationError::MissingFields => "Please fill all fields".to_owned(),
                e => e.to_string(),
            };
            services
                .dialogs
                .notify(Notice::warning("Incomplete Data", text))
                .await;
            return Outcome::Aborted;
        }
    };

    match services.api.update_student(id, &payload).await {
        Ok(()) => {
            services
                .dialogs
                .notify(Notice::success("Success!", "Student updated successfully."))
                .await;
            Outcome::Done(())
        }
        Err(e) if e.is_unauthorized() => {
            sign_out(services, Notice::warning("Session Expired", SESSION_EXPIRED)).await;
            Outcome::SignedOut
        }
        Err(e) => {
            log::error!("Error updating student {}: {}", id, e);
            let message = e.user_message("Failed to update student");
            services
                .dialogs
                .notify(Notice::error("Error", message.clone()))
                .await;
            Outcome::Failed(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Body, Method};
    use crate::testing::{json, student, TestBed};
    use claim::*;
    use futures::executor::block_on;

    fn loaded_state(bed: &TestBed) -> EditStudentState {
        bed.transport.reply(200, &json(&student(3, "Ada", 1)));
        let mut state = EditStudentState::default();
        let outcome = block_on(load_student(&bed.services, 3));
        assert_none!(state.student_loaded(outcome));
        state
    }

    #[test]
    fn mount_maps_record_into_draft() {
        let bed = TestBed::signed_in();

        let state = loaded_state(&bed);

        assert!(!state.loading);
        assert_eq!(state.draft.name, "Ada");
        assert_eq!(state.draft.age, "20");
        assert_eq!(state.draft.percentage_range_id, 2);
        assert_eq!(bed.transport.last_request().url, "http://api.test/student/3");
    }

    #[test]
    fn missing_record_shows_error_screen() {
        let bed = TestBed::signed_in();
        bed.transport.reply(404, r#"{"detail":"Student not found"}"#);
        let mut state = EditStudentState::default();

        let outcome = block_on(load_student(&bed.services, 99));

        assert_none!(state.student_loaded(outcome));
        assert_eq!(state.error.as_deref(), Some("Student not found"));
    }

    #[test]
    fn unauthorized_fetch_acknowledges_then_signs_out() {
        let bed = TestBed::signed_in();
        bed.transport.reply(401, "");
        let mut state = EditStudentState::default();

        let outcome = block_on(load_student(&bed.services, 3));

        assert_eq!(state.student_loaded(outcome), Some(Route::Login));
        assert_eq!(bed.dialogs.last_notice().text, SESSION_EXPIRED);
        assert_none!(bed.services.session.read());
    }

    #[test]
    fn save_puts_payload_and_returns_to_dashboard() {
        let bed = TestBed::signed_in();
        let mut state = loaded_state(&bed);
        state.edit_draft(DraftField::Active(false));
        assert!(state.begin_save());

        bed.transport.reply(200, &json(&student(3, "Ada", 1)));
        let outcome = block_on(save_student(&bed.services, 3, &state.draft, "1"));

        assert_eq!(state.student_saved(outcome), Some(Route::Dashboard));
        assert!(!state.saving);
        let request = bed.transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "http://api.test/student/update/3");
        let Body::Json(body) = request.body else {
            panic!("expected a JSON body");
        };
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["is_active"], false);
        assert_eq!(body["created_id"], "1");
        assert_eq!(bed.dialogs.last_notice().text, "Student updated successfully.");
    }

    #[test]
    fn incomplete_draft_is_not_sent() {
        let bed = TestBed::signed_in();
        let mut state = loaded_state(&bed);
        state.edit_draft(DraftField::Address(" ".into()));
        let requests_before = bed.transport.request_count();

        let outcome = block_on(save_student(&bed.services, 3, &state.draft, "1"));

        assert_eq!(outcome, Outcome::Aborted);
        assert_none!(state.student_saved(outcome));
        assert_eq!(bed.transport.request_count(), requests_before);
        assert_eq!(bed.dialogs.last_notice().title, "Incomplete Data");
    }

    #[test]
    fn rejected_update_stays_on_the_form() {
        let bed = TestBed::signed_in();
        let mut state = loaded_state(&bed);
        bed.transport.reply(403, r#"{"detail":"Not your student"}"#);

        let outcome = block_on(save_student(&bed.services, 3, &state.draft, "1"));

        assert_eq!(outcome, Outcome::Failed("Not your student".into()));
        assert_none!(state.student_saved(outcome));
        assert_some!(bed.services.session.read());
    }

    #[test]
    fn unauthorized_update_signs_out() {
        let bed = TestBed::signed_in();
        let mut state = loaded_state(&bed);
        bed.transport.reply(401, "");

        let outcome = block_on(save_student(&bed.services, 3, &state.draft, "1"));

        assert_eq!(state.student_saved(outcome), Some(Route::Login));
        assert_none!(bed.services.session.read());
    }
}
