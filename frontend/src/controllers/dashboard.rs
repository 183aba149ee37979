use interfacing::{PercentageRange, Student, StudentId};

use super::{sign_out, DraftField, Outcome, StudentDraft, ValidationError};
use crate::dialog::{Notice, Prompt};
use crate::router::Route;
use crate::services::Services;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub students: Vec<Student>,
    pub percentage_ranges: Vec<PercentageRange>,
    pub draft: StudentDraft,
    pub loading: bool,
    pub adding: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            percentage_ranges: Vec::new(),
            draft: StudentDraft::default(),
            loading: true,
            adding: false,
            error: None,
        }
    }
}

impl DashboardState {
    pub fn edit_draft(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    /// Folds the student list fetch in. Returns where to go, if anywhere.
    pub fn students_loaded(&mut self, outcome: Outcome<Vec<Student>>) -> Option<Route> {
        self.loading = false;

        match outcome {
            Outcome::Done(students) => {
                self.students = students;
                self.error = None;
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

    /// Marks an add as in flight, unless one already is.
    pub fn begin_add(&mut self) -> bool {
        !std::mem::replace(&mut self.adding, true)
    }

    pub fn student_added(&mut self, outcome: Outcome<Student>) -> Option<Route> {
        self.adding = false;

        match outcome {
            Outcome::Done(student) => {
                self.students.push(student);
                self.draft = StudentDraft::default();
                None
            }
            Outcome::SignedOut => Some(Route::Login),
            Outcome::Failed(_) | Outcome::Aborted => None,
        }
    }

    pub fn student_deleted(&mut self, outcome: Outcome<StudentId>) -> Option<Route> {
        match outcome {
            Outcome::Done(id) => {
                self.students.retain(|student| student.id != id);
                None
            }
            Outcome::SignedOut => Some(Route::Login),
            Outcome::Failed(_) | Outcome::Aborted => None,
        }
    }
}

pub async fn load_students(services: &Services) -> Outcome<Vec<Student>> {
    match services.api.students().await {
        Ok(students) => {
            log::debug!("loaded {} students", students.len());
            Outcome::Done(students)
        }
        Err(e) if e.is_unauthorized() => {
            sign_out(services, Notice::warning("Session Expired", "Please login again.")).await;
            Outcome::SignedOut
        }
        Err(e) => {
            log::error!("Error fetching students: {}", e);
            let message = e.user_message("Failed to fetch students");
            services
                .dialogs
                .notify(Notice::error("Error", message.clone()))
                .await;
            Outcome::Failed(message)
        }
    }
}

/// Creates a student owned by `admin_id` from the draft.
pub async fn add_student(
    services: &Services,
    draft: &StudentDraft,
    admin_id: &str,
) -> Outcome<Student> {
    let payload = match draft.to_payload(admin_id) {
        Ok(payload) => payload,
        Err(e) => {
            let text = match e {
                ValidationError::MissingFields => {
                    "Please fill all fields before adding a student.".to_owned()
                }
                e => e.to_string(),
            };
            services
                .dialogs
                .notify(Notice::warning("Missing Fields", text))
                .await;
            return Outcome::Aborted;
        }
    };

    match services.api.create_student(&payload).await {
        Ok(student) => {
            services
                .dialogs
                .notify(Notice::success(
                    "Student Added!",
                    format!("{} has been added successfully.", student.name),
                ))
                .await;
            Outcome::Done(student)
        }
        Err(e) if e.is_unauthorized() => {
            sign_out(
                services,
                Notice::error("Authentication Failed", "Please login again."),
            )
            .await;
            Outcome::SignedOut
        }
        Err(e) => {
            log::error!("Error adding student: {}", e);
            let message = e.user_message("Failed to save student");
            services
                .dialogs
                .notify(Notice::error("Error", message.clone()))
                .await;
            Outcome::Failed(message)
        }
    }
}

/// Deletes a student once the admin confirms.
pub async fn delete_student(services: &Services, id: StudentId) -> Outcome<StudentId> {
    let confirmed = services
        .dialogs
        .confirm(Prompt::new(
            "Are you sure?",
            "This action cannot be undone!",
        ))
        .await;

    if !confirmed {
        return Outcome::Aborted;
    }

    match services.api.delete_student(id).await {
        Ok(()) => {
            services
                .dialogs
                .notify(Notice::success(
                    "Deleted!",
                    "Student has been deleted successfully.",
                ))
                .await;
            Outcome::Done(id)
        }
        Err(e) if e.is_unauthorized() => {
            sign_out(
                services,
                Notice::error("Authentication Failed", "Please login again."),
            )
            .await;
            Outcome::SignedOut
        }
        Err(e) => {
            log::error!("Error deleting student: {}", e);
            let message = e.user_message("Failed to delete student");
            services
                .dialogs
                .notify(Notice::error("Error", message.clone()))
                .await;
            Outcome::Failed(message)
        }
    }
}
