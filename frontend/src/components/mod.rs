#![allow(non_upper_case_globals)]

pub mod imports;

mod dashboard;
mod default_styling;
mod edit_student;
mod error_screen;
mod login;
mod register;
mod student_fields;
mod with_session;

pub use dashboard::Dashboard;
pub use default_styling::DefaultStyling;
pub use edit_student::EditStudent;
pub use error_screen::ErrorScreen;
pub use login::Login;
pub use register::Register;
pub use student_fields::StudentFields;
pub use with_session::{with_session, WithSession};
