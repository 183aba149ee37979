mod imports;

mod error_body;
mod login_form;
mod percentage_range;
mod registration_form;
mod student;

pub use error_body::{Detail, DetailItem, ErrorBody};
pub use login_form::{LoginForm, LoginResponse};
pub use percentage_range::PercentageRange;
pub use registration_form::RegistrationForm;
pub use student::{AdminRef, Student, StudentId, StudentPayload};
