mod dashboard;
mod logout;
mod students_table;

pub use dashboard::Dashboard;
pub use logout::Logout;
pub use students_table::StudentsTable;
