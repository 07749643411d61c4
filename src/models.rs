pub mod announcement;
pub mod attendance;
pub mod badge;
pub mod chart;
pub mod csv;
pub mod leave;
pub mod list;
pub mod page;
pub mod validate;
