pub mod assign_role;
pub mod details;
pub mod form;
pub mod list;

pub use list::StaffPage;
