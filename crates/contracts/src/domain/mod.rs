pub mod common;
pub mod contacts;
pub mod inventory;
pub mod staff;
pub mod users;
