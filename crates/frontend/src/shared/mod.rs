pub mod api;
pub mod collection;
pub mod components;
pub mod dates;
pub mod draft;
pub mod icons;
pub mod upload;
pub mod validation;
