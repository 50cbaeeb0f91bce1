//! Data contracts shared between the admin frontend and the REST backend.
//!
//! Every entity is a plain record with no behavior beyond draft handling:
//! the backend owns identifiers and timestamps, the frontend edits field
//! drafts and commits them back as full records.

pub mod domain;

pub use domain::common::Record;
