//! Domain models for the catalog.
//!
//! These are stored verbatim as JSON, so field names follow the stored
//! (camelCase) layout.

pub mod resource;
pub mod user;

pub use resource::DesignResource;
pub use user::User;
