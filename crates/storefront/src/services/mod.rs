//! Business logic services for the catalog.
//!
//! # Services
//!
//! - `auth` - Sign-up, sign-in and sign-out against the users collection
//! - `catalog` - Listing, publishing and searching design resources
//! - `session` - The single current-user slot

pub mod auth;
pub mod catalog;
pub mod session;

pub use auth::{AuthError, AuthService};
pub use catalog::CatalogService;
pub use session::SessionManager;
