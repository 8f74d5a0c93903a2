//! Core types for Designi.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod phone;
pub mod role;
pub mod thumbnail;

pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{Phone, PhoneError};
pub use role::UserRole;
pub use thumbnail::{JPEG_DATA_URL_PREFIX, Thumbnail, ThumbnailKind};
