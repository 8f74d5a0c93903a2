//! Designi Core - Shared types library.
//!
//! This crate provides common types used across all Designi components:
//! - `storefront` - Record store, sessions, authentication and catalog browsing
//! - `admin` - AI-assisted resource upload
//! - `cli` - The `designi` command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, emails, phones, roles and thumbnails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
