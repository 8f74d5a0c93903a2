//! Designi admin library.
//!
//! Tools for administrators publishing new design resources:
//!
//! - [`assistant`] suggests a title, description and tags for a preview
//!   image, falling back to fixed metadata when the AI service fails
//! - [`upload`] holds the publish form state and turns it into a catalog
//!   entry

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod config;
pub mod upload;
