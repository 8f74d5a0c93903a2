//! Designi catalog library.
//!
//! Record store, repositories and the services built on them: sessions,
//! authentication, the resource catalog and search.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod search;
pub mod services;
pub mod state;
pub mod store;
