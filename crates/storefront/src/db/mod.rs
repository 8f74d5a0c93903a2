//! Collection repositories over the [`RecordStore`](crate::store::RecordStore).
//!
//! # Collections
//!
//! - `users` - registered accounts, seeded with one administrator
//! - `resources` - published design resources, newest first, seeded with a
//!   three-item demo catalog
//!
//! A collection that has never been written (or no longer parses) reads as
//! its seed. The first write persists the seed together with the change.

pub mod resources;
pub mod seed;
pub mod users;

pub use resources::ResourceRepository;
pub use users::UserRepository;
