//! Newtype IDs for type-safe entity references.
//!
//! Records are keyed by millisecond-timestamp strings (`"1718040000000"`), but
//! seeded records carry hand-written ids such as `"1"` or `"admin-1"`, so the
//! wrappers hold an arbitrary string rather than a number.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use std::sync::atomic::{AtomicI64, Ordering};

/// Last timestamp handed out by [`next_timestamp_millis`].
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Return the current epoch time in milliseconds, bumped so that every call
/// within this process yields a strictly greater value than the previous one.
#[doc(hidden)]
#[must_use]
pub fn next_timestamp_millis() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let previous = LAST_ISSUED
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now.max(previous + 1)
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()`, `generate()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use designi_core::define_id;
/// define_id!(OrderId);
/// define_id!(InvoiceId);
///
/// let order_id = OrderId::new("42");
/// let invoice_id = InvoiceId::generate();
///
/// // These are different types, so this won't compile:
/// // let _: OrderId = invoice_id;
/// # let _ = (order_id, invoice_id);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh millisecond-timestamp id.
            #[must_use]
            pub fn generate() -> Self {
                Self($crate::types::id::next_timestamp_millis().to_string())
            }

            /// Get the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the id and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(UserId);
define_id!(ResourceId);
