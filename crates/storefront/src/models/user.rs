//! User domain types.

use serde::{Deserialize, Serialize};

use designi_core::{Email, Phone, UserId, UserRole};

/// A registered account.
///
/// The phone number is the login secret and is stored in clear text. This is
/// a known weakness of the data model, not a security feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Millisecond-timestamp id (seeded admin: `admin-1`).
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, compared case-sensitively.
    pub email: Email,
    /// Masked phone, doubles as the password.
    pub phone: Phone,
    /// Account role.
    pub role: UserRole,
}

impl User {
    /// Whether this user may publish resources.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
