//! Brazilian mobile phone number, which doubles as the account secret.
//!
//! The stored form is always the masked `(xx) xxxxx-xxxx` string. Login
//! compares that string literally; there is no hashing.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Mask template: `#` stands for one ASCII digit.
const MASK: &str = "(##) #####-####";

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// Input does not match `(xx) xxxxx-xxxx`.
    #[error("phone must match the format (xx) xxxxx-xxxx")]
    InvalidFormat,
}

/// A phone number in masked form.
///
/// ```
/// use designi_core::Phone;
///
/// assert_eq!(Phone::mask("11987654321"), "(11) 98765-4321");
/// assert!(Phone::parse("(11) 98765-4321").is_ok());
/// assert!(Phone::parse("11987654321").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Length of a fully masked number.
    pub const MASKED_LENGTH: usize = MASK.len();

    /// Parse an already-masked phone number.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::InvalidFormat`] unless the input matches
    /// `(xx) xxxxx-xxxx` exactly.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if Self::is_masked(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(PhoneError::InvalidFormat)
        }
    }

    /// Whether `s` matches the mask exactly.
    #[must_use]
    pub fn is_masked(s: &str) -> bool {
        s.chars().count() == MASK.len()
            && s.chars().zip(MASK.chars()).all(|(c, m)| match m {
                '#' => c.is_ascii_digit(),
                _ => c == m,
            })
    }

    /// Apply the mask to free-form input as the user types.
    ///
    /// Non-digits are dropped, separators are inserted before the 1st, 3rd
    /// and 8th digit, and the result is cut at [`Self::MASKED_LENGTH`].
    #[must_use]
    pub fn mask(input: &str) -> String {
        let mut formatted = String::with_capacity(Self::MASKED_LENGTH);
        for (i, digit) in input.chars().filter(char::is_ascii_digit).enumerate() {
            match i {
                0 => formatted.push('('),
                2 => formatted.push_str(") "),
                7 => formatted.push('-'),
                _ => {}
            }
            formatted.push(digit);
        }
        formatted.truncate(Self::MASKED_LENGTH);
        formatted
    }

    /// Wrap a value already known to be valid, such as a built-in record.
    ///
    /// No validation is performed.
    #[must_use]
    pub fn new_unchecked(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the masked number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
