//! Resource preview image.
//!
//! A thumbnail is stored as a single string that is one of:
//! - a `data:` URL (uploaded previews),
//! - an `http(s)` URL (seeded catalog entries),
//! - bare base64 of a JPEG (legacy records).

use std::borrow::Cow;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Prefix that turns bare JPEG base64 into a displayable data URL.
pub const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// How a [`Thumbnail`] string must be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailKind {
    /// Already a `data:` URL.
    DataUrl,
    /// Remote `http`/`https` URL.
    Remote,
    /// Bare base64 without a header.
    RawBase64,
}

/// Preview image reference for a design resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Thumbnail(String);

impl Thumbnail {
    /// Wrap a stored thumbnail string as-is.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Encode JPEG bytes as a `data:` URL thumbnail.
    #[must_use]
    pub fn from_jpeg_bytes(bytes: &[u8]) -> Self {
        Self(format!("{JPEG_DATA_URL_PREFIX}{}", STANDARD.encode(bytes)))
    }

    /// Classify the stored string.
    #[must_use]
    pub fn kind(&self) -> ThumbnailKind {
        if self.0.starts_with("data:") {
            ThumbnailKind::DataUrl
        } else if self.0.starts_with("http") {
            ThumbnailKind::Remote
        } else {
            ThumbnailKind::RawBase64
        }
    }

    /// Image source usable by a renderer.
    ///
    /// Data and remote URLs are returned unchanged; bare base64 is assumed to
    /// be JPEG and gets the data URL prefix.
    #[must_use]
    pub fn src(&self) -> Cow<'_, str> {
        match self.kind() {
            ThumbnailKind::DataUrl | ThumbnailKind::Remote => Cow::Borrowed(&self.0),
            ThumbnailKind::RawBase64 => Cow::Owned(format!("{JPEG_DATA_URL_PREFIX}{}", self.0)),
        }
    }

    /// The base64 image payload, when the image is embedded.
    ///
    /// For a data URL everything after the first comma is returned. Remote
    /// thumbnails have no embedded payload.
    #[must_use]
    pub fn base64_payload(&self) -> Option<&str> {
        match self.kind() {
            ThumbnailKind::DataUrl => self.0.split_once(',').map(|(_, data)| data),
            ThumbnailKind::RawBase64 => Some(&self.0),
            ThumbnailKind::Remote => None,
        }
    }

    /// Returns the stored string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
