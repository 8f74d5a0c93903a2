//! Publish form state.

use designi_core::Thumbnail;

use crate::assistant::AiAnalysis;

/// The JPEG preview attached to a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Original file name.
    pub file_name: String,
    /// The image as a `data:image/jpeg;base64,` URL.
    pub image: Thumbnail,
}

/// An in-progress upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub title: String,
    pub description: String,
    pub is_premium: bool,
    tags: Vec<String>,
    preview: Option<Preview>,
    psd_file_name: Option<String>,
}

impl UploadDraft {
    /// An empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the JPEG preview, replacing any previous one.
    pub fn attach_preview(&mut self, file_name: impl Into<String>, jpeg: &[u8]) {
        self.preview = Some(Preview {
            file_name: file_name.into(),
            image: Thumbnail::from_jpeg_bytes(jpeg),
        });
    }

    /// Remove the preview.
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    #[must_use]
    pub const fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Record the PSD source. Only its name is kept.
    pub fn attach_psd(&mut self, file_name: impl Into<String>) {
        self.psd_file_name = Some(file_name.into());
    }

    #[must_use]
    pub fn psd_file_name(&self) -> Option<&str> {
        self.psd_file_name.as_deref()
    }

    /// Overwrite title, description and tags with a suggestion.
    pub fn apply_analysis(&mut self, analysis: AiAnalysis) {
        self.title = analysis.title;
        self.description = analysis.description;
        self.tags = analysis.tags;
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add a tag. Blank input and exact duplicates are ignored.
    ///
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, input: &str) -> bool {
        let tag = input.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    /// Remove all tags.
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Remove every tag equal to `tag`.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Names of the required fields still missing.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.preview.is_none() {
            missing.push("preview");
        }
        if self.psd_file_name.is_none() {
            missing.push("psd");
        }
        missing
    }

    /// Whether the draft has a title, a preview and a PSD.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
