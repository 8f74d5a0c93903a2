//! Publish workflow.
//!
//! An administrator fills an [`UploadDraft`] (optionally pre-filled by the
//! metadata assistant) and [`UploadService::publish`] turns it into a new
//! catalog entry.

mod draft;

use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::instrument;

use designi_core::ResourceId;
use designi_storefront::models::{DesignResource, User};
use designi_storefront::services::CatalogService;
use designi_storefront::store::{KeyValueStore, RecordStore, StoreError};

pub use draft::{Preview, UploadDraft};

use crate::assistant::{ImagePayload, MetadataAssistant, analyze_or_fallback};

/// Errors that can occur when publishing.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Only administrators may publish.
    #[error("only administrators can publish resources")]
    Forbidden,

    /// Required fields are missing.
    #[error("draft is incomplete, missing: {}", .missing.join(", "))]
    Incomplete {
        /// Names of the missing fields.
        missing: Vec<&'static str>,
    },

    /// The catalog could not be written.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Runs the assistant over drafts and publishes them.
pub struct UploadService<'a, S, A> {
    catalog: CatalogService<'a, S>,
    assistant: &'a A,
    save_delay: Duration,
}

impl<'a, S: KeyValueStore, A: MetadataAssistant> UploadService<'a, S, A> {
    /// Create an upload service.
    #[must_use]
    pub const fn new(store: &'a RecordStore<S>, assistant: &'a A, save_delay: Duration) -> Self {
        Self {
            catalog: CatalogService::new(store),
            assistant,
            save_delay,
        }
    }

    /// Fill title, description and tags from the preview.
    ///
    /// Does nothing without a preview. Returns whether the draft changed.
    #[instrument(skip(self, draft))]
    pub async fn analyze(&self, draft: &mut UploadDraft) -> bool {
        let Some(image) = draft
            .preview()
            .and_then(|p| ImagePayload::from_thumbnail(&p.image))
        else {
            return false;
        };
        let analysis = analyze_or_fallback(self.assistant, &image).await;
        draft.apply_analysis(analysis);
        true
    }

    /// Publish `draft` as a new resource by `author`.
    ///
    /// The draft is left untouched so a failed publish can be retried.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Forbidden` unless `author` is an administrator.
    /// Returns `UploadError::Incomplete` if the draft is not ready.
    /// Returns `UploadError::Store` if the catalog cannot be written.
    #[instrument(skip(self, author, draft), fields(author_id = %author.id))]
    pub async fn publish(
        &self,
        author: &User,
        draft: &UploadDraft,
    ) -> Result<DesignResource, UploadError> {
        if !author.is_admin() {
            return Err(UploadError::Forbidden);
        }
        let (true, Some(preview), Some(psd_file_name)) =
            (draft.is_ready(), draft.preview(), draft.psd_file_name())
        else {
            return Err(UploadError::Incomplete {
                missing: draft.missing_fields(),
            });
        };

        tokio::time::sleep(self.save_delay).await;

        let resource = DesignResource {
            id: ResourceId::generate(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            thumbnail_data: preview.image.clone(),
            psd_file_name: psd_file_name.to_owned(),
            upload_date: Utc::now(),
            author_id: author.id.clone(),
            tags: draft.tags().to_vec(),
            downloads: 0,
            is_premium: draft.is_premium,
        };
        self.catalog.publish(resource.clone())?;
        Ok(resource)
    }
}
