//! Command implementations and the CLI error type.

pub mod auth;
pub mod catalog;
pub mod publish;

use std::path::PathBuf;

use thiserror::Error;

use designi_admin::upload::UploadError;
use designi_storefront::config::ConfigError;
use designi_storefront::error::{AppError, SAVE_FAILED_MESSAGE};
use designi_storefront::services::AuthError;
use designi_storefront::store::StoreError;

/// Errors that end a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog, session or auth failure.
    #[error(transparent)]
    App(#[from] AppError),

    /// Publish failure.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// An input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<AuthError> for CliError {
    fn from(e: AuthError) -> Self {
        Self::App(e.into())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::App(e.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::App(e.into())
    }
}

impl CliError {
    /// Log the error, capturing internal failures to Sentry.
    pub fn report(&self) {
        match self {
            Self::App(e) => e.report(),
            Self::Upload(UploadError::Store(_)) => {
                let event_id = sentry::capture_error(self);
                tracing::error!(error = %self, sentry_event_id = %event_id, "Command error");
            }
            Self::Upload(_) | Self::ReadFile { .. } => {
                tracing::debug!(error = %self, "Command rejected");
            }
        }
    }

    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::App(e) => e.user_message(),
            Self::Upload(UploadError::Forbidden) => {
                "Apenas administradores podem publicar recursos.".to_string()
            }
            Self::Upload(UploadError::Incomplete { missing }) => {
                format!("Preencha os campos obrigatórios: {}", missing.join(", "))
            }
            Self::Upload(UploadError::Store(_)) => SAVE_FAILED_MESSAGE.to_string(),
            Self::ReadFile { path, .. } => format!("Não foi possível ler {}", path.display()),
        }
    }
}

/// Read a file named on the command line.
pub(crate) fn read_file(path: &std::path::Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Final path component, as shown to users.
pub(crate) fn file_name(path: &std::path::Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
