//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type whose [`AppError::report`] captures
//! internal failures to Sentry and whose [`AppError::user_message`] is the
//! only text shown to the person at the keyboard.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::store::StoreError;

/// Notice shown when a write fails.
pub const SAVE_FAILED_MESSAGE: &str = "Não foi possível salvar. Tente novamente.";

/// Notice shown when email and phone match no account.
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Credenciais inválidas. Verifique e-mail e telefone (senha).";

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No user is logged in.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

}

impl AppError {
    /// Whether this error is a failure of the system rather than of the input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Store(_) | Self::Auth(AuthError::Store(_)) | Self::Config(_)
        )
    }

    /// Log the error, capturing internal failures to Sentry.
    pub fn report(&self) {
        if self.is_internal() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Command error"
            );
        } else {
            tracing::debug!(error = %self, "Command rejected");
        }
    }

    /// Message safe to show to the user. Internal details are not leaked.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(_) | Self::Auth(AuthError::Store(_)) => SAVE_FAILED_MESSAGE.to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
                AuthError::UserAlreadyExists => "Usuário já cadastrado.".to_string(),
                AuthError::InvalidPhone(_) => {
                    "O telefone deve estar no formato (xx) xxxxx-xxxx".to_string()
                }
                AuthError::InvalidEmail(_) => "E-mail inválido.".to_string(),
                AuthError::MissingName => "Informe o nome.".to_string(),
                AuthError::Store(_) => SAVE_FAILED_MESSAGE.to_string(),
            },
            Self::Config(err) => format!("Configuração inválida: {err}"),
            Self::NotFound(what) => format!("Não encontrado: {what}"),
            Self::Unauthorized(_) => "Faça login para continuar.".to_string(),
        }
    }
}

/// Set the Sentry user context.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("resource 42".to_string());
        assert_eq!(err.to_string(), "Not found: resource 42");

        let err = AppError::Unauthorized("no session".to_string());
        assert_eq!(err.to_string(), "Unauthorized: no session");
        assert!(!err.is_internal());
    }

    #[test]
    fn test_store_failures_show_save_notice() {
        let err = AppError::from(StoreError::Poisoned);
        assert!(err.is_internal());
        assert_eq!(err.user_message(), SAVE_FAILED_MESSAGE);

        let err = AppError::from(AuthError::Store(StoreError::Poisoned));
        assert!(err.is_internal());
        assert_eq!(err.user_message(), SAVE_FAILED_MESSAGE);
    }

    #[test]
    fn test_auth_messages() {
        let err = AppError::from(AuthError::InvalidCredentials);
        assert!(!err.is_internal());
        assert_eq!(err.user_message(), INVALID_CREDENTIALS_MESSAGE);

        let err = AppError::from(AuthError::InvalidPhone(designi_core::PhoneError::InvalidFormat));
        assert!(err.user_message().contains("(xx) xxxxx-xxxx"));
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::from(StoreError::QuotaExceeded {
            key: "resources".to_string(),
            required: 9000,
            available: 12,
        });
        assert!(!err.user_message().contains("9000"));
    }
}
