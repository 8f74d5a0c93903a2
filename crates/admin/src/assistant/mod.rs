//! AI metadata assistant.
//!
//! Given a JPEG preview, suggests a Portuguese title, a short description
//! and a handful of tags. The assistant never blocks an upload: any failure
//! (no API key, network error, error status, unexpected output) is logged
//! and replaced by [`AiAnalysis::fallback`].

mod client;
mod error;
mod types;

use std::future::Future;

pub use client::GeminiClient;
pub use error::{ApiError, ApiErrorResponse, AssistantError};
pub use types::{
    ANALYSIS_PROMPT, AiAnalysis, GenerateContentRequest, GenerateContentResponse, IMAGE_MIME_TYPE,
    ImagePayload,
};

use crate::config::AdminConfig;

/// Something that can suggest metadata for an image.
pub trait MetadataAssistant: Send + Sync {
    /// Suggest metadata for `image`.
    fn analyze(
        &self,
        image: &ImagePayload,
    ) -> impl Future<Output = Result<AiAnalysis, AssistantError>> + Send;
}

impl MetadataAssistant for GeminiClient {
    async fn analyze(&self, image: &ImagePayload) -> Result<AiAnalysis, AssistantError> {
        Self::analyze(self, image).await
    }
}

/// The configured assistant.
#[derive(Clone)]
pub enum Assistant {
    /// Calls the Gemini API.
    Gemini(GeminiClient),
    /// No credential configured; every call fails without touching the
    /// network.
    Offline,
}

impl Assistant {
    /// Build the assistant named by `config`.
    ///
    /// A client that cannot be constructed (for example a key that is not a
    /// valid header value) leaves the assistant offline.
    #[must_use]
    pub fn from_config(config: &AdminConfig) -> Self {
        let Some(gemini) = &config.gemini else {
            return Self::Offline;
        };
        match GeminiClient::new(gemini) {
            Ok(client) => Self::Gemini(client),
            Err(e) => {
                tracing::warn!(error = %e, "Gemini client unavailable, assistant runs offline");
                Self::Offline
            }
        }
    }
}

impl MetadataAssistant for Assistant {
    async fn analyze(&self, image: &ImagePayload) -> Result<AiAnalysis, AssistantError> {
        match self {
            Self::Gemini(client) => client.analyze(image).await,
            Self::Offline => Err(AssistantError::MissingCredential),
        }
    }
}

/// Run `assistant`, substituting the fallback metadata on failure.
pub async fn analyze_or_fallback<A: MetadataAssistant>(
    assistant: &A,
    image: &ImagePayload,
) -> AiAnalysis {
    match assistant.analyze(image).await {
        Ok(analysis) => analysis,
        Err(AssistantError::MissingCredential) => {
            tracing::warn!("no AI API key configured, using fallback metadata");
            AiAnalysis::fallback()
        }
        Err(e) => {
            tracing::warn!(error = %e, "AI analysis failed, using fallback metadata");
            AiAnalysis::fallback()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use url::Url;

    use super::*;
    use crate::config::{DEFAULT_BASE_URL, GeminiConfig};

    struct Fixed(AiAnalysis);

    impl MetadataAssistant for Fixed {
        async fn analyze(&self, _image: &ImagePayload) -> Result<AiAnalysis, AssistantError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl MetadataAssistant for Failing {
        async fn analyze(&self, _image: &ImagePayload) -> Result<AiAnalysis, AssistantError> {
            Err(AssistantError::EmptyResponse)
        }
    }

    fn image() -> ImagePayload {
        ImagePayload::from_base64("/9j/4AAQ")
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let suggestion = AiAnalysis {
            title: "Convite de Casamento".to_string(),
            description: "Elegante e floral.".to_string(),
            tags: vec!["casamento".to_string()],
        };
        let result = analyze_or_fallback(&Fixed(suggestion.clone()), &image()).await;
        assert_eq!(result, suggestion);
    }

    #[tokio::test]
    async fn test_failure_yields_fallback() {
        assert_eq!(
            analyze_or_fallback(&Failing, &image()).await,
            AiAnalysis::fallback()
        );
    }

    #[tokio::test]
    async fn test_offline_assistant() {
        let assistant = Assistant::from_config(&AdminConfig::default());
        assert!(matches!(assistant, Assistant::Offline));
        assert!(matches!(
            assistant.analyze(&image()).await,
            Err(AssistantError::MissingCredential)
        ));
        assert_eq!(
            analyze_or_fallback(&assistant, &image()).await,
            AiAnalysis::fallback()
        );
    }

    #[tokio::test]
    async fn test_unbuildable_client_runs_offline() {
        let config = AdminConfig {
            gemini: Some(GeminiConfig::new(
                SecretString::from("AIzaSyD4xQ9v\nLm3Rt7KpWz2Nb8HcYe1Uf6Gj0o"),
                Url::parse(DEFAULT_BASE_URL).unwrap(),
            )),
            ..AdminConfig::default()
        };
        let assistant = Assistant::from_config(&config);
        assert!(matches!(assistant, Assistant::Offline));
        assert_eq!(
            analyze_or_fallback(&assistant, &image()).await,
            AiAnalysis::fallback()
        );
    }
}
