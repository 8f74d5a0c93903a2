//! Types for the metadata assistant and the Gemini `generateContent` API.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use designi_core::Thumbnail;

/// MIME type of every image sent for analysis.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Instruction sent with the image.
pub const ANALYSIS_PROMPT: &str = "Analyze this design asset. Provide a creative title (in Portuguese), a short engaging description (in Portuguese), and 5 relevant tags. Return the result strictly as JSON.";

// =============================================================================
// Assistant Types
// =============================================================================

/// A JPEG image as bare base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    base64: String,
}

impl ImagePayload {
    /// Wrap base64 text, dropping a `data:...;base64,` header if present.
    #[must_use]
    pub fn from_base64(data: &str) -> Self {
        let base64 = match data.split_once(',') {
            Some((header, payload)) if header.starts_with("data:") => payload,
            _ => data,
        };
        Self {
            base64: base64.to_owned(),
        }
    }

    /// Encode raw JPEG bytes.
    #[must_use]
    pub fn from_jpeg_bytes(bytes: &[u8]) -> Self {
        Self {
            base64: STANDARD.encode(bytes),
        }
    }

    /// Payload for an inline thumbnail. Remote URLs have no payload.
    #[must_use]
    pub fn from_thumbnail(thumbnail: &Thumbnail) -> Option<Self> {
        thumbnail.base64_payload().map(Self::from_base64)
    }

    /// The base64 text.
    #[must_use]
    pub fn as_base64(&self) -> &str {
        &self.base64
    }
}

/// Suggested metadata for a design asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl AiAnalysis {
    /// Metadata used whenever the AI service cannot answer.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            title: "Novo Design Criativo".to_string(),
            description: "Um recurso de design de alta qualidade pronto para uso.".to_string(),
            tags: vec!["design".to_string(), "criativo".to_string(), "psd".to_string()],
        }
    }
}

// =============================================================================
// Gemini Request Types
// =============================================================================

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// The metadata request for one image.
    #[must_use]
    pub fn analyze_image(image: &ImagePayload) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData(InlineData {
                        mime_type: IMAGE_MIME_TYPE.to_string(),
                        data: image.as_base64().to_string(),
                    }),
                    Part::Text(ANALYSIS_PROMPT.to_string()),
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Schema::analysis(),
            },
        }
    }
}

/// A content turn.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One request part.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    InlineData(InlineData),
    Text(String),
}

/// Inline binary data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Output constraints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Schema,
}

/// Schema type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    Object,
    String,
    Array,
}

/// Subset of the OpenAPI schema accepted as `responseSchema`.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    const fn of(kind: SchemaType) -> Self {
        Self {
            kind,
            properties: BTreeMap::new(),
            items: None,
            required: Vec::new(),
        }
    }

    /// Schema of [`AiAnalysis`].
    #[must_use]
    pub fn analysis() -> Self {
        let mut tags = Self::of(SchemaType::Array);
        tags.items = Some(Box::new(Self::of(SchemaType::String)));

        let mut schema = Self::of(SchemaType::Object);
        schema
            .properties
            .insert("title".to_string(), Self::of(SchemaType::String));
        schema
            .properties
            .insert("description".to_string(), Self::of(SchemaType::String));
        schema.properties.insert("tags".to_string(), tags);
        schema.required = vec![
            "title".to_string(),
            "description".to_string(),
            "tags".to_string(),
        ];
        schema
    }
}

// =============================================================================
// Gemini Response Types
// =============================================================================

/// Response body of `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.text.as_deref())
    }
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// A response part. Only text parts are used.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_payload_strips_data_url_header() {
        let payload = ImagePayload::from_base64("data:image/jpeg;base64,/9j/4AAQ");
        assert_eq!(payload.as_base64(), "/9j/4AAQ");
        assert_eq!(ImagePayload::from_base64("/9j/4AAQ").as_base64(), "/9j/4AAQ");
    }

    #[test]
    fn test_payload_from_bytes_and_thumbnails() {
        let payload = ImagePayload::from_jpeg_bytes(&[0xFF, 0xD8, 0xFF]);
        assert_eq!(payload.as_base64(), "/9j/");

        let inline = Thumbnail::from_jpeg_bytes(&[0xFF, 0xD8, 0xFF]);
        assert_eq!(ImagePayload::from_thumbnail(&inline), Some(payload));

        let remote = Thumbnail::new("https://picsum.photos/400/400?random=1");
        assert_eq!(ImagePayload::from_thumbnail(&remote), None);
    }

    #[test]
    fn test_fallback_triple() {
        let fallback = AiAnalysis::fallback();
        assert_eq!(fallback.title, "Novo Design Criativo");
        assert_eq!(
            fallback.description,
            "Um recurso de design de alta qualidade pronto para uso."
        );
        assert_eq!(fallback.tags, ["design", "criativo", "psd"]);
    }

    #[test]
    fn test_request_wire_format() {
        let request = GenerateContentRequest::analyze_image(&ImagePayload::from_base64("AAAA"));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "parts": [
                        { "inlineData": { "mimeType": "image/jpeg", "data": "AAAA" } },
                        { "text": ANALYSIS_PROMPT }
                    ]
                }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {
                        "type": "OBJECT",
                        "properties": {
                            "description": { "type": "STRING" },
                            "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "title": { "type": "STRING" }
                        },
                        "required": ["title", "description", "tags"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_response_first_text() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "thoughtSignature": "abc" },
                        { "text": "{\"title\":\"T\",\"description\":\"D\",\"tags\":[]}" }
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 10 }
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let analysis: AiAnalysis = serde_json::from_str(response.first_text().unwrap()).unwrap();
        assert_eq!(analysis.title, "T");
        assert!(analysis.tags.is_empty());
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();
        assert_eq!(response.first_text(), None);
    }
}
