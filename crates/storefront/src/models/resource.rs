//! Design resource domain types.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use designi_core::{ResourceId, Thumbnail, UserId};

/// Number of tags shown on a catalog card.
const CARD_TAG_LIMIT: usize = 3;

/// A published design asset bundle: preview image, named PSD, metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResource {
    /// Millisecond-timestamp id (seeded entries: `1`, `2`, `3`).
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    /// Preview image (data URL, remote URL or bare base64).
    pub thumbnail_data: Thumbnail,
    /// Name of the PSD source. The file itself is never stored.
    pub psd_file_name: String,
    #[serde(with = "iso_millis")]
    pub upload_date: DateTime<Utc>,
    pub author_id: UserId,
    pub tags: Vec<String>,
    /// Declared download counter. Nothing increments it.
    pub downloads: u64,
    pub is_premium: bool,
}

impl DesignResource {
    /// Displayable image source for the preview.
    #[must_use]
    pub fn image_src(&self) -> Cow<'_, str> {
        self.thumbnail_data.src()
    }

    /// The tags shown on a catalog card.
    #[must_use]
    pub fn card_tags(&self) -> &[String] {
        self.tags
            .get(..CARD_TAG_LIMIT)
            .unwrap_or(self.tags.as_slice())
    }

    /// Label of the download button.
    #[must_use]
    pub const fn download_label(&self) -> &'static str {
        if self.is_premium {
            "Baixar Premium"
        } else {
            "Download Grátis"
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix
/// (`2024-05-01T12:30:00.000Z`), the format existing records use.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample() -> DesignResource {
        DesignResource {
            id: ResourceId::new("1718040000000"),
            title: "Banner Black Friday".to_owned(),
            description: "Banner promocional".to_owned(),
            thumbnail_data: Thumbnail::new("/9j/4AAQ"),
            psd_file_name: "banner.psd".to_owned(),
            upload_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            author_id: UserId::new("admin-1"),
            tags: vec!["promo".into(), "banner".into(), "varejo".into(), "sale".into()],
            downloads: 0,
            is_premium: false,
        }
    }

    #[test]
    fn test_stored_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["thumbnailData"], "/9j/4AAQ");
        assert_eq!(value["psdFileName"], "banner.psd");
        assert_eq!(value["uploadDate"], "2024-05-01T12:30:00.000Z");
        assert_eq!(value["authorId"], "admin-1");
        assert_eq!(value["isPremium"], false);
        assert_eq!(value["downloads"], 0);
    }

    #[test]
    fn test_accepts_foreign_offsets() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["uploadDate"] = "2024-05-01T09:30:00-03:00".into();
        let parsed: DesignResource = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.upload_date, sample().upload_date);
    }

    #[test]
    fn test_rejects_garbage_dates() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["uploadDate"] = "yesterday".into();
        assert!(serde_json::from_value::<DesignResource>(value).is_err());
    }

    #[test]
    fn test_presentation_helpers() {
        let mut resource = sample();
        assert_eq!(resource.image_src(), "data:image/jpeg;base64,/9j/4AAQ");
        assert_eq!(resource.card_tags(), ["promo", "banner", "varejo"]);
        assert_eq!(resource.download_label(), "Download Grátis");

        resource.is_premium = true;
        resource.tags.truncate(1);
        assert_eq!(resource.card_tags(), ["promo"]);
        assert_eq!(resource.download_label(), "Baixar Premium");
    }
}
