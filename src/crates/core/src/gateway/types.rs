//! Wire records exchanged with the community backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author shown on an announcement card when the backend omits one.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Standard list envelope: `{ "data": [...] }`. An absent `data` field is
/// the same as an empty list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    /// Backend-assigned, opaque to the client (fixtures use numbers, other
    /// deployments may use strings).
    #[serde(default)]
    pub id: Value,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Announcement {
    /// Author as rendered on a card, falling back to the display placeholder.
    pub fn display_author(&self) -> &str {
        self.author
            .as_deref()
            .filter(|author| !author.is_empty())
            .unwrap_or(DEFAULT_AUTHOR)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub id: Value,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl Work {
    /// `author • category` byline; the separator disappears when the work
    /// has no category.
    pub fn byline(&self) -> String {
        match self.category.as_deref().filter(|category| !category.is_empty()) {
            Some(category) => format!("{} • {}", self.author, category),
            None => self.author.clone(),
        }
    }
}

/// Client-side draft of a work submission.
///
/// Serialized with every field present, empty or not; the backend expects
/// the full record. Replaced wholesale by the default after a successful
/// submit; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkDraft {
    pub title: String,
    pub author: String,
    pub email: String,
    pub description: String,
    pub category: String,
    pub file_url: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Author,
    Email,
    Description,
    Category,
    FileUrl,
    ThumbnailUrl,
}

impl DraftField {
    /// Form order, matching the submitted record.
    pub const ALL: [DraftField; 7] = [
        DraftField::Title,
        DraftField::Author,
        DraftField::Email,
        DraftField::Description,
        DraftField::Category,
        DraftField::FileUrl,
        DraftField::ThumbnailUrl,
    ];
}

impl WorkDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Author => &self.author,
            DraftField::Email => &self.email,
            DraftField::Description => &self.description,
            DraftField::Category => &self.category,
            DraftField::FileUrl => &self.file_url,
            DraftField::ThumbnailUrl => &self.thumbnail_url,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Author => &mut self.author,
            DraftField::Email => &mut self.email,
            DraftField::Description => &mut self.description,
            DraftField::Category => &mut self.category,
            DraftField::FileUrl => &mut self.file_url,
            DraftField::ThumbnailUrl => &mut self.thumbnail_url,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_tolerates_absent_data() {
        let envelope: ListEnvelope<Work> = serde_json::from_str("{}").expect("parse");
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn announcement_author_falls_back_to_placeholder() {
        let announcement: Announcement =
            serde_json::from_value(json!({"id": 1, "title": "Solar Still"})).expect("parse");
        assert_eq!(announcement.display_author(), "Admin");
        assert!(announcement.tags.is_empty());

        let named: Announcement =
            serde_json::from_value(json!({"id": 1, "title": "Solar Still", "author": "Budi"}))
                .expect("parse");
        assert_eq!(named.display_author(), "Budi");
    }

    #[test]
    fn byline_omits_separator_without_category() {
        let mut work: Work = serde_json::from_value(json!({
            "id": 9,
            "title": "Roket Air",
            "author": "Tim A",
        }))
        .expect("parse");
        assert_eq!(work.byline(), "Tim A");

        work.category = Some("fisika".to_string());
        assert_eq!(work.byline(), "Tim A • fisika");
    }

    #[test]
    fn draft_serializes_every_field() {
        let value = serde_json::to_value(WorkDraft::default()).expect("serialize");
        let object = value.as_object().expect("object body");
        for key in [
            "title",
            "author",
            "email",
            "description",
            "category",
            "file_url",
            "thumbnail_url",
        ] {
            assert_eq!(object.get(key), Some(&json!("")), "missing field {key}");
        }
    }

    #[test]
    fn draft_field_roundtrip() {
        let mut draft = WorkDraft::default();
        assert!(draft.is_empty());
        draft.set(DraftField::Title, "Roket Air");
        assert_eq!(draft.get(DraftField::Title), "Roket Air");
        assert!(!draft.is_empty());
    }
}
