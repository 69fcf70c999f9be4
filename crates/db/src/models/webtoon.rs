//! Webtoon entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use toonvault_core::types::{DbId, Timestamp};

/// A row from the `webtoons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Webtoon {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub characters: Vec<String>,
    pub created_at: Timestamp,
}

/// Raw create payload as received on the wire.
///
/// Every field is optional here so that validation can report all missing
/// or mistyped fields in one pass instead of rejecting at deserialization.
/// `characters` stays a raw JSON value until [`CreateWebtoon::validate`]
/// has confirmed it is an array.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWebtoon {
    pub title: Option<String>,
    pub description: Option<String>,
    pub characters: Option<serde_json::Value>,
}

/// A validated create payload, ready for insertion.
#[derive(Debug, Clone)]
pub struct WebtoonDraft {
    pub title: String,
    pub description: String,
    pub characters: Vec<String>,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl CreateWebtoon {
    /// Validate the payload, accumulating every failure rather than
    /// stopping at the first one.
    pub fn validate(self) -> Result<WebtoonDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = match self.title {
            Some(t) if !t.is_empty() => Some(t),
            _ => {
                errors.push(FieldError {
                    field: "title",
                    message: "Title is required",
                });
                None
            }
        };

        let description = match self.description {
            Some(d) if !d.is_empty() => Some(d),
            _ => {
                errors.push(FieldError {
                    field: "description",
                    message: "Description is required",
                });
                None
            }
        };

        // An empty array is fine; a scalar or missing field is not.
        let characters = match self
            .characters
            .map(serde_json::from_value::<Vec<String>>)
        {
            Some(Ok(list)) => Some(list),
            _ => {
                errors.push(FieldError {
                    field: "characters",
                    message: "Characters should be an array",
                });
                None
            }
        };

        match (title, description, characters) {
            (Some(title), Some(description), Some(characters)) if errors.is_empty() => {
                Ok(WebtoonDraft {
                    title,
                    description,
                    characters,
                })
            }
            _ => Err(errors),
        }
    }
}
