//! Plant domain model, request/response payloads, and the merge-update rules.

use serde::{Deserialize, Serialize};

use crate::types::{PlantId, Timestamp};

// ---------------------------------------------------------------------------
// Duration
// ---------------------------------------------------------------------------

/// Growing duration of a plant.
///
/// Persisted as its string name. [`Duration::parse`] accepts only exact
/// variant names; the storage layer folds anything else to
/// [`Duration::Unknown`] on read instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Duration {
    #[default]
    Unknown,
    Annual,
    Perennial,
}

impl Duration {
    /// Parse an exact variant name. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Unknown" => Some(Self::Unknown),
            "Annual" => Some(Self::Annual),
            "Perennial" => Some(Self::Perennial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Annual => "Annual",
            Self::Perennial => "Perennial",
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Domain record
// ---------------------------------------------------------------------------

/// The persisted plant entity.
///
/// `id` and both timestamps are server-assigned; `created_at` is set once at
/// creation and never changes, `modified_at` moves on every create/update.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    pub id: PlantId,
    pub common_name: String,
    pub scientific_name: String,
    pub age: i32,
    pub duration: Duration,
    pub url: String,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

impl Plant {
    /// Project into the API response shape (timestamps dropped, duration as
    /// its display name).
    pub fn into_response(self) -> PlantResponse {
        PlantResponse {
            id: self.id,
            common_name: self.common_name,
            scientific_name: self.scientific_name,
            duration: self.duration.as_str().to_string(),
            age: self.age,
            url: self.url,
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response payloads
// ---------------------------------------------------------------------------

/// Payload for creating a plant. Every field is required; `duration` is
/// typed, so an undefined variant name fails body deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlantRequest {
    pub common_name: String,
    pub scientific_name: String,
    pub duration: Duration,
    pub age: i32,
    pub url: String,
}

/// Partial update payload. Fields left out (or sent empty, for strings)
/// leave the stored value unchanged.
///
/// `duration` is carried as a raw string so an undefined value can be
/// ignored by the merge instead of failing deserialization. `age` is an
/// explicit option; there is no reserved sentinel value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlantRequest {
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

/// API projection of a [`Plant`]: same fields minus the timestamps, with
/// `duration` serialized as its string name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantResponse {
    pub id: PlantId,
    pub common_name: String,
    pub scientific_name: String,
    pub duration: String,
    pub age: i32,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Merge-update
// ---------------------------------------------------------------------------

/// The incoming value of a string field, or `None` when the field was
/// absent, empty, or whitespace-only (all meaning "leave unchanged").
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Apply a partial update to an existing plant, field by field:
///
/// - string fields overwrite only when the incoming value is non-empty and
///   non-whitespace;
/// - `duration` overwrites only when the incoming string names a defined
///   variant AND differs from the stored value -- an undefined value is
///   never written;
/// - `age` overwrites only when explicitly supplied;
/// - `modified_at` becomes `now`; `id` and `created_at` carry over.
pub fn merge_update(existing: &Plant, update: &UpdatePlantRequest, now: Timestamp) -> Plant {
    let mut merged = existing.clone();

    if let Some(name) = provided(&update.common_name) {
        merged.common_name = name.to_string();
    }

    if let Some(name) = provided(&update.scientific_name) {
        merged.scientific_name = name.to_string();
    }

    if let Some(duration) = update.duration.as_deref().and_then(Duration::parse) {
        if duration != existing.duration {
            merged.duration = duration;
        }
    }

    if let Some(url) = provided(&update.url) {
        merged.url = url.to_string();
    }

    if let Some(age) = update.age {
        merged.age = age;
    }

    merged.modified_at = now;
    merged
}
