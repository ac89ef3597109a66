//! Row model for the `plants` table.

use sqlx::FromRow;
use uuid::Uuid;

use planttracker_core::plant::{Duration, Plant};
use planttracker_core::types::Timestamp;

use crate::error::DbError;

/// A row from the `plants` table, exactly as stored. The id is kept as a
/// string (the table's primary key type) and `duration` as its string name.
#[derive(Debug, Clone, FromRow)]
pub struct PlantRow {
    pub id: String,
    pub common_name: String,
    pub scientific_name: String,
    pub age: i32,
    pub duration: String,
    pub url: String,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

impl PlantRow {
    /// Convert into the domain record.
    ///
    /// An unparseable id is a mapping error; a duration string that names no
    /// variant folds to [`Duration::Unknown`] rather than failing the read.
    pub fn into_plant(self) -> Result<Plant, DbError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DbError::Mapping(format!("invalid stored plant id {:?}: {e}", self.id)))?;

        let duration = Duration::parse(&self.duration).unwrap_or_else(|| {
            tracing::warn!(
                plant_id = %self.id,
                stored = %self.duration,
                "unknown stored duration value, folding to Unknown",
            );
            Duration::Unknown
        });

        Ok(Plant {
            id,
            common_name: self.common_name,
            scientific_name: self.scientific_name,
            age: self.age,
            duration,
            url: self.url,
            created_at: self.created_at,
            modified_at: self.modified_at,
        })
    }

    /// Build the stored shape of a domain record for a whole-row write.
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            id: plant.id.to_string(),
            common_name: plant.common_name.clone(),
            scientific_name: plant.scientific_name.clone(),
            age: plant.age,
            duration: plant.duration.as_str().to_string(),
            url: plant.url.clone(),
            created_at: plant.created_at,
            modified_at: plant.modified_at,
        }
    }
}
