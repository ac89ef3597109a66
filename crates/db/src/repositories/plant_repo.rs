//! Repository for the `plants` table.
//!
//! All writes are whole-row puts: the store contract is get/put/delete by
//! primary key plus full scan, with no field-level patching. The partial
//! update is a read-merge-write -- load the row, apply the merge rules in
//! application code, write the full merged row back.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use planttracker_core::clock::Clock;
use planttracker_core::plant::{merge_update, CreatePlantRequest, Plant, UpdatePlantRequest};
use planttracker_core::types::PlantId;

use crate::error::DbError;
use crate::models::plant::PlantRow;

/// Column list for `plants` queries.
const PLANT_COLUMNS: &str =
    "id, common_name, scientific_name, age, duration, url, created_at, modified_at";

/// Provides CRUD operations for plants.
///
/// Holds the injected clock so server-assigned timestamps never come from an
/// inline system-clock read.
#[derive(Clone)]
pub struct PlantRepo {
    clock: Arc<dyn Clock>,
}

impl PlantRepo {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Persist a new plant: assign a fresh id, stamp both timestamps from
    /// the clock, write the full row, and return the generated id.
    pub async fn create(
        &self,
        pool: &PgPool,
        request: &CreatePlantRequest,
    ) -> Result<PlantId, DbError> {
        let now = self.clock.now();
        let id = Uuid::new_v4();

        let row = PlantRow {
            id: id.to_string(),
            common_name: request.common_name.clone(),
            scientific_name: request.scientific_name.clone(),
            age: request.age,
            duration: request.duration.as_str().to_string(),
            url: request.url.clone(),
            created_at: now,
            modified_at: now,
        };

        self.put(pool, &row).await?;
        Ok(id)
    }

    /// Look up a plant by primary key. Absence is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, pool: &PgPool, id: PlantId) -> Result<Option<Plant>, DbError> {
        let query = format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = $1");

        let row: Option<PlantRow> = sqlx::query_as(&query)
            .bind(id.to_string())
            .fetch_optional(pool)
            .await?;

        row.map(PlantRow::into_plant).transpose()
    }

    /// Scan the full table. An empty store yields an empty vec.
    pub async fn get_all(&self, pool: &PgPool) -> Result<Vec<Plant>, DbError> {
        let query = format!("SELECT {PLANT_COLUMNS} FROM plants ORDER BY created_at");

        let rows: Vec<PlantRow> = sqlx::query_as(&query).fetch_all(pool).await?;

        rows.into_iter().map(PlantRow::into_plant).collect()
    }

    /// Field-level merge-update.
    ///
    /// Loads the existing row (returning `Ok(None)` when the id does not
    /// exist -- updates never create), merges the supplied fields per the
    /// rules in [`merge_update`], stamps `modified_at` from the clock, and
    /// writes the merged record back as one whole-row put.
    ///
    /// There is no concurrency token: two racing updates to the same id are
    /// last-writer-wins, and the later write may discard the earlier one's
    /// merged fields.
    pub async fn update(
        &self,
        pool: &PgPool,
        id: PlantId,
        update: &UpdatePlantRequest,
    ) -> Result<Option<Plant>, DbError> {
        let Some(existing) = self.get_by_id(pool, id).await? else {
            return Ok(None);
        };

        let merged = merge_update(&existing, update, self.clock.now());
        self.put(pool, &PlantRow::from_plant(&merged)).await?;

        Ok(Some(merged))
    }

    /// Delete by primary key. Deleting a missing id is not an error.
    pub async fn delete(&self, pool: &PgPool, id: PlantId) -> Result<(), DbError> {
        sqlx::query("DELETE FROM plants WHERE id = $1")
            .bind(id.to_string())
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Whole-row put: insert the row, or replace every column when the key
    /// already exists.
    async fn put(&self, pool: &PgPool, row: &PlantRow) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO plants \
                 (id, common_name, scientific_name, age, duration, url, created_at, modified_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO UPDATE SET \
                 common_name = EXCLUDED.common_name, \
                 scientific_name = EXCLUDED.scientific_name, \
                 age = EXCLUDED.age, \
                 duration = EXCLUDED.duration, \
                 url = EXCLUDED.url, \
                 created_at = EXCLUDED.created_at, \
                 modified_at = EXCLUDED.modified_at",
        )
        .bind(&row.id)
        .bind(&row.common_name)
        .bind(&row.scientific_name)
        .bind(row.age)
        .bind(&row.duration)
        .bind(&row.url)
        .bind(row.created_at)
        .bind(row.modified_at)
        .execute(pool)
        .await?;

        Ok(())
    }
}
