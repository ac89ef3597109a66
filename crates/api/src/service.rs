//! Plant service: the adaptation layer between handlers and the repository.
//!
//! Carries no business rules -- it forwards to [`PlantRepo`] and maps domain
//! records to the API projection (duration as its display name, timestamps
//! dropped).

use planttracker_core::plant::{CreatePlantRequest, Plant, PlantResponse, UpdatePlantRequest};
use planttracker_core::types::PlantId;
use planttracker_db::repositories::PlantRepo;
use planttracker_db::{DbError, DbPool};

#[derive(Clone)]
pub struct PlantService {
    repo: PlantRepo,
}

impl PlantService {
    pub fn new(repo: PlantRepo) -> Self {
        Self { repo }
    }

    /// All stored plants, projected. Empty store yields an empty vec.
    pub async fn get_all_plants(&self, pool: &DbPool) -> Result<Vec<PlantResponse>, DbError> {
        let plants = self.repo.get_all(pool).await?;
        Ok(plants.into_iter().map(Plant::into_response).collect())
    }

    pub async fn get_plant_by_id(
        &self,
        pool: &DbPool,
        id: PlantId,
    ) -> Result<Option<PlantResponse>, DbError> {
        Ok(self
            .repo
            .get_by_id(pool, id)
            .await?
            .map(Plant::into_response))
    }

    /// Returns the server-generated id of the new plant.
    pub async fn create_plant(
        &self,
        pool: &DbPool,
        request: &CreatePlantRequest,
    ) -> Result<PlantId, DbError> {
        self.repo.create(pool, request).await
    }

    /// Merge-update; `None` means the id does not exist.
    pub async fn update_plant(
        &self,
        pool: &DbPool,
        id: PlantId,
        request: &UpdatePlantRequest,
    ) -> Result<Option<PlantResponse>, DbError> {
        Ok(self
            .repo
            .update(pool, id, request)
            .await?
            .map(Plant::into_response))
    }

    pub async fn delete_plant(&self, pool: &DbPool, id: PlantId) -> Result<(), DbError> {
        self.repo.delete(pool, id).await
    }
}
