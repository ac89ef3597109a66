//! Integration tests for the plant repository.
//!
//! Exercises create / get / scan / merge-update / delete against a real
//! database. Timestamps come from a `FixedClock` so creation and update
//! times are deterministic and can be asserted exactly.

use std::sync::Arc;

use chrono::TimeZone;
use sqlx::PgPool;

use planttracker_core::clock::FixedClock;
use planttracker_core::plant::{CreatePlantRequest, Duration, UpdatePlantRequest};
use planttracker_core::types::Timestamp;
use planttracker_db::repositories::PlantRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ts(secs: i64) -> Timestamp {
    chrono::Utc.timestamp_opt(secs, 0).unwrap()
}

fn fixture() -> (PlantRepo, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(ts(1_000)));
    (PlantRepo::new(clock.clone()), clock)
}

fn new_rose() -> CreatePlantRequest {
    CreatePlantRequest {
        common_name: "Rose".to_string(),
        scientific_name: "Rosa".to_string(),
        duration: Duration::Perennial,
        age: 2,
        url: "https://plants.usda.gov/plant-profile/ROSA".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_get_round_trips(pool: PgPool) {
    let (repo, _clock) = fixture();

    let id = repo.create(&pool, &new_rose()).await.unwrap();
    let plant = repo.get_by_id(&pool, id).await.unwrap().unwrap();

    assert_eq!(plant.id, id);
    assert_eq!(plant.common_name, "Rose");
    assert_eq!(plant.scientific_name, "Rosa");
    assert_eq!(plant.age, 2);
    assert_eq!(plant.duration, Duration::Perennial);
    assert_eq!(plant.url, "https://plants.usda.gov/plant-profile/ROSA");
    assert_eq!(plant.created_at, ts(1_000));
    assert_eq!(plant.modified_at, plant.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_by_id_missing_returns_none(pool: PgPool) {
    let (repo, _clock) = fixture();

    let plant = repo.get_by_id(&pool, uuid::Uuid::new_v4()).await.unwrap();
    assert!(plant.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_all_on_empty_store_returns_empty_vec(pool: PgPool) {
    let (repo, _clock) = fixture();

    let plants = repo.get_all(&pool).await.unwrap();
    assert!(plants.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_all_returns_every_stored_plant(pool: PgPool) {
    let (repo, clock) = fixture();

    let first = repo.create(&pool, &new_rose()).await.unwrap();
    clock.set(ts(2_000));
    let second = repo
        .create(
            &pool,
            &CreatePlantRequest {
                common_name: "Fern".to_string(),
                scientific_name: "Dryopteris".to_string(),
                duration: Duration::Unknown,
                age: 1,
                url: "https://plants.usda.gov/plant-profile/DREX2".to_string(),
            },
        )
        .await
        .unwrap();

    let plants = repo.get_all(&pool).await.unwrap();
    assert_eq!(plants.len(), 2);
    assert_eq!(plants[0].id, first);
    assert_eq!(plants[1].id, second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_stored_duration_folds_to_unknown(pool: PgPool) {
    let (repo, _clock) = fixture();
    let id = uuid::Uuid::new_v4();

    // Simulate a row written with a duration this service no longer knows.
    sqlx::query(
        "INSERT INTO plants \
             (id, common_name, scientific_name, age, duration, url, created_at, modified_at) \
         VALUES ($1, 'Rose', 'Rosa', 2, 'Biennial', \
                 'https://plants.usda.gov/plant-profile/ROSA', now(), now())",
    )
    .bind(id.to_string())
    .execute(&pool)
    .await
    .unwrap();

    let plant = repo.get_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(plant.duration, Duration::Unknown);
}

// ---------------------------------------------------------------------------
// Merge-update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_merges_only_supplied_fields(pool: PgPool) {
    let (repo, clock) = fixture();
    let id = repo.create(&pool, &new_rose()).await.unwrap();

    clock.set(ts(2_000));
    let update = UpdatePlantRequest {
        age: Some(500),
        ..Default::default()
    };
    let merged = repo.update(&pool, id, &update).await.unwrap().unwrap();

    assert_eq!(merged.age, 500);
    assert_eq!(merged.common_name, "Rose");
    assert_eq!(merged.scientific_name, "Rosa");
    assert_eq!(merged.duration, Duration::Perennial);
    assert_eq!(merged.created_at, ts(1_000));
    assert_eq!(merged.modified_at, ts(2_000));

    // The merged record is what got persisted.
    let stored = repo.get_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored, merged);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_empty_strings_keeps_stored_values(pool: PgPool) {
    let (repo, clock) = fixture();
    let id = repo.create(&pool, &new_rose()).await.unwrap();

    clock.set(ts(2_000));
    let update = UpdatePlantRequest {
        common_name: Some(String::new()),
        scientific_name: Some("Rosa rubiginosa".to_string()),
        ..Default::default()
    };
    let merged = repo.update(&pool, id, &update).await.unwrap().unwrap();

    assert_eq!(merged.common_name, "Rose");
    assert_eq!(merged.scientific_name, "Rosa rubiginosa");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_undefined_duration_keeps_stored_value(pool: PgPool) {
    let (repo, clock) = fixture();
    let id = repo.create(&pool, &new_rose()).await.unwrap();

    clock.set(ts(2_000));
    let update = UpdatePlantRequest {
        duration: Some("Evergreen".to_string()),
        ..Default::default()
    };
    let merged = repo.update(&pool, id, &update).await.unwrap().unwrap();

    assert_eq!(merged.duration, Duration::Perennial);
    // The update itself still succeeded and moved modified_at.
    assert_eq!(merged.modified_at, ts(2_000));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_id_returns_none_and_writes_nothing(pool: PgPool) {
    let (repo, _clock) = fixture();

    let update = UpdatePlantRequest {
        common_name: Some("Fern".to_string()),
        ..Default::default()
    };
    let result = repo
        .update(&pool, uuid::Uuid::new_v4(), &update)
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(repo.get_all(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn modified_at_moves_on_every_update(pool: PgPool) {
    let (repo, clock) = fixture();
    let id = repo.create(&pool, &new_rose()).await.unwrap();

    clock.set(ts(2_000));
    repo.update(&pool, id, &UpdatePlantRequest::default())
        .await
        .unwrap()
        .unwrap();

    clock.set(ts(3_000));
    let merged = repo
        .update(&pool, id, &UpdatePlantRequest::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(merged.created_at, ts(1_000));
    assert_eq!(merged.modified_at, ts(3_000));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_get_returns_none(pool: PgPool) {
    let (repo, _clock) = fixture();
    let id = repo.create(&pool, &new_rose()).await.unwrap();

    repo.delete(&pool, id).await.unwrap();

    assert!(repo.get_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_id_is_not_an_error(pool: PgPool) {
    let (repo, _clock) = fixture();

    repo.delete(&pool, uuid::Uuid::new_v4()).await.unwrap();
}
