/// Plant primary keys are server-generated UUIDs, stored as strings.
pub type PlantId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
