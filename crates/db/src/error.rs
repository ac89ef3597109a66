#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// A stored row could not be converted into a domain record. Should not
    /// occur for rows written by this service.
    #[error("failed to map stored plant: {0}")]
    Mapping(String),
}
