/// Storage errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.quota_exceeded")]
    QuotaExceeded,
    #[error("storage.serialization")]
    Serialization,
    #[error("storage.io")]
    Io,
}

impl StorageError {
    pub fn quota_exceeded() -> Self {
        StorageError::QuotaExceeded
    }
    pub fn serialization() -> Self {
        StorageError::Serialization
    }
    pub fn io() -> Self {
        StorageError::Io
    }
}
