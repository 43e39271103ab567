#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to read records file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write records file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize records: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize records: {0}")]
    Deserialization(serde_json::Error),
    #[error("records file lock was poisoned by a panicking writer")]
    LockPoisoned,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} cannot be empty")]
    EmptyPath { name: &'static str },
    #[error(
        "{name} points at a directory, expected a file path: {path}",
        path = path.display()
    )]
    PathIsDirectory {
        name: &'static str,
        path: std::path::PathBuf,
    },
}
