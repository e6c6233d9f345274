use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Item not found: {0}")]
    ItemNotFound(u64),

    #[error("Category not found: {0}")]
    CategoryNotFound(u64),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Category '{name}' still has {items} item(s)")]
    CategoryInUse { name: String, items: usize },

    #[error("Malformed data under key '{key}': {source}")]
    MalformedPersistedData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl StockError {
    /// Domain failures a UI should report as a notification rather than abort on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StockError::ItemNotFound(_)
                | StockError::CategoryNotFound(_)
                | StockError::UnknownCategory(_)
                | StockError::CategoryInUse { .. }
                | StockError::MalformedPersistedData { .. }
                | StockError::InvalidField(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
