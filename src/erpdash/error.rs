use crate::state::CollectionKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid patch for {kind} {id}: {reason}")]
    InvalidPatch {
        kind: CollectionKind,
        id: String,
        reason: String,
    },

    #[error("{kind} does not support {operation}")]
    Unsupported {
        kind: CollectionKind,
        operation: &'static str,
    },

    #[error("Not signed in. Run `erpdash login` first")]
    NotAuthenticated,

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ErpError>;
