use crate::persistence::{CorruptStateError, PersistenceError};
use std::io;
use thiserror::Error;

/// User input rejected by list creation; shown to the user as a blocking alert
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("List name cannot be empty.")]
    EmptyTitle,
    #[error("List name already exists.")]
    DuplicateTitle(String),
    #[error("Please select a color.")]
    EmptyColor,
    #[error("Color `{0}` is not in the palette.")]
    UnknownColor(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("list with title `{title}` not found")]
    ListNotFound { title: String },
    #[error("list with id {id} not found")]
    ListIdNotFound { id: i64 },
    #[error("stored lists are corrupt")]
    CorruptState(#[from] CorruptStateError),
    #[error("failed to read stored lists")]
    Read(#[source] PersistenceError),
    #[error("failed to start persistence writer")]
    WriterSpawn(#[source] io::Error),
}

impl StoreError {
    /// Lookup failures leave the store untouched and are safe to log and continue
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound { .. } | Self::ListIdNotFound { .. })
    }
}
