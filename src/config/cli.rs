use crate::core::Storage;
use crate::utils::error::{Result, RosterError};
use std::fs;

/// Reads roster files straight from the local filesystem. The handle
/// is opened and closed inside `read_file`; nothing is retained.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|source| RosterError::SourceUnavailable {
            path: path.to_string(),
            source,
        })
    }
}
