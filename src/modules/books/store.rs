//! In-memory record store for books.
//!
//! An ordered `Vec` addressed both by position and by the logical `id` field.
//! Ids are handed out as the store length at creation time, so after a
//! removal the id of a later record no longer matches its position.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use thiserror::Error;
use tokio::sync::RwLock;

use super::models::BookRecord;

/// Store handle shared between the module and the GraphQL schema
pub type SharedBookStore = Arc<RwLock<BookStore>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("position {position} is out of range for a store of {len} books")]
    OutOfRange { position: usize, len: usize },
}

#[derive(Debug, Default)]
pub struct BookStore {
    records: Vec<BookRecord>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with `seed`, kept in the given order.
    pub fn from_records(seed: Vec<BookRecord>) -> Self {
        Self { records: seed }
    }

    pub fn into_shared(self) -> SharedBookStore {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.records.iter()
    }

    pub fn append(&mut self, record: BookRecord) {
        self.records.push(record);
    }

    /// Append every record of `seed` after the existing ones.
    pub fn extend(&mut self, seed: impl IntoIterator<Item = BookRecord>) {
        self.records.extend(seed);
    }

    pub fn get_by_position(&self, position: usize) -> Result<&BookRecord, StoreError> {
        self.records.get(position).ok_or(StoreError::OutOfRange {
            position,
            len: self.records.len(),
        })
    }

    /// Overwrite the record at `position`, returning the previous one.
    pub fn replace_at(
        &mut self,
        position: usize,
        record: BookRecord,
    ) -> Result<BookRecord, StoreError> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(position)
            .ok_or(StoreError::OutOfRange { position, len })?;
        Ok(std::mem::replace(slot, record))
    }

    /// Remove the record at `position`; later records shift down by one.
    pub fn remove_by_position(&mut self, position: usize) -> Result<BookRecord, StoreError> {
        if position >= self.records.len() {
            return Err(StoreError::OutOfRange {
                position,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(position))
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<&BookRecord>
    where
        P: FnMut(&BookRecord) -> bool,
    {
        self.records.iter().find(|record| predicate(record))
    }
}

/// Read a seed list (a JSON array of book records) from `path`.
pub fn load_seed(path: &Path) -> anyhow::Result<Vec<BookRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let records: Vec<BookRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    Ok(records)
}
