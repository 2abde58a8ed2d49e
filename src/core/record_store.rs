//! Insertion-ordered record storage
//!
//! This module provides the RecordStore component that holds every record of
//! one kind (accounts or books) for the lifetime of a shell session.
//!
//! # Ordering
//!
//! Records are kept in the order they were appended. Removing a record keeps
//! the relative order of the rest. Only the sorter reorders records.
//!
//! # Duplicate Handling
//!
//! Keys are not checked for uniqueness on append. Lookups and removals act on
//! the first record carrying the key.

use crate::core::traits::Keyed;
use crate::types::StoreError;

/// Ordered, exclusively owned collection of records
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R> {
    /// Records in insertion order
    records: Vec<R>,
}

impl<R: Keyed> RecordStore<R> {
    /// Create a new empty record store
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
        }
    }

    /// Append a record at the tail
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AllocationExhausted` if room for the record
    /// cannot be reserved. Callers treat this as fatal.
    pub fn append(&mut self, record: R) -> Result<(), StoreError> {
        self.records
            .try_reserve(1)
            .map_err(|_| StoreError::AllocationExhausted)?;
        self.records.push(record);
        Ok(())
    }

    /// Find the first record with the given key
    ///
    /// # Returns
    ///
    /// * `Some(&R)` - The first matching record in insertion order
    /// * `None` - If no record carries the key
    pub fn find_by_key(&self, key: R::Key) -> Option<&R> {
        self.records.iter().find(|record| record.key() == key)
    }

    /// Find the first record with the given key, mutably
    pub fn find_by_key_mut(&mut self, key: R::Key) -> Option<&mut R> {
        self.records.iter_mut().find(|record| record.key() == key)
    }

    /// Unlink and drop the first record with the given key
    ///
    /// Remaining records keep their relative order.
    ///
    /// # Returns
    ///
    /// `true` if a record was removed, `false` if the key was not found
    pub fn remove_by_key(&mut self, key: R::Key) -> bool {
        self.take_by_key(key).is_some()
    }

    /// Checked lookup that distinguishes an empty store from a miss
    ///
    /// # Errors
    ///
    /// * `StoreError::EmptyStore` - The store has no records (no scan is done)
    /// * `StoreError::RecordNotFound` - No record carries the key
    pub fn lookup(&self, key: R::Key) -> Result<&R, StoreError> {
        if self.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        self.find_by_key(key)
            .ok_or_else(|| StoreError::not_found(key))
    }

    /// Checked mutable lookup, see [`RecordStore::lookup`]
    pub fn lookup_mut(&mut self, key: R::Key) -> Result<&mut R, StoreError> {
        if self.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        self.find_by_key_mut(key)
            .ok_or_else(|| StoreError::not_found(key))
    }

    /// Checked removal returning the unlinked record
    ///
    /// # Errors
    ///
    /// Same as [`RecordStore::lookup`].
    pub fn delete(&mut self, key: R::Key) -> Result<R, StoreError> {
        if self.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        self.take_by_key(key)
            .ok_or_else(|| StoreError::not_found(key))
    }

    fn take_by_key(&mut self, key: R::Key) -> Option<R> {
        let position = self.records.iter().position(|record| record.key() == key)?;
        Some(self.records.remove(position))
    }
}

impl<R> RecordStore<R> {
    /// Visit every record head to tail
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&R),
    {
        self.records.iter().for_each(visitor);
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records as a mutable slice, for in-place reordering by the sorter
    pub(crate) fn as_mut_slice(&mut self) -> &mut [R] {
        &mut self.records
    }
}

impl<R: Keyed> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
