// =====================================================================
// File: index/outcome.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 3, 2025
//
// Description:
//   Result values for index mutations. A duplicate insert hands the
//   record back to the caller so it can be re-keyed and retried.
// =====================================================================
use super::node::Keyed;
use crate::error::IndexError;

/// Result of inserting a record.
#[derive(Debug, PartialEq)]
#[must_use]
pub enum InsertOutcome<R> {
    /// The record is now stored in the index.
    Inserted,
    /// A record with the same key is already stored. The index is
    /// unchanged and the rejected record is returned.
    Duplicate(R),
}


impl<R: Keyed> InsertOutcome<R> {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }

    /// Converts a duplicate into [`IndexError::DuplicateKey`].
    pub fn into_result(self) -> Result<(), IndexError> {
        match self {
            InsertOutcome::Inserted => Ok(()),
            InsertOutcome::Duplicate(record) => {
                Err(IndexError::DuplicateKey(record.key().to_string()))
            }
        }
    }
}


/// Result of removing a key.
#[derive(Debug, PartialEq)]
#[must_use]
pub enum DeleteOutcome<R> {
    /// The record that was stored under the key.
    Removed(R),
    /// No record had the key. The index is unchanged.
    NotFound,
}


impl<R> DeleteOutcome<R> {
    pub fn is_removed(&self) -> bool {
        matches!(self, DeleteOutcome::Removed(_))
    }

    /// Converts a miss into [`IndexError::NotFound`] for `key`.
    pub fn into_result<K: std::fmt::Display>(self, key: K) -> Result<R, IndexError> {
        match self {
            DeleteOutcome::Removed(record) => Ok(record),
            DeleteOutcome::NotFound => Err(IndexError::NotFound(key.to_string())),
        }
    }
}
