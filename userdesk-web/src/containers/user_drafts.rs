//! Ordered list of user drafts edited by the user form.
//!
//! Every row carries a [`DraftKey`] allocated when the row is created, so an
//! edit addressed to a key keeps hitting the same row after rows are added or
//! removed. All operations return a fresh list and leave `self` untouched.

use shared::models::{UserField, UserRecord};
use std::fmt;

/// Stable identity of a draft row within one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DraftKey(u64);

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "draft-{}", self.0)
    }
}

/// One draft together with its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRow {
    pub key: DraftKey,
    pub record: UserRecord,
}

/// Non-empty, ordered sequence of drafts. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftList {
    rows: Vec<DraftRow>,
    next_key: u64,
}

impl Default for DraftList {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftList {
    /// A list holding a single empty draft.
    pub fn new() -> Self {
        Self {
            rows: vec![DraftRow {
                key: DraftKey(0),
                record: UserRecord::default(),
            }],
            next_key: 1,
        }
    }

    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn first(&self) -> &DraftRow {
        &self.rows[0]
    }

    pub fn last(&self) -> &DraftRow {
        &self.rows[self.rows.len() - 1]
    }

    pub fn is_last(&self, key: DraftKey) -> bool {
        self.last().key == key
    }

    /// Whether the "add row" control is enabled: the last draft must be complete.
    pub fn can_add_row(&self) -> bool {
        self.last().record.is_complete()
    }

    /// Whether the "remove last row" control is shown.
    pub fn can_remove_row(&self) -> bool {
        self.rows.len() > 1
    }

    fn allocate(&self) -> (DraftKey, u64) {
        (DraftKey(self.next_key), self.next_key + 1)
    }

    /// Append an empty draft at the end.
    #[must_use]
    pub fn with_row_added(&self) -> Self {
        let (key, next_key) = self.allocate();
        let mut rows = self.rows.clone();
        rows.push(DraftRow {
            key,
            record: UserRecord::default(),
        });
        Self { rows, next_key }
    }

    /// Drop the last draft; a single remaining draft is kept.
    #[must_use]
    pub fn with_last_removed(&self) -> Self {
        if !self.can_remove_row() {
            return self.clone();
        }
        let mut rows = self.rows.clone();
        rows.pop();
        Self {
            rows,
            next_key: self.next_key,
        }
    }

    /// Set `field` of the draft identified by `key`. Unknown keys are ignored.
    #[must_use]
    pub fn with_field(&self, key: DraftKey, field: UserField, value: &str) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                if row.key == key {
                    DraftRow {
                        key: row.key,
                        record: row.record.with_field(field, value),
                    }
                } else {
                    row.clone()
                }
            })
            .collect();
        Self {
            rows,
            next_key: self.next_key,
        }
    }

    /// Replace every draft with `record` under a freshly allocated key.
    #[must_use]
    pub fn replaced_with(&self, record: UserRecord) -> Self {
        let (key, next_key) = self.allocate();
        Self {
            rows: vec![DraftRow { key, record }],
            next_key,
        }
    }
}
