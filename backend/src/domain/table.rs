//! Dining table aggregate.
//!
//! A table is the bookable resource. It owns its reservations: removing a
//! table removes every reservation made against it.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(i32);

impl TableId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value as stored.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors raised when building a [`NewTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableValidationError {
    /// Seat count was zero or negative.
    #[error("seats must be a positive integer, got {seats}")]
    NonPositiveSeats {
        /// Rejected seat count.
        seats: i32,
    },
}

/// A table that has not been persisted yet.
///
/// ## Invariants
/// - `seats` is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTable {
    name: String,
    seats: i32,
    location: String,
}

impl NewTable {
    /// Validate and build a new table.
    ///
    /// # Examples
    /// ```
    /// use booking::domain::NewTable;
    ///
    /// let table = NewTable::try_new("Window", 4, "Main hall").expect("valid table");
    /// assert_eq!(table.seats(), 4);
    /// assert!(NewTable::try_new("Broken", 0, "Nowhere").is_err());
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        seats: i32,
        location: impl Into<String>,
    ) -> Result<Self, TableValidationError> {
        if seats <= 0 {
            return Err(TableValidationError::NonPositiveSeats { seats });
        }
        Ok(Self {
            name: name.into(),
            seats,
            location: location.into(),
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seat count.
    pub fn seats(&self) -> i32 {
        self.seats
    }

    /// Location label.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: TableId) -> Table {
        Table {
            id,
            name: self.name,
            seats: self.seats,
            location: self.location,
        }
    }
}

/// A persisted table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    id: TableId,
    name: String,
    seats: i32,
    location: String,
}

impl Table {
    /// Store-assigned identifier.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seat count.
    pub fn seats(&self) -> i32 {
        self.seats
    }

    /// Location label.
    pub fn location(&self) -> &str {
        &self.location
    }
}
