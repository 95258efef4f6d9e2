//! Reservation aggregate and the booking window value type.
//!
//! A reservation occupies its table for the half-open interval
//! `[start, start + duration)`. Two windows on the same table conflict iff
//! `start_a < end_b && start_b < end_a`, so back-to-back bookings never do.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::TableId;

/// Store-assigned identifier of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i32);

impl ReservationId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value as stored.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors raised when building a [`BookingWindow`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingWindowError {
    /// Duration was zero or negative.
    #[error("Duration must be positive")]
    NonPositiveDuration {
        /// Rejected duration in minutes.
        minutes: i32,
    },
    /// Start precedes the earliest instant a store can hold.
    #[error("Reservation time is outside the supported range")]
    StartOutOfRange {
        /// Rejected start.
        start: DateTime<Utc>,
    },
    /// `start + duration` does not fit the timestamp range.
    #[error("reservation end time is out of range")]
    EndOutOfRange,
}

/// Earliest storable instant: 4714-11-24 BC, PostgreSQL's `timestamptz` floor.
///
/// The ceiling (294276 AD) lies beyond chrono's own range.
fn earliest_storable() -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(-4713, 11, 24)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Half-open time interval a reservation occupies.
///
/// ## Invariants
/// - `duration_minutes > 0`.
/// - `start()` is no earlier than 4714-11-24 BC.
/// - `end()` is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    start: DateTime<Utc>,
    duration_minutes: i32,
    end: DateTime<Utc>,
}

impl BookingWindow {
    /// Validate and build a window.
    ///
    /// # Examples
    /// ```
    /// use booking::domain::BookingWindow;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let start = Utc.with_ymd_and_hms(2025, 4, 10, 18, 0, 0).unwrap();
    /// let window = BookingWindow::try_new(start, 60).expect("valid window");
    /// assert_eq!(window.end(), Utc.with_ymd_and_hms(2025, 4, 10, 19, 0, 0).unwrap());
    /// assert!(BookingWindow::try_new(start, 0).is_err());
    /// ```
    pub fn try_new(start: DateTime<Utc>, duration_minutes: i32) -> Result<Self, BookingWindowError> {
        if duration_minutes <= 0 {
            return Err(BookingWindowError::NonPositiveDuration {
                minutes: duration_minutes,
            });
        }
        if earliest_storable().is_some_and(|earliest| start < earliest) {
            return Err(BookingWindowError::StartOutOfRange { start });
        }
        let end = start
            .checked_add_signed(Duration::minutes(i64::from(duration_minutes)))
            .ok_or(BookingWindowError::EndOutOfRange)?;
        Ok(Self {
            start,
            duration_minutes,
            end,
        })
    }

    /// Inclusive start instant.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Length in minutes.
    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    /// Exclusive end instant.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether two half-open windows share at least one instant.
    ///
    /// # Examples
    /// ```
    /// use booking::domain::BookingWindow;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let at = |h, m| Utc.with_ymd_and_hms(2025, 4, 10, h, m, 0).unwrap();
    /// let first = BookingWindow::try_new(at(18, 0), 60).unwrap();
    /// let overlapping = BookingWindow::try_new(at(18, 30), 60).unwrap();
    /// let adjacent = BookingWindow::try_new(at(19, 0), 60).unwrap();
    /// assert!(first.overlaps(&overlapping));
    /// assert!(!first.overlaps(&adjacent));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A reservation that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    table_id: TableId,
    customer_name: String,
    window: BookingWindow,
}

impl NewReservation {
    /// Build a new reservation for `table_id`.
    pub fn new(table_id: TableId, customer_name: impl Into<String>, window: BookingWindow) -> Self {
        Self {
            table_id,
            customer_name: customer_name.into(),
            window,
        }
    }

    /// Table being booked.
    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    /// Free-text customer name.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Occupied interval.
    pub fn window(&self) -> &BookingWindow {
        &self.window
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            table_id: self.table_id,
            customer_name: self.customer_name,
            window: self.window,
        }
    }
}

/// A persisted reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: ReservationId,
    table_id: TableId,
    customer_name: String,
    window: BookingWindow,
}

impl Reservation {
    /// Store-assigned identifier.
    pub fn id(&self) -> ReservationId {
        self.id
    }

    /// Owning table.
    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    /// Free-text customer name.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Occupied interval.
    pub fn window(&self) -> &BookingWindow {
        &self.window
    }
}
