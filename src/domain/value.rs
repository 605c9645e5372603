use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// A date(time) value as produced by the source system.
///
/// Naive variants are interpreted via the source assumption's implicit
/// timezone; aware values keep the offset they carry. The `From` impls let
/// callers pass chrono values directly to
/// [`adapt_to_target`](crate::engine::adapt_to_target).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceValue {
    /// A plain calendar date, covering the full day.
    Date(NaiveDate),
    /// A date-time without an offset.
    Naive(NaiveDateTime),
    /// A date-time carrying an explicit offset.
    Aware(DateTime<FixedOffset>),
}

impl From<NaiveDate> for SourceValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for SourceValue {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for SourceValue {
    fn from(aware: DateTime<FixedOffset>) -> Self {
        Self::Aware(aware)
    }
}

impl From<DateTime<Utc>> for SourceValue {
    fn from(aware: DateTime<Utc>) -> Self {
        Self::Aware(aware.fixed_offset())
    }
}

impl From<DateTime<Tz>> for SourceValue {
    fn from(aware: DateTime<Tz>) -> Self {
        Self::Aware(aware.fixed_offset())
    }
}
