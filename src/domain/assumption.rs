use chrono::TimeDelta;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit of a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
}

impl TimeUnit {
    fn delta(self, amount: i64) -> TimeDelta {
        match self {
            Self::Days => TimeDelta::days(amount),
            Self::Hours => TimeDelta::hours(amount),
            Self::Minutes => TimeDelta::minutes(amount),
            Self::Seconds => TimeDelta::seconds(amount),
            Self::Milliseconds => TimeDelta::milliseconds(amount),
            Self::Microseconds => TimeDelta::microseconds(amount),
        }
    }
}

/// The smallest time increment a system can represent, e.g. one day or one
/// millisecond.
///
/// Used both to truncate values for the target system and to compute the
/// one-unit step between inclusive and exclusive interval ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resolution {
    pub amount: i64,
    pub unit: TimeUnit,
}

impl Resolution {
    pub fn days(amount: i64) -> Self {
        Self {
            amount,
            unit: TimeUnit::Days,
        }
    }

    pub fn hours(amount: i64) -> Self {
        Self {
            amount,
            unit: TimeUnit::Hours,
        }
    }

    pub fn minutes(amount: i64) -> Self {
        Self {
            amount,
            unit: TimeUnit::Minutes,
        }
    }

    pub fn seconds(amount: i64) -> Self {
        Self {
            amount,
            unit: TimeUnit::Seconds,
        }
    }

    pub fn milliseconds(amount: i64) -> Self {
        Self {
            amount,
            unit: TimeUnit::Milliseconds,
        }
    }

    pub fn microseconds(amount: i64) -> Self {
        Self {
            amount,
            unit: TimeUnit::Microseconds,
        }
    }

    /// One resolution step as a chrono duration.
    pub fn to_delta(self) -> TimeDelta {
        self.unit.delta(self.amount)
    }
}

/// How one system interprets a date(time) field: its resolution, boundary
/// semantics, implicit timezone, and gas-day awareness.
///
/// Construction never validates; call [`get_consistency_errors`] or
/// [`is_self_consistent`] before using an assumption in a mapping.
///
/// [`get_consistency_errors`]: ChronoAssumption::get_consistency_errors
/// [`is_self_consistent`]: ChronoAssumption::is_self_consistent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChronoAssumption {
    pub resolution: Resolution,

    /// Whether the value denotes the end of an interval rather than a point
    /// or interval start.
    #[serde(default)]
    pub is_end: bool,

    /// Whether the end boundary is part of the interval. Only meaningful when
    /// `is_end` is true; leaving it unset for an end is a consistency error,
    /// not a default.
    #[serde(default)]
    pub is_inclusive_end: Option<bool>,

    /// Timezone to assume for values that carry no explicit offset. When
    /// absent, naive values are rejected.
    #[serde(default)]
    pub implicit_timezone: Option<Tz>,

    /// Whether this system's day boundaries follow the gas-day convention
    /// (days start at 06:00 local time instead of midnight).
    #[serde(default)]
    pub is_gastag_aware: bool,
}

impl ChronoAssumption {
    /// A point-in-time assumption with the given resolution and all flags
    /// off; adjust fields via struct update syntax.
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            is_end: false,
            is_inclusive_end: None,
            implicit_timezone: None,
            is_gastag_aware: false,
        }
    }

    /// Collect every invariant violation, in declaration order.
    pub fn get_consistency_errors(&self) -> Vec<AssumptionViolation> {
        let mut violations = Vec::new();
        if self.is_inclusive_end.is_some() && !self.is_end {
            violations.push(AssumptionViolation::InclusiveEndWithoutEnd);
        }
        if self.is_end && self.is_inclusive_end.is_none() {
            violations.push(AssumptionViolation::UnspecifiedEndInclusivity);
        }
        if self.resolution.amount <= 0 {
            violations.push(AssumptionViolation::NonPositiveResolution);
        }
        violations
    }

    pub fn is_self_consistent(&self) -> bool {
        self.get_consistency_errors().is_empty()
    }
}

/// Violation of a [`ChronoAssumption`] invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssumptionViolation {
    /// `is_inclusive_end` only makes sense for interval ends.
    #[error("is_inclusive_end is set although is_end is false")]
    InclusiveEndWithoutEnd,

    /// End inclusivity must be stated explicitly for interval ends.
    #[error("is_end is true but is_inclusive_end is not set")]
    UnspecifiedEndInclusivity,

    /// A zero or negative resolution cannot express a one-unit step.
    #[error("resolution must be a positive duration")]
    NonPositiveResolution,
}
