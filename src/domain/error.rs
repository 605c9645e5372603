use chrono::NaiveDateTime;
use chrono_tz::Tz;
use thiserror::Error;

use super::config::ConfigViolation;

/// Errors surfaced by [`adapt_to_target`](crate::engine::adapt_to_target).
///
/// All of them are raised synchronously at the point of detection; nothing is
/// retried or recovered internally, and there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdaptError {
    /// The mapping configuration violates one or more invariants. Carries the
    /// full aggregated list, not just the first violation.
    #[error("mapping config is not self-consistent: {}", join_violations(.violations))]
    InconsistentConfig { violations: Vec<ConfigViolation> },

    /// A naive source value was given but the source assumption has no
    /// implicit timezone to interpret it in.
    #[error("source value is naive and the source assumption has no implicit_timezone")]
    MissingTimezone,

    /// A wall-clock time could not be localized even after shifting across a
    /// potential DST gap. Not reachable for ordinary IANA zones.
    #[error("local time {naive} cannot be resolved in {zone}")]
    UnresolvableLocalTime { naive: NaiveDateTime, zone: Tz },
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
