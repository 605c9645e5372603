pub mod canonicalize;
pub mod denormalize;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::domain::config::MappingConfig;
use crate::domain::error::AdaptError;
use crate::domain::value::SourceValue;

/// Hours between the calendar-day boundary and the start of a gas day on the
/// local clock.
const GASTAG_SHIFT_HOURS: i64 = 6;

/// Home zone of the Gastag convention; used for the gas-day shift when an
/// assumption has no implicit timezone of its own.
const GASTAG_HOME_ZONE: Tz = Tz::Europe__Berlin;

/// Map a source value to the representation the target system expects.
///
/// Validates the configuration first and reports every violation at once,
/// then converts via the canonical UTC pivot: source value to exclusive UTC
/// instant, exclusive UTC instant to target timezone, boundary convention,
/// and resolution.
pub fn adapt_to_target(
    value: impl Into<SourceValue>,
    config: &MappingConfig,
) -> Result<DateTime<Tz>, AdaptError> {
    let violations = config.get_consistency_errors();
    if !violations.is_empty() {
        return Err(AdaptError::InconsistentConfig { violations });
    }
    let canonical = canonicalize::to_canonical(value.into(), config)?;
    denormalize::from_canonical(canonical, config)
}
