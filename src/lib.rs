//! Adapt date(time) values between systems that disagree about how such
//! values are meant to be read.
//!
//! Two systems exchanging the same field often make different assumptions
//! about it: whether a value is timezone-aware or carries an implicit zone,
//! its resolution (day, second, millisecond, microsecond), whether an
//! interval end is inclusive or exclusive, and whether the energy-trading
//! gas-day convention (days running 06:00 to 06:00 local time) applies.
//! [`adapt_to_target`] converts one value per call through an unambiguous
//! pivot: an exclusive-boundary, timezone-aware UTC instant.
//!
//! Assumptions are declared per side with [`ChronoAssumption`] and paired in
//! a [`MappingConfig`]. Validation is a pure query, performed by the entry
//! point rather than at construction, so deliberately invalid configurations
//! can be built and inspected.
//!
//! ```
//! use chrono::NaiveDate;
//! use chrono_tz::Tz;
//! use chronoadapt::{ChronoAssumption, MappingConfig, Resolution, adapt_to_target};
//!
//! // An inclusive end date in a gas-unaware daily system, mapped into a
//! // gastag-aware system with millisecond resolution.
//! let config = MappingConfig {
//!     source: ChronoAssumption {
//!         is_end: true,
//!         is_inclusive_end: Some(true),
//!         implicit_timezone: Some(Tz::Europe__Berlin),
//!         ..ChronoAssumption::new(Resolution::days(1))
//!     },
//!     target: ChronoAssumption {
//!         is_end: true,
//!         is_inclusive_end: Some(true),
//!         is_gastag_aware: true,
//!         ..ChronoAssumption::new(Resolution::milliseconds(1))
//!     },
//!     is_gas: Some(true),
//! };
//! let end_of_year = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
//! let adapted = adapt_to_target(end_of_year, &config)?;
//! assert_eq!(adapted.to_rfc3339(), "2022-01-01T04:59:59.999+00:00");
//! # Ok::<(), chronoadapt::AdaptError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod util;

pub use domain::assumption::{AssumptionViolation, ChronoAssumption, Resolution, TimeUnit};
pub use domain::config::{ConfigViolation, MappingConfig};
pub use domain::error::AdaptError;
pub use domain::value::SourceValue;
pub use engine::adapt_to_target;
