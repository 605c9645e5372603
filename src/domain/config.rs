use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::assumption::{AssumptionViolation, ChronoAssumption};

/// Mapping rules for one date(time) field from a source system to a target
/// system.
///
/// Like [`ChronoAssumption`], construction never validates; the conversion
/// entry point rejects inconsistent configurations before any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    /// How the source system interprets the field.
    pub source: ChronoAssumption,

    /// How the target system interprets the field.
    pub target: ChronoAssumption,

    /// Whether the mapped value carries gas data. Required whenever either
    /// side is gastag-aware; ignored (but allowed) otherwise.
    #[serde(default)]
    pub is_gas: Option<bool>,
}

impl MappingConfig {
    /// Collect every invariant violation: source assumption first, then
    /// target assumption, then cross-field checks.
    pub fn get_consistency_errors(&self) -> Vec<ConfigViolation> {
        let mut violations: Vec<ConfigViolation> = self
            .source
            .get_consistency_errors()
            .into_iter()
            .map(ConfigViolation::Source)
            .chain(
                self.target
                    .get_consistency_errors()
                    .into_iter()
                    .map(ConfigViolation::Target),
            )
            .collect();
        if (self.source.is_gastag_aware || self.target.is_gastag_aware) && self.is_gas.is_none() {
            violations.push(ConfigViolation::UnspecifiedGasFlag);
        }
        violations
    }

    pub fn is_self_consistent(&self) -> bool {
        self.get_consistency_errors().is_empty()
    }
}

/// Violation of a [`MappingConfig`] invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("source assumption: {0}")]
    Source(AssumptionViolation),

    #[error("target assumption: {0}")]
    Target(AssumptionViolation),

    /// Gas-day handling cannot be decided without knowing whether the value
    /// is gas data.
    #[error("is_gas must be set when source or target is gastag-aware")]
    UnspecifiedGasFlag,
}
