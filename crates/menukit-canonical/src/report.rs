use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overall outcome of a normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Every record matched a known shape.
    #[default]
    Ok,
    /// Some records fell back to sentinels; warnings say which.
    Degraded,
}

/// Stable warning code, e.g. `UnrecognizedRoot` or `IdCollision`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportWarning(String);

impl ReportWarning {
    /// Creates a warning from a literal code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The warning code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Diagnostics collected while normalizing one payload.
///
/// Warnings are deduplicated by code; how often each one fired is kept in
/// `metrics` alongside plain counters such as `categories` and `items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Overall status.
    pub status: ReportStatus,
    /// Distinct warning codes, in first-seen order.
    pub warnings: Vec<ReportWarning>,
    /// Named counters.
    pub metrics: BTreeMap<String, u64>,
}

impl NormalizationReport {
    /// Records a degraded record under `code` and marks the report degraded.
    pub fn warn(&mut self, code: &str) {
        self.status = ReportStatus::Degraded;
        if !self.warnings.iter().any(|w| w.code() == code) {
            self.warnings.push(ReportWarning::new(code));
        }
        self.count(code);
    }

    /// Increments the counter named `metric`.
    pub fn count(&mut self, metric: &str) {
        self.add(metric, 1);
    }

    /// Adds `amount` to the counter named `metric`.
    pub fn add(&mut self, metric: &str, amount: u64) {
        *self.metrics.entry(metric.to_string()).or_insert(0) += amount;
    }

    /// Current value of `metric` (zero when never counted).
    pub fn metric(&self, metric: &str) -> u64 {
        self.metrics.get(metric).copied().unwrap_or(0)
    }

    /// True when `code` was raised at least once.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code() == code)
    }
}
