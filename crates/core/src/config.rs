// crates/core/src/config.rs
use serde::{Deserialize, Serialize};

/// Values strictly greater than this are ignored by default.
pub const DEFAULT_THRESHOLD: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Largest value that still contributes to the sum.
    pub threshold: i32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }
}

impl CalculatorConfig {
    #[must_use]
    pub const fn with_threshold(threshold: i32) -> Self {
        Self { threshold }
    }
}
