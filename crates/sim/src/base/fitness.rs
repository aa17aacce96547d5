use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Percentage pixel difference between a rendered replica and the target.
///
/// Lower is better: `0.0` means identical images and `100.0` means every
/// channel of every pixel is maximally wrong.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FitnessValue(f64);

impl FitnessValue {
    /// A perfect match.
    pub const PERFECT: Self = Self(0.0);
    /// The largest possible difference.
    pub const WORST: Self = Self(100.0);

    /// Creates a new FitnessValue, clamping the input to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the inner f64 value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Total order used when ranking individuals.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Whether `self` is a strictly better (smaller) score than `other`.
    pub fn is_better_than(self, other: Self) -> bool {
        self.0 < other.0
    }
}

impl From<FitnessValue> for f64 {
    fn from(fitness: FitnessValue) -> Self {
        fitness.0
    }
}

impl From<f64> for FitnessValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Default for FitnessValue {
    fn default() -> Self {
        Self::WORST
    }
}

impl fmt::Display for FitnessValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{:.4}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_eq!(FitnessValue::new(-3.0).get(), 0.0);
        assert_eq!(FitnessValue::new(250.0).get(), 100.0);
        assert_eq!(FitnessValue::new(42.5).get(), 42.5);
    }

    #[test]
    fn test_lower_is_better() {
        let a = FitnessValue::new(10.0);
        let b = FitnessValue::new(20.0);
        assert!(a.is_better_than(b));
        assert!(!b.is_better_than(a));
        assert!(!a.is_better_than(a));
        assert_eq!(a.total_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_display_precision() {
        let v = FitnessValue::new(3.14159);
        assert_eq!(v.to_string(), "3.1416");
        assert_eq!(format!("{v:.2}"), "3.14");
    }
}
