//! Discount banding
//!
//! With the default thresholds (0, 0.10, 0.30):
//!
//! | band   | range             |
//! |--------|-------------------|
//! | None   | d ≤ 0             |
//! | Low    | 0 < d ≤ 0.10      |
//! | Medium | 0.10 < d ≤ 0.30   |
//! | High   | d > 0.30          |

use serde::{Deserialize, Serialize};

use super::numeric::round_to;

/// Discount band, ordered from no discount to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DiscountBand {
    None,
    Low,
    Medium,
    High,
}

/// Upper bounds (inclusive) of the None, Low and Medium bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountBands {
    #[serde(default = "default_none_max")]
    pub none_max: f64,
    #[serde(default = "default_low_max")]
    pub low_max: f64,
    #[serde(default = "default_medium_max")]
    pub medium_max: f64,
}

fn default_none_max() -> f64 {
    0.0
}
fn default_low_max() -> f64 {
    0.10
}
fn default_medium_max() -> f64 {
    0.30
}

impl Default for DiscountBands {
    fn default() -> Self {
        Self {
            none_max: default_none_max(),
            low_max: default_low_max(),
            medium_max: default_medium_max(),
        }
    }
}

impl DiscountBands {
    pub fn classify(&self, discount: f64) -> DiscountBand {
        if discount <= self.none_max {
            DiscountBand::None
        } else if discount <= self.low_max {
            DiscountBand::Low
        } else if discount <= self.medium_max {
            DiscountBand::Medium
        } else {
            DiscountBand::High
        }
    }

    /// Display label, e.g. "Low (0–10%)"
    pub fn label(&self, band: DiscountBand) -> String {
        let none = as_percent(self.none_max);
        let low = as_percent(self.low_max);
        let medium = as_percent(self.medium_max);
        match band {
            DiscountBand::None if self.none_max == 0.0 => "No Discount (0%)".to_string(),
            DiscountBand::None => format!("No Discount (≤{}%)", none),
            DiscountBand::Low => format!("Low ({}–{}%)", none, low),
            DiscountBand::Medium => format!("Medium ({}–{}%)", low, medium),
            DiscountBand::High => format!("High (>{}%)", medium),
        }
    }

    /// Thresholds must be finite and strictly increasing from a
    /// non-negative start.
    pub fn validate(&self) -> Result<(), String> {
        let all = [self.none_max, self.low_max, self.medium_max];
        if all.iter().any(|t| !t.is_finite()) {
            return Err("discount band thresholds must be finite".into());
        }
        if self.none_max < 0.0 {
            return Err("discount_bands.none_max must be >= 0".into());
        }
        if !(self.none_max < self.low_max && self.low_max < self.medium_max) {
            return Err(format!(
                "discount band thresholds must increase: {} < {} < {}",
                self.none_max, self.low_max, self.medium_max
            ));
        }
        Ok(())
    }
}

/// Fraction to a percent string without trailing zeros: 0.1 -> "10"
fn as_percent(fraction: f64) -> String {
    let pct = round_to(fraction * 100.0, 2);
    if pct.fract() == 0.0 {
        format!("{}", pct as i64)
    } else {
        format!("{}", pct)
    }
}
