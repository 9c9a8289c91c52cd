//! Entity definitions for the sales dataset
//!
//! Four entities:
//! - Customer: dimension, keyed by customer_id
//! - Order: fact, one row per order line
//! - Location: dimension, keyed by postal_code
//! - Product: dimension, keyed by product_id

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Numeric postal code used as the Location join key
///
/// Codes are integers, so leading zeros do not survive: `"07090"` loads as
/// 7090 and cleaned tables write it back as `7090`. Orders and locations
/// coerce the same way, so joins still match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PostalCode(pub u32);

impl PostalCode {
    /// Coerces a raw JSON scalar into a postal code.
    ///
    /// Accepts non-negative integral numbers and strings that parse as such
    /// after trimming. Everything else is malformed.
    pub fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(v) = n.as_u64() {
                    return u32::try_from(v).ok().map(PostalCode);
                }
                let f = n.as_f64()?;
                if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
                    Some(PostalCode(f as u32))
                } else {
                    None
                }
            }
            Value::String(s) => s.trim().parse::<u32>().ok().map(PostalCode),
            _ => None,
        }
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        PostalCode::coerce(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("postal code is not numeric: {}", raw))
        })
    }
}

/// Calendar month, ordered chronologically and rendered as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub customer_name: String,
}

/// One order line. Monetary values are kept unrounded; rounding happens
/// only when a result row is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub row_id: i64,
    pub order_id: String,
    pub order_date: NaiveDate,
    pub ship_date: NaiveDate,
    pub ship_mode: String,
    pub customer_id: String,
    pub segment: String,
    pub postal_code: PostalCode,
    pub product_id: String,
    pub sales: f64,
    pub quantity: i64,
    pub discount: f64,
    pub profit: f64,
}

impl Order {
    /// Days between ordering and shipping. Negative when the ship date
    /// precedes the order date.
    pub fn shipping_days(&self) -> i64 {
        (self.ship_date - self.order_date).num_days()
    }

    pub fn period(&self) -> Period {
        Period::of(self.order_date)
    }

    pub fn in_year(&self, year: i32) -> bool {
        self.order_date.year() == year
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub postal_code: PostalCode,
    pub city: String,
    pub state: String,
    pub region: String,
    pub country_region: String,
}

/// Location row as it arrives, before postal code coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub postal_code: Value,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country_region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub product_name: String,
}

impl Product {
    /// Attribute name/value pairs, used for header row detection
    pub fn attributes(&self) -> [(&'static str, &str); 4] {
        [
            ("product_id", self.product_id.as_str()),
            ("category", self.category.as_str()),
            ("sub_category", self.sub_category.as_str()),
            ("product_name", self.product_name.as_str()),
        ]
    }
}
