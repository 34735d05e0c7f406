//! Time Utilities
//!
//! Parsing of human-readable durations and the microsecond `Timerange`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::{CoreError, CoreResult, Microseconds, SEC};

/// Unit suffixes accepted by [`tim`], in the order they must appear.
const UNITS: [(char, f64); 3] = [('h', 3600.0 * SEC as f64), ('m', 60.0 * SEC as f64), ('s', SEC as f64)];

/// Parses a duration such as `"1.5s"`, `"1m30s"` or `"-2h"` into microseconds.
///
/// Units must appear in h/m/s order; each is optional but at least one is required.
/// The result is rounded to the nearest microsecond (ties to even).
pub fn tim(input: &str) -> CoreResult<Microseconds> {
    let normalized = input.trim().to_lowercase();
    let (sign, body) = match normalized.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, normalized.as_str()),
    };

    let mut rest = body;
    let mut total = 0.0;
    let mut matched = false;
    for (unit, factor) in UNITS {
        let Some(idx) = rest.find(unit) else {
            continue;
        };
        let amount: f64 = rest[..idx]
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidTimeString(input.to_string()))?;
        total += amount * factor;
        rest = &rest[idx + 1..];
        matched = true;
    }

    let total = total.round_ties_even();
    // 2^63 itself does not fit in an i64
    if !matched || !rest.trim().is_empty() || !total.is_finite() || total.abs() >= i64::MAX as f64 {
        return Err(CoreError::InvalidTimeString(input.to_string()));
    }

    Ok(total as Microseconds * sign)
}

/// A time value given either directly in microseconds or as text for [`tim`].
#[derive(Clone, Debug, PartialEq)]
pub enum TimeValue {
    Micros(Microseconds),
    Text(String),
}

impl TimeValue {
    /// Resolves the value to microseconds
    pub fn to_micros(&self) -> CoreResult<Microseconds> {
        match self {
            Self::Micros(us) => Ok(*us),
            Self::Text(text) => tim(text),
        }
    }
}

impl From<Microseconds> for TimeValue {
    fn from(us: Microseconds) -> Self {
        Self::Micros(us)
    }
}

impl From<&str> for TimeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// =============================================================================
// Timerange
// =============================================================================

/// A span of time, in microseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timerange {
    /// Start time
    pub start: Microseconds,
    /// Length of the span
    pub duration: Microseconds,
}

impl Timerange {
    pub fn new(start: Microseconds, duration: Microseconds) -> Self {
        Self { start, duration }
    }

    /// Returns the exclusive end time
    pub fn end(&self) -> Microseconds {
        self.start + self.duration
    }

    pub fn export_json(&self) -> Value {
        json!({
            "duration": self.duration,
            "start": self.start,
        })
    }
}

/// Builds a [`Timerange`] from a start and a duration, each in µs or as text.
pub fn trange(start: impl Into<TimeValue>, duration: impl Into<TimeValue>) -> CoreResult<Timerange> {
    Ok(Timerange::new(
        start.into().to_micros()?,
        duration.into().to_micros()?,
    ))
}
