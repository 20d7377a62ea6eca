//! Stat counter parsing and animation state.
//!
//! A counter's target is parsed once from its authored text into an
//! immutable [`CounterTarget`]; animation runs always start from that
//! record, never from the mutated display text, so repeated reveal cycles
//! cannot drift the target.
//!
//! ```text
//! "5K+"  ──parse──▶  CounterTarget { value: 5000, thousands, plus }
//!                          │
//!              CounterAnimation::frame(now)
//!                          │
//!                          ▼
//!        "0K+" … "2K+" … "4K+" … "5K+"   (done at progress == 1)
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use verdant_types::formatting::{format_compact, format_count, format_pct};

#[cfg(test)]
mod counter_tests;

/// Default animation duration in milliseconds.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CounterParseError {
    /// The numeric remainder was not a valid number (e.g. two decimal points).
    #[error("unparseable counter value {0:?}")]
    BadNumber(String),
}

/// Immutable counter target: numeric value plus unit classification.
///
/// The three unit flags are independent; `thousands` scales the parsed
/// value by 1000 so the animation interpolates over the true magnitude.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterTarget {
    /// Animation end value, thousands scaling already applied.
    pub value: f64,
    pub percent: bool,
    pub plus: bool,
    pub thousands: bool,
}

impl CounterTarget {
    /// Parse a displayed counter text like `"500+"`, `"98%"`, or `"5K+"`.
    ///
    /// All characters except digits and `.` are stripped before parsing.
    /// Text with no digits parses to a target of 0 (animates 0 to 0, not an
    /// error); a remainder that is still not a number is an error.
    pub fn parse(text: &str) -> Result<Self, CounterParseError> {
        let percent = text.contains('%');
        let plus = text.contains('+');
        let thousands = text.contains('K');

        let digits: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        let mut value = if digits.is_empty() {
            0.0
        } else {
            digits
                .parse::<f64>()
                .map_err(|_| CounterParseError::BadNumber(text.to_string()))?
        };
        if thousands {
            value *= 1000.0;
        }

        Ok(Self {
            value,
            percent,
            plus,
            thousands,
        })
    }

    /// Parse, degrading errors to a zero target (logged at debug level).
    pub fn parse_or_zero(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|err| {
            tracing::debug!("counter text degraded to zero: {err}");
            Self {
                value: 0.0,
                percent: text.contains('%'),
                plus: text.contains('+'),
                thousands: text.contains('K'),
            }
        })
    }

    /// Format an interpolated value per this target's unit classification.
    ///
    /// Thousands takes precedence over percent, matching the flag order the
    /// page's stat widgets rely on.
    pub fn format(&self, current: f64) -> String {
        if self.thousands {
            format_compact(current, self.plus)
        } else if self.percent {
            format_pct(current)
        } else {
            format_count(current, self.plus)
        }
    }

    /// The text the animation ends on.
    pub fn final_text(&self) -> String {
        self.format(self.value)
    }
}

/// One rendered animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    /// Text to write to the counter node.
    pub text: String,
    /// Animation progress in `[0, 1]`.
    pub progress: f64,
    /// True on the terminal frame; callers stop scheduling after it.
    pub done: bool,
}

/// Frame-by-frame animation state for one counter run.
///
/// The first `frame` call anchors the start time; progress is clamped so it
/// never decreases even if the host hands back a stale timestamp.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: CounterTarget,
    duration_ms: f64,
    started_at: Option<f64>,
    last_progress: f64,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: CounterTarget, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
            last_progress: 0.0,
        }
    }

    pub fn target(&self) -> &CounterTarget {
        &self.target
    }

    pub fn is_finished(&self) -> bool {
        self.last_progress >= 1.0
    }

    /// Advance to the given monotonic timestamp and render a frame.
    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        };
        let progress = progress.max(self.last_progress);
        self.last_progress = progress;

        CounterFrame {
            text: self.target.format(self.target.value * progress),
            progress,
            done: progress >= 1.0,
        }
    }
}
