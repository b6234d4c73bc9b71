#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
/// A half-open span on the timeline: start offset plus duration.
///
/// Both fields are in the same fixed time unit (microseconds by convention);
/// the type itself does not interpret the unit. Construction performs no
/// validation; placement invariants are enforced at the [`crate::Track`]
/// boundary, not here.
pub struct Timerange {
    /// Offset from timeline zero.
    pub start: i64,
    /// Length of the span; semantically `>= 0`.
    pub duration: i64,
}

impl Timerange {
    /// Build a timerange from a start offset and a duration.
    pub fn new(start: i64, duration: i64) -> Self {
        Self { start, duration }
    }

    /// Exclusive end of the span: `start + duration`.
    pub fn end(self) -> i64 {
        self.start + self.duration
    }

    /// Whether two spans intersect as open intervals.
    ///
    /// Touching endpoints (`self.end() == other.start`) do not overlap. A
    /// zero-duration span sitting exactly on another's boundary does not
    /// overlap it; a zero-duration span strictly inside another's open
    /// interval does.
    pub fn overlaps(self, other: Timerange) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Same duration, start moved by `delta` (may be negative).
    pub fn shift(self, delta: i64) -> Self {
        Self {
            start: self.start + delta,
            duration: self.duration,
        }
    }

    /// Whether the span has zero duration.
    pub fn is_empty(self) -> bool {
        self.duration == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
