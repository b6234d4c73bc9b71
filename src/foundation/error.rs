use crate::timeline::model::SegmentKind;

/// Convenience result type used across Trimline.
pub type TrimlineResult<T> = Result<T, TrimlineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TrimlineError {
    /// A segment's kind disagrees with the track's accepted kind.
    #[error("kind mismatch: track accepts {expected:?}, segment '{id}' is {found:?}")]
    KindMismatch {
        /// Kind the track was constructed to accept.
        expected: SegmentKind,
        /// Kind of the rejected segment.
        found: SegmentKind,
        /// Id of the rejected segment.
        id: String,
    },

    /// A candidate segment's target range collides with a stored member.
    #[error("overlap: segment '{id}' collides with stored segment '{other}'")]
    Overlap {
        /// Id of the rejected segment.
        id: String,
        /// Id of the stored segment it collides with.
        other: String,
    },

    /// A resize call addressed a segment index the track does not have.
    #[error("segment index {index} out of range (track holds {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of segments in the track.
        len: usize,
    },

    /// A shrink or extend mode name was not recognized.
    #[error("unsupported mode '{0}'")]
    UnsupportedMode(String),

    /// Every supplied extend mode failed its feasibility check.
    #[error("extend exhausted: no supplied mode could grow segment '{id}' by {needed}")]
    ExtendExhausted {
        /// Id of the segment that could not be extended.
        id: String,
        /// Extra duration the caller asked for.
        needed: i64,
    },

    /// Invalid user-provided or deserialized timeline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrimlineError {
    /// Build a [`TrimlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrimlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
