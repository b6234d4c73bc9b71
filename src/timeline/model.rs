use std::collections::BTreeSet;

use crate::{
    foundation::core::Timerange,
    foundation::error::{TrimlineError, TrimlineResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Closed discriminant for what a segment carries.
///
/// Tracks are monomorphic: a track accepts exactly one kind, checked by plain
/// equality at [`Track::add`] time. The engine never inspects what a kind
/// *means*; content semantics belong to the surrounding system.
pub enum SegmentKind {
    /// Video material.
    Video,
    /// Audio material.
    Audio,
    /// Text overlay.
    Text,
    /// Standalone effect.
    Effect,
    /// Standalone filter.
    Filter,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A time-bounded member of a track.
///
/// `target` is where the segment sits on the track's timeline; `source` is
/// which slice of the underlying material it draws from. The two durations
/// may legitimately differ when a playback-speed factor applies elsewhere in
/// the system; this crate only ever reads and writes them as a linked pair
/// and never infers a speed from their ratio.
pub struct Segment {
    /// Stable identifier, used for diagnostics and equality only, never for
    /// ordering.
    pub id: String,
    /// What the segment carries.
    pub kind: SegmentKind,
    /// Placement on the track timeline.
    pub target: Timerange,
    /// Slice of the underlying material in use.
    pub source: Timerange,
}

impl Segment {
    /// Build a segment with an explicit source range.
    pub fn new(
        id: impl Into<String>,
        kind: SegmentKind,
        target: Timerange,
        source: Timerange,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            target,
            source,
        }
    }

    /// Build a segment whose source spans `(0, target.duration)`.
    ///
    /// For kinds with no backing material (text, effects, filters) the source
    /// slice is notional; defaulting it keeps duration adjustment total over
    /// stored segments.
    pub fn sized(id: impl Into<String>, kind: SegmentKind, target: Timerange) -> Self {
        Self {
            id: id.into(),
            kind,
            target,
            source: Timerange::new(0, target.duration),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// An ordered, kind-homogeneous, non-overlapping collection of segments.
///
/// Segments are stored sorted by `target.start` ascending and are only
/// reachable for mutation through [`Track::add`] and the duration-adjustment
/// engine, both of which preserve the non-overlap invariant.
pub struct Track {
    /// Track name for authoring/debugging.
    pub name: String,
    /// Compositing order hint for downstream consumers; not interpreted here.
    #[serde(default)]
    pub render_priority: i32,
    accepted_kind: SegmentKind,
    segments: Vec<Segment>,
}

impl Track {
    /// Create an empty track accepting one segment kind.
    pub fn new(name: impl Into<String>, accepted_kind: SegmentKind, render_priority: i32) -> Self {
        Self {
            name: name.into(),
            render_priority,
            accepted_kind,
            segments: Vec::new(),
        }
    }

    /// Kind this track was constructed to accept.
    pub fn accepted_kind(&self) -> SegmentKind {
        self.accepted_kind
    }

    /// Stored segments, sorted by `target.start` ascending.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    /// Number of stored segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the track holds no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Insert a segment, keeping the sequence sorted by `target.start`.
    ///
    /// Fails with [`TrimlineError::KindMismatch`] if the segment's kind is not
    /// the accepted one, and with [`TrimlineError::Overlap`] if its target
    /// range collides with a stored member. A failed call mutates nothing.
    pub fn add(&mut self, segment: Segment) -> TrimlineResult<()> {
        if segment.kind != self.accepted_kind {
            return Err(TrimlineError::KindMismatch {
                expected: self.accepted_kind,
                found: segment.kind,
                id: segment.id,
            });
        }
        if let Some(existing) = self
            .segments
            .iter()
            .find(|s| s.target.overlaps(segment.target))
        {
            return Err(TrimlineError::Overlap {
                id: segment.id,
                other: existing.id.clone(),
            });
        }
        let at = self
            .segments
            .partition_point(|s| s.target.start <= segment.target.start);
        self.segments.insert(at, segment);
        Ok(())
    }

    /// Largest `target.end()` over stored segments, `0` when empty.
    ///
    /// Scans the whole sequence rather than reading the last element; members
    /// are not assumed pre-sorted by end.
    pub fn end_time(&self) -> i64 {
        self.segments
            .iter()
            .map(|s| s.target.end())
            .max()
            .unwrap_or(0)
    }

    /// Validate track invariants over the stored sequence.
    ///
    /// [`Track::add`] already enforces these on insertion; this re-check
    /// exists for tracks that arrived through deserialization.
    pub fn validate(&self) -> TrimlineResult<()> {
        if self.name.trim().is_empty() {
            return Err(TrimlineError::validation("track name must be non-empty"));
        }
        for seg in &self.segments {
            if seg.kind != self.accepted_kind {
                return Err(TrimlineError::validation(format!(
                    "segment '{}' kind {:?} does not match track accepted kind {:?}",
                    seg.id, seg.kind, self.accepted_kind
                )));
            }
            if seg.target.duration < 0 || seg.source.duration < 0 {
                return Err(TrimlineError::validation(format!(
                    "segment '{}' has a negative duration",
                    seg.id
                )));
            }
        }
        for pair in self.segments.windows(2) {
            if pair[1].target.start < pair[0].target.start {
                return Err(TrimlineError::validation(format!(
                    "segments '{}' and '{}' are not sorted by target start",
                    pair[0].id, pair[1].id
                )));
            }
        }
        for (i, a) in self.segments.iter().enumerate() {
            for b in &self.segments[i + 1..] {
                if a.target.overlaps(b.target) {
                    return Err(TrimlineError::validation(format!(
                        "segments '{}' and '{}' overlap",
                        a.id, b.id
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Root aggregate of tracks, the unit a downstream exporter serializes.
///
/// The duration-adjustment engine never iterates a timeline; it operates on
/// one track at a time through [`Timeline::tracks_mut`].
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Member tracks in insertion order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Mutable access to member tracks.
    pub fn tracks_mut(&mut self) -> &mut [Track] {
        &mut self.tracks
    }

    /// Largest end time over member tracks, `0` when empty.
    pub fn end_time(&self) -> i64 {
        self.tracks.iter().map(Track::end_time).max().unwrap_or(0)
    }

    /// Validate every member track plus timeline-wide segment id uniqueness.
    pub fn validate(&self) -> TrimlineResult<()> {
        let mut seen = BTreeSet::new();
        for track in &self.tracks {
            track.validate()?;
            for seg in track.segments() {
                if !seen.insert(seg.id.as_str()) {
                    return Err(TrimlineError::validation(format!(
                        "duplicate segment id '{}'",
                        seg.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> TrimlineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TrimlineError::serde(e.to_string()))
    }

    /// Deserialize from JSON and validate the result.
    pub fn from_json(s: &str) -> TrimlineResult<Self> {
        let timeline: Self =
            serde_json::from_str(s).map_err(|e| TrimlineError::serde(e.to_string()))?;
        timeline.validate()?;
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
