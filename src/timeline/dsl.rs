use crate::{
    foundation::error::TrimlineResult,
    timeline::model::{Segment, SegmentKind, Timeline, Track},
};

/// Consuming builder for a [`Track`].
///
/// Every queued segment is funnelled through [`Track::add`] at build time, so
/// a track that violates the kind or overlap invariants cannot be produced.
pub struct TrackBuilder {
    name: String,
    accepted_kind: SegmentKind,
    render_priority: i32,
    segments: Vec<Segment>,
}

impl TrackBuilder {
    /// Start a builder for a track accepting `kind`.
    pub fn new(name: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            name: name.into(),
            accepted_kind: kind,
            render_priority: 0,
            segments: Vec::new(),
        }
    }

    /// Set the compositing order hint.
    pub fn render_priority(mut self, priority: i32) -> Self {
        self.render_priority = priority;
        self
    }

    /// Queue a segment for insertion.
    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Build the track, inserting queued segments in order.
    pub fn build(self) -> TrimlineResult<Track> {
        let mut track = Track::new(self.name, self.accepted_kind, self.render_priority);
        for segment in self.segments {
            track.add(segment)?;
        }
        track.validate()?;
        Ok(track)
    }
}

/// Consuming builder for a [`Timeline`].
pub struct TimelineBuilder {
    tracks: Vec<Track>,
}

impl TimelineBuilder {
    /// Start an empty timeline builder.
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Append a finished track.
    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Build and validate the timeline.
    pub fn build(self) -> TrimlineResult<Timeline> {
        let mut timeline = Timeline::new();
        for track in self.tracks {
            timeline.add_track(track);
        }
        timeline.validate()?;
        Ok(timeline)
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
