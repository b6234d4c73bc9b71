use crate::{
    foundation::core::Timerange,
    foundation::error::{TrimlineError, TrimlineResult},
    timeline::model::Track,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Policy selecting how a segment's target contracts when its source
/// duration decreases.
///
/// Every shrink mode succeeds structurally; removing length cannot introduce
/// a new overlap while the track invariant holds beforehand.
pub enum ShrinkMode {
    /// Keep the end fixed; trim material from the head (`start += delta`).
    CutHead,
    /// Keep the start fixed; trim material from the tail.
    CutTail,
    /// As [`ShrinkMode::CutTail`], then shift every later segment left by
    /// `delta`, closing the gap the shrink just opened.
    CutTailAlign,
    /// Contract around the midpoint; the odd unit of `delta`, if any, is
    /// absorbed by the duration reduction.
    Shrink,
}

impl ShrinkMode {
    /// Canonical name accepted by [`parse_shrink_mode`].
    pub fn mode_name(self) -> &'static str {
        match self {
            ShrinkMode::CutHead => "cut_head",
            ShrinkMode::CutTail => "cut_tail",
            ShrinkMode::CutTailAlign => "cut_tail_align",
            ShrinkMode::Shrink => "shrink",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Policy selecting how a segment's target grows when its source duration
/// increases.
///
/// Modes are tried in caller-supplied order until one succeeds.
/// [`ExtendMode::PushTail`] and [`ExtendMode::CutMaterialTail`] always
/// succeed, so a caller wanting a total operation lists one of them last.
pub enum ExtendMode {
    /// Grow leftward iff the gap to the predecessor (or timeline zero)
    /// admits the full `delta`.
    ExtendHead,
    /// Grow rightward iff the gap to the successor admits the full `delta`;
    /// unbounded when the segment is last.
    ExtendTail,
    /// Grow rightward unconditionally, shifting every later segment right by
    /// the overshoot past the successor's start, if any.
    PushTail,
    /// Leave the target untouched and truncate the requested source slice
    /// down to the current target duration instead.
    CutMaterialTail,
}

impl ExtendMode {
    /// Canonical name accepted by [`parse_extend_mode`].
    pub fn mode_name(self) -> &'static str {
        match self {
            ExtendMode::ExtendHead => "extend_head",
            ExtendMode::ExtendTail => "extend_tail",
            ExtendMode::PushTail => "push_tail",
            ExtendMode::CutMaterialTail => "cut_material_tail",
        }
    }
}

/// Look up a shrink mode from its canonical name.
///
/// Unrecognized names are a caller bug, reported as
/// [`TrimlineError::UnsupportedMode`].
pub fn parse_shrink_mode(name: &str) -> TrimlineResult<ShrinkMode> {
    match name.trim().to_ascii_lowercase().as_str() {
        "cut_head" => Ok(ShrinkMode::CutHead),
        "cut_tail" => Ok(ShrinkMode::CutTail),
        "cut_tail_align" => Ok(ShrinkMode::CutTailAlign),
        "shrink" => Ok(ShrinkMode::Shrink),
        other => Err(TrimlineError::UnsupportedMode(other.to_string())),
    }
}

/// Look up an extend mode from its canonical name.
pub fn parse_extend_mode(name: &str) -> TrimlineResult<ExtendMode> {
    match name.trim().to_ascii_lowercase().as_str() {
        "extend_head" => Ok(ExtendMode::ExtendHead),
        "extend_tail" => Ok(ExtendMode::ExtendTail),
        "push_tail" => Ok(ExtendMode::PushTail),
        "cut_material_tail" => Ok(ExtendMode::CutMaterialTail),
        other => Err(TrimlineError::UnsupportedMode(other.to_string())),
    }
}

/// Stateless duration-adjustment engine over one track's segment sequence.
pub struct Resizer;

impl Resizer {
    #[tracing::instrument(skip(track))]
    /// Change how long the segment at `index` occupies, in place.
    ///
    /// `new_source` is the material slice the caller wants the segment to
    /// draw from; its duration drives the adjustment. Equal durations replace
    /// the source and touch nothing else. A smaller duration dispatches on
    /// `shrink_mode`; a larger one tries `extend_modes` in order and stops at
    /// the first that succeeds.
    ///
    /// The call is a single transaction: on any error the track is left
    /// exactly as it was.
    pub fn resize(
        track: &mut Track,
        index: usize,
        new_source: Timerange,
        shrink_mode: ShrinkMode,
        extend_modes: &[ExtendMode],
    ) -> TrimlineResult<()> {
        let len = track.len();
        if index >= len {
            return Err(TrimlineError::IndexOutOfRange { index, len });
        }

        let old_duration = track.segments()[index].target.duration;
        let new_duration = new_source.duration;

        if new_duration == old_duration {
            track.segments_mut()[index].source = new_source;
            return Ok(());
        }

        if new_duration < old_duration {
            apply_shrink(track, index, old_duration - new_duration, shrink_mode);
            track.segments_mut()[index].source = new_source;
            return Ok(());
        }

        apply_extend(
            track,
            index,
            new_duration - old_duration,
            new_source,
            extend_modes,
        )
    }
}

fn apply_shrink(track: &mut Track, index: usize, delta: i64, mode: ShrinkMode) {
    let segments = track.segments_mut();
    match mode {
        ShrinkMode::CutHead => {
            let target = &mut segments[index].target;
            target.start += delta;
            target.duration -= delta;
        }
        ShrinkMode::CutTail => {
            segments[index].target.duration -= delta;
        }
        ShrinkMode::CutTailAlign => {
            segments[index].target.duration -= delta;
            for seg in &mut segments[index + 1..] {
                seg.target = seg.target.shift(-delta);
            }
        }
        ShrinkMode::Shrink => {
            let target = &mut segments[index].target;
            target.start += delta / 2;
            target.duration -= delta;
        }
    }
}

fn apply_extend(
    track: &mut Track,
    index: usize,
    delta: i64,
    new_source: Timerange,
    modes: &[ExtendMode],
) -> TrimlineResult<()> {
    for &mode in modes {
        match mode {
            ExtendMode::ExtendHead => {
                let floor = if index == 0 {
                    0
                } else {
                    track.segments()[index - 1].target.end()
                };
                if track.segments()[index].target.start - delta >= floor {
                    let seg = &mut track.segments_mut()[index];
                    seg.target.start -= delta;
                    seg.target.duration += delta;
                    seg.source = new_source;
                    return Ok(());
                }
            }
            ExtendMode::ExtendTail => {
                let segments = track.segments();
                let fits = match segments.get(index + 1) {
                    Some(next) => segments[index].target.end() + delta <= next.target.start,
                    None => true,
                };
                if fits {
                    let seg = &mut track.segments_mut()[index];
                    seg.target.duration += delta;
                    seg.source = new_source;
                    return Ok(());
                }
            }
            ExtendMode::PushTail => {
                let segments = track.segments_mut();
                segments[index].target.duration += delta;
                let new_end = segments[index].target.end();
                if let Some(next_start) = segments.get(index + 1).map(|s| s.target.start) {
                    let overshoot = new_end - next_start;
                    if overshoot > 0 {
                        for seg in &mut segments[index + 1..] {
                            seg.target = seg.target.shift(overshoot);
                        }
                    }
                }
                segments[index].source = new_source;
                return Ok(());
            }
            ExtendMode::CutMaterialTail => {
                let seg = &mut track.segments_mut()[index];
                seg.source = Timerange::new(new_source.start, seg.target.duration);
                return Ok(());
            }
        }
    }

    Err(TrimlineError::ExtendExhausted {
        id: track.segments()[index].id.clone(),
        needed: delta,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/adjust/engine.rs"]
mod tests;
