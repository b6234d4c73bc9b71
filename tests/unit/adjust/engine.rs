use super::*;
use crate::{Segment, SegmentKind};

fn video(id: &str, start: i64, duration: i64) -> Segment {
    Segment::new(
        id,
        SegmentKind::Video,
        Timerange::new(start, duration),
        Timerange::new(0, duration),
    )
}

/// `[0, 2000)` and `[3000, 4000)`.
fn two_segment_track() -> Track {
    let mut track = Track::new("v0", SegmentKind::Video, 0);
    track.add(video("a", 0, 2000)).unwrap();
    track.add(video("b", 3000, 1000)).unwrap();
    track
}

/// `[0, 2000)`, `[3000, 4000)` and `[4500, 5000)`.
fn three_segment_track() -> Track {
    let mut track = two_segment_track();
    track.add(video("c", 4500, 500)).unwrap();
    track
}

#[test]
fn resize_rejects_out_of_range_index() {
    let mut track = two_segment_track();
    let err = Resizer::resize(
        &mut track,
        2,
        Timerange::new(0, 1000),
        ShrinkMode::CutTail,
        &[],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TrimlineError::IndexOutOfRange { index: 2, len: 2 }
    ));
}

#[test]
fn equal_duration_replaces_source_only() {
    let mut track = two_segment_track();
    let new_source = Timerange::new(700, 2000);
    Resizer::resize(&mut track, 0, new_source, ShrinkMode::CutTail, &[]).unwrap();

    assert_eq!(track.segments()[0].target, Timerange::new(0, 2000));
    assert_eq!(track.segments()[0].source, new_source);
}

#[test]
fn cut_head_keeps_end_fixed() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(500, 1500),
        ShrinkMode::CutHead,
        &[],
    )
    .unwrap();

    let target = track.segments()[0].target;
    assert_eq!(target, Timerange::new(500, 1500));
    assert_eq!(target.end(), 2000);
    assert_eq!(track.segments()[0].source, Timerange::new(500, 1500));
}

#[test]
fn cut_tail_keeps_start_fixed() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 1500),
        ShrinkMode::CutTail,
        &[],
    )
    .unwrap();

    assert_eq!(track.segments()[0].target, Timerange::new(0, 1500));
    assert_eq!(track.segments()[1].target, Timerange::new(3000, 1000));
}

#[test]
fn cut_tail_align_shifts_every_later_segment_left() {
    let mut track = three_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 1500),
        ShrinkMode::CutTailAlign,
        &[],
    )
    .unwrap();

    assert_eq!(track.segments()[0].target, Timerange::new(0, 1500));
    assert_eq!(track.segments()[1].target, Timerange::new(2500, 1000));
    assert_eq!(track.segments()[2].target, Timerange::new(4000, 500));
}

#[test]
fn shrink_contracts_around_midpoint_with_odd_delta() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 1995),
        ShrinkMode::Shrink,
        &[],
    )
    .unwrap();

    // delta 5: start moves by 2, the odd unit comes out of the duration.
    assert_eq!(track.segments()[0].target, Timerange::new(2, 1995));
}

#[test]
fn shrink_to_zero_duration_is_tolerated() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 0),
        ShrinkMode::CutTail,
        &[],
    )
    .unwrap();

    assert!(track.segments()[0].target.is_empty());
    assert_eq!(track.end_time(), 4000);
}

#[test]
fn extend_head_uses_predecessor_end_as_floor() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        1,
        Timerange::new(0, 2000),
        ShrinkMode::CutTail,
        &[ExtendMode::ExtendHead],
    )
    .unwrap();

    // delta 1000 against a gap of exactly 1000: feasible, lands on a.end().
    assert_eq!(track.segments()[1].target, Timerange::new(2000, 2000));
}

#[test]
fn extend_head_floor_is_zero_for_first_segment() {
    let mut track = Track::new("v0", SegmentKind::Video, 0);
    track.add(video("a", 1000, 500)).unwrap();

    let err = Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 2500),
        ShrinkMode::CutTail,
        &[ExtendMode::ExtendHead],
    )
    .unwrap_err();
    assert!(matches!(err, TrimlineError::ExtendExhausted { .. }));

    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 1500),
        ShrinkMode::CutTail,
        &[ExtendMode::ExtendHead],
    )
    .unwrap();
    assert_eq!(track.segments()[0].target, Timerange::new(0, 1500));
}

#[test]
fn extend_modes_are_tried_in_caller_order() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 2500),
        ShrinkMode::CutTail,
        &[ExtendMode::ExtendHead, ExtendMode::ExtendTail],
    )
    .unwrap();

    // ExtendHead is infeasible at timeline zero; ExtendTail wins and the
    // start stays put.
    assert_eq!(track.segments()[0].target, Timerange::new(0, 2500));
}

#[test]
fn extend_tail_accepts_an_exact_fit() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 3000),
        ShrinkMode::CutTail,
        &[ExtendMode::ExtendTail],
    )
    .unwrap();

    assert_eq!(track.segments()[0].target.end(), 3000);
    assert_eq!(track.segments()[1].target, Timerange::new(3000, 1000));
}

#[test]
fn extend_exhausted_leaves_track_untouched() {
    let mut track = two_segment_track();
    let before = track.clone();

    let err = Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 4000),
        ShrinkMode::CutTail,
        &[ExtendMode::ExtendHead, ExtendMode::ExtendTail],
    )
    .unwrap_err();

    match err {
        TrimlineError::ExtendExhausted { id, needed } => {
            assert_eq!(id, "a");
            assert_eq!(needed, 2000);
        }
        other => panic!("expected ExtendExhausted, got {other:?}"),
    }
    assert_eq!(track, before);
}

#[test]
fn empty_extend_mode_list_is_exhausted() {
    let mut track = two_segment_track();
    let before = track.clone();
    let err = Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 2500),
        ShrinkMode::CutTail,
        &[],
    )
    .unwrap_err();
    assert!(matches!(err, TrimlineError::ExtendExhausted { .. }));
    assert_eq!(track, before);
}

#[test]
fn push_tail_always_succeeds_and_shifts_by_overshoot() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 4000),
        ShrinkMode::CutTail,
        &[ExtendMode::PushTail],
    )
    .unwrap();

    assert_eq!(track.segments()[0].target, Timerange::new(0, 4000));
    assert_eq!(track.segments()[1].target, Timerange::new(4000, 1000));
}

#[test]
fn push_tail_without_overshoot_leaves_neighbors_alone() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 2500),
        ShrinkMode::CutTail,
        &[ExtendMode::PushTail],
    )
    .unwrap();

    assert_eq!(track.segments()[0].target, Timerange::new(0, 2500));
    assert_eq!(track.segments()[1].target, Timerange::new(3000, 1000));
}

#[test]
fn push_tail_shift_is_uniform_and_preserves_gaps() {
    let mut track = three_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 4000),
        ShrinkMode::CutTail,
        &[ExtendMode::PushTail],
    )
    .unwrap();

    // Overshoot 1000; both later segments move by exactly that much and the
    // 500-unit gap between them survives.
    assert_eq!(track.segments()[1].target, Timerange::new(4000, 1000));
    assert_eq!(track.segments()[2].target, Timerange::new(5500, 500));
}

#[test]
fn push_tail_with_no_successor_grows_freely() {
    let mut track = Track::new("v0", SegmentKind::Video, 0);
    track.add(video("a", 0, 1000)).unwrap();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 9000),
        ShrinkMode::CutTail,
        &[ExtendMode::PushTail],
    )
    .unwrap();
    assert_eq!(track.end_time(), 9000);
}

#[test]
fn cut_material_tail_truncates_the_requested_source() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(100, 3000),
        ShrinkMode::CutTail,
        &[ExtendMode::CutMaterialTail],
    )
    .unwrap();

    assert_eq!(track.segments()[0].target, Timerange::new(0, 2000));
    assert_eq!(track.segments()[0].source, Timerange::new(100, 2000));
}

#[test]
fn infeasible_modes_fall_through_to_cut_material_tail() {
    let mut track = two_segment_track();
    Resizer::resize(
        &mut track,
        0,
        Timerange::new(0, 4000),
        ShrinkMode::CutTail,
        &[
            ExtendMode::ExtendHead,
            ExtendMode::ExtendTail,
            ExtendMode::CutMaterialTail,
        ],
    )
    .unwrap();

    assert_eq!(track.segments()[0].target, Timerange::new(0, 2000));
    assert_eq!(track.segments()[0].source, Timerange::new(0, 2000));
}

#[test]
fn mode_names_parse_back_to_their_modes() {
    assert_eq!(
        parse_shrink_mode("cut_tail_align").unwrap(),
        ShrinkMode::CutTailAlign
    );
    assert_eq!(parse_shrink_mode(" Shrink ").unwrap(), ShrinkMode::Shrink);
    assert_eq!(
        parse_extend_mode("push_tail").unwrap(),
        ExtendMode::PushTail
    );
    assert_eq!(
        parse_extend_mode(ExtendMode::CutMaterialTail.mode_name()).unwrap(),
        ExtendMode::CutMaterialTail
    );
}

#[test]
fn unknown_mode_names_are_unsupported() {
    let err = parse_shrink_mode("grow_both").unwrap_err();
    match err {
        TrimlineError::UnsupportedMode(name) => assert_eq!(name, "grow_both"),
        other => panic!("expected UnsupportedMode, got {other:?}"),
    }
    assert!(matches!(
        parse_extend_mode("ripple"),
        Err(TrimlineError::UnsupportedMode(_))
    ));
}
