//! Trimline is a timeline segment engine for video-editor tooling.
//!
//! Trimline holds ordered collections of non-overlapping, time-bounded
//! segments on kind-homogeneous tracks, and adjusts how long a segment's
//! underlying source material occupies while preserving the track's
//! non-overlap invariant, optionally cascading the change onto later
//! segments.
//!
//! # Engine overview
//!
//! 1. **Place**: `Segment + Track::add -> stored, start-sorted sequence`
//!    (kind and overlap checked on insertion)
//! 2. **Adjust**: `Resizer::resize(track, index, new_source, policy)` mutates
//!    the addressed segment in place, under a shrink policy ([`ShrinkMode`])
//!    or an ordered list of extend policies ([`ExtendMode`])
//! 3. **Read**: `Track::segments` / `Timeline` expose the sequence for a
//!    downstream exporter; this crate owns no wire format of its own
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Transactional**: every `add`/`resize` either leaves the track in a new
//!   invariant-satisfying state or exactly as it was.
//! - **Synchronous**: no I/O, no locking, no suspension point anywhere; a
//!   call assumes exclusive access to its track for its own duration.
//! - **Closed kinds and modes**: segment kinds and resize policies are plain
//!   enums compared by equality; unknown names exist only at the explicit
//!   parsing boundary ([`parse_shrink_mode`] / [`parse_extend_mode`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod adjust;
mod foundation;
mod timeline;

pub use adjust::engine::{
    ExtendMode, Resizer, ShrinkMode, parse_extend_mode, parse_shrink_mode,
};
pub use foundation::core::Timerange;
pub use foundation::error::{TrimlineError, TrimlineResult};
pub use timeline::dsl::{TimelineBuilder, TrackBuilder};
pub use timeline::model::{Segment, SegmentKind, Timeline, Track};
