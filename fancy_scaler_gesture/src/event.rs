// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::session::ScaleSpans;

/// A recognized gesture primitive, as produced by the host's scale and
/// single-finger recognizers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// First pointer went down; starts a new sequence.
    PointerDown,
    /// Last pointer went up.
    PointerUp,
    /// A pinch started around `focus`.
    ScaleBegin {
        /// Focal point in frame coordinates.
        focus: Point,
    },
    /// A pinch moved.
    Scale(ScaleSpans),
    /// The pinch ended.
    ScaleEnd,
    /// A single finger moved by `distance` (previous minus current position).
    Scroll {
        /// Distance travelled since the last scroll event.
        distance: Vec2,
    },
    /// Double tap at `position`.
    DoubleTap {
        /// Tap position in frame coordinates.
        position: Point,
    },
}
