// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sequence gesture state.
//!
//! A pointer sequence runs from a pointer-down until the next pointer-down.
//! Within one sequence at most one of scaling and panning is active, and once
//! a pinch has been seen the sequence stays [`ScaleSession::Consumed`] so the
//! trailing single-finger movement of a pinch is never read as a pan.

use kurbo::Point;

/// Which gesture currently drives the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A two-finger pinch is changing the scale.
    Scaling,
    /// A single-finger drag is changing the translation.
    Panning,
}

/// Whether the current pointer sequence has been claimed by a pinch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleSession {
    /// No pinch yet; pan and double-tap are accepted.
    #[default]
    Fresh,
    /// A pinch ran in this sequence; pan and double-tap are ignored until the
    /// next pointer-down.
    Consumed,
}

impl ScaleSession {
    /// Returns `true` once a pinch has claimed the sequence.
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Span measurements reported by a scale gesture recognizer for one step.
///
/// `*_span` is the distance between the pointers; the `_x`/`_y` variants are
/// its projections on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSpans {
    /// Current pointer span.
    pub current_span: f64,
    /// Current horizontal span.
    pub current_span_x: f64,
    /// Current vertical span.
    pub current_span_y: f64,
    /// Pointer span at the previous step.
    pub previous_span: f64,
    /// Horizontal span at the previous step.
    pub previous_span_x: f64,
    /// Vertical span at the previous step.
    pub previous_span_y: f64,
    /// Focal point of the gesture at this step, in frame coordinates.
    pub focus: Point,
}

impl ScaleSpans {
    /// Scale ratio for this step on the X axis.
    #[must_use]
    pub fn ratio_x(&self) -> f64 {
        step_ratio(
            self.current_span + self.current_span_x,
            self.previous_span + self.previous_span_x,
        )
    }

    /// Scale ratio for this step on the Y axis.
    #[must_use]
    pub fn ratio_y(&self) -> f64 {
        step_ratio(
            self.current_span + self.current_span_y,
            self.previous_span + self.previous_span_y,
        )
    }
}

// Degenerate spans leave the axis untouched.
fn step_ratio(current: f64, previous: f64) -> f64 {
    if previous <= 0.0 {
        return 1.0;
    }
    let ratio = current / previous;
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}
