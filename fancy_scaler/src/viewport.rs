// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};

use crate::factor::{AxisFactor, ScaleFactor};
use crate::policy::SizingPolicy;
use crate::size::{FrameSize, SourceSize};

/// Fit/zoom/pan constraint state for one display surface.
///
/// `ViewportModel` is not ready until both a frame size and a source size
/// have been supplied. Every time either of them changes the two
/// [`AxisFactor`]s are rebuilt from scratch: the scale drops to its floor and
/// the translation is re-centered. Nothing of the previous zoom or pan is
/// carried across a rebuild.
#[derive(Clone, Debug, Default)]
pub struct ViewportModel {
    frame: Option<FrameSize>,
    source: Option<(SourceSize, SizingPolicy)>,
    axes: Option<(AxisFactor, AxisFactor)>,
}

impl ViewportModel {
    /// Creates an empty model that is not ready yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the frame size and rebuilds the axes.
    ///
    /// Returns `true` if the model is ready afterwards.
    pub fn set_frame_size(&mut self, frame: FrameSize) -> bool {
        self.frame = Some(frame);
        self.rebuild()
    }

    /// Replaces the source size and sizing policy and rebuilds the axes.
    ///
    /// Returns `true` if the model is ready afterwards.
    pub fn set_source(&mut self, source: SourceSize, policy: SizingPolicy) -> bool {
        self.source = Some((source, policy));
        self.rebuild()
    }

    /// Returns `true` once both a frame and a source are known.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.axes.is_some()
    }

    /// Current frame size, if any.
    #[must_use]
    pub fn frame_size(&self) -> Option<FrameSize> {
        self.frame
    }

    /// Current source size, if any.
    #[must_use]
    pub fn source_size(&self) -> Option<SourceSize> {
        self.source.map(|(source, _)| source)
    }

    /// Current sizing policy, if a source has been set.
    #[must_use]
    pub fn sizing_policy(&self) -> Option<SizingPolicy> {
        self.source.map(|(_, policy)| policy)
    }

    /// Horizontal axis state.
    #[must_use]
    pub fn axis_x(&self) -> Option<&AxisFactor> {
        self.axes.as_ref().map(|(x, _)| x)
    }

    /// Vertical axis state.
    #[must_use]
    pub fn axis_y(&self) -> Option<&AxisFactor> {
        self.axes.as_ref().map(|(_, y)| y)
    }

    /// Mutable access to both axes, `(x, y)`.
    pub fn axes_mut(&mut self) -> Option<(&mut AxisFactor, &mut AxisFactor)> {
        self.axes.as_mut().map(|(x, y)| (x, y))
    }

    /// Current transform: scale first, then translate in frame coordinates.
    ///
    /// Returns `None` while the model is not ready. Calling this repeatedly
    /// without mutations yields the same matrix.
    #[must_use]
    pub fn transform(&self) -> Option<Affine> {
        let (x, y) = self.axes.as_ref()?;
        Some(
            Affine::translate(Vec2::new(
                x.translation().current(),
                y.translation().current(),
            )) * Affine::scale_non_uniform(x.scale().current(), y.scale().current()),
        )
    }

    /// Snapshot of the current model state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            frame: self.frame,
            source: self.source_size(),
            policy: self.sizing_policy(),
            axis_x: self.axis_x().map(AxisDebugInfo::from),
            axis_y: self.axis_y().map(AxisDebugInfo::from),
        }
    }

    fn rebuild(&mut self) -> bool {
        let (Some(frame), Some((source, policy))) = (self.frame, self.source) else {
            return false;
        };
        let (floor_x, floor_y) = policy.floors(frame);
        let x = AxisFactor::new(
            ScaleFactor::new(source.width(), frame.width(), floor_x),
            frame.width(),
        );
        let y = AxisFactor::new(
            ScaleFactor::new(source.height(), frame.height(), floor_y),
            frame.height(),
        );
        log::debug!(
            "rebuilt axes for source {source} in frame {frame}: x {:?}, y {:?}",
            x.scale(),
            y.scale()
        );
        self.axes = Some((x, y));
        true
    }
}

/// Row-major 3x3 values of `affine`: `[sx, kx, tx, ky, sy, ty, 0, 0, 1]`.
#[must_use]
pub fn matrix_values(affine: &Affine) -> [f64; 9] {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    [a, c, e, b, d, f, 0.0, 0.0, 1.0]
}

/// Debug snapshot of a [`ViewportModel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Frame size, if known.
    pub frame: Option<FrameSize>,
    /// Source size, if known.
    pub source: Option<SourceSize>,
    /// Sizing policy, if a source is known.
    pub policy: Option<SizingPolicy>,
    /// Horizontal axis, once ready.
    pub axis_x: Option<AxisDebugInfo>,
    /// Vertical axis, once ready.
    pub axis_y: Option<AxisDebugInfo>,
}

/// Debug snapshot of one [`AxisFactor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisDebugInfo {
    /// Minimum scale.
    pub min_scale: f64,
    /// Fit scale.
    pub fit_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Current scale.
    pub scale: f64,
    /// Lower translation bound.
    pub min_trans: f64,
    /// Upper translation bound.
    pub max_trans: f64,
    /// Current translation.
    pub trans: f64,
    /// Whether panning is possible on this axis.
    pub exceed_fit: bool,
}

impl From<&AxisFactor> for AxisDebugInfo {
    fn from(axis: &AxisFactor) -> Self {
        let scale = axis.scale();
        let trans = axis.translation();
        Self {
            min_scale: scale.min(),
            fit_scale: scale.fit(),
            max_scale: scale.max(),
            scale: scale.current(),
            min_trans: trans.min(),
            max_trans: trans.max(),
            trans: trans.current(),
            exceed_fit: axis.is_exceed_fit(),
        }
    }
}
