// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis scale and translation constraints.
//!
//! Each axis of the viewport is modelled independently by an [`AxisFactor`],
//! which pairs a [`ScaleFactor`] (how large the content is drawn) with a
//! [`TranslationFactor`] (where the content's origin sits inside the frame).
//!
//! All mutators saturate: requests outside the allowed range are clamped to
//! the nearest bound and never rejected.

/// Zoom ceiling, as a multiple of the fit scale.
pub const MAX_SCALE_MULTIPLIER: f64 = 4.0;

/// Lower bound policy for a [`ScaleFactor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleFloor {
    /// The content never gets smaller than the frame extent.
    Fit,
    /// The content never gets smaller than its native resolution.
    Native,
    /// The content never gets smaller than the given reference extent.
    Reference(u32),
}

/// Scale bounds and current scale for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactor {
    src: u32,
    min: f64,
    fit: f64,
    max: f64,
    current: f64,
}

impl ScaleFactor {
    /// Creates a scale factor that fits `src` into `frame`, starting at the floor.
    ///
    /// `src` must be positive; [`crate::SourceSize`] guarantees this.
    #[must_use]
    pub fn new(src: u32, frame: u32, floor: ScaleFloor) -> Self {
        let extent = f64::from(src);
        let fit = f64::from(frame) / extent;
        let min = match floor {
            ScaleFloor::Fit => fit,
            ScaleFloor::Native => 1.0,
            ScaleFloor::Reference(reference) => f64::from(reference) / extent,
        };
        // A native floor on a source far larger than the frame can exceed the
        // ceiling; the ceiling gives way so the range stays non-empty.
        let max = (fit * MAX_SCALE_MULTIPLIER).max(min);
        Self {
            src,
            min,
            fit,
            max,
            current: min,
        }
    }

    /// Source extent on this axis.
    #[must_use]
    pub fn src(&self) -> u32 {
        self.src
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Scale at which the source exactly fills the frame.
    #[must_use]
    pub fn fit(&self) -> f64 {
        self.fit
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Current scale, always within `[min, max]`.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Sets the scale, clamping it into `[min, max]`.
    ///
    /// Non-finite requests are ignored.
    pub fn apply_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        self.current = scale.clamp(self.min, self.max);
    }

    /// Jumps to the minimum scale.
    pub fn apply_min_scale(&mut self) {
        self.current = self.min;
    }

    /// Jumps to the fit scale, clamped into range.
    pub fn apply_fit_scale(&mut self) {
        self.current = self.fit.clamp(self.min, self.max);
    }

    /// Jumps to the maximum scale.
    pub fn apply_max_scale(&mut self) {
        self.current = self.max;
    }

    /// On-screen extent at the current scale.
    #[must_use]
    pub fn current_frame(&self) -> f64 {
        f64::from(self.src) * self.current
    }

    /// On-screen extent at the fit scale.
    #[must_use]
    pub fn fit_frame(&self) -> f64 {
        f64::from(self.src) * self.fit
    }

    /// On-screen extent at the maximum scale.
    #[must_use]
    pub fn max_frame(&self) -> f64 {
        f64::from(self.src) * self.max
    }
}

/// Translation bounds and current translation for one axis.
///
/// The upper bound is always `0`: the content's origin edge never moves past
/// the frame's origin edge. The lower bound depends on the scale, so it must
/// be refreshed with [`TranslationFactor::update_min_trans`] after every
/// scale change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslationFactor {
    frame: f64,
    min: f64,
    current: f64,
}

impl TranslationFactor {
    /// Upper translation bound.
    pub const MAX: f64 = 0.0;

    /// Creates a centered translation factor for a `frame` extent.
    #[must_use]
    pub fn new(frame: u32, scale: &ScaleFactor) -> Self {
        let mut trans = Self {
            frame: f64::from(frame),
            min: 0.0,
            current: 0.0,
        };
        trans.update_min_trans(scale);
        trans.apply_central_trans();
        trans
    }

    /// Frame extent this translation is measured against.
    #[must_use]
    pub fn frame(&self) -> f64 {
        self.frame
    }

    /// Lower translation bound; positive when the content is smaller than the frame.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper translation bound, always `0`.
    #[must_use]
    pub fn max(&self) -> f64 {
        Self::MAX
    }

    /// Current translation.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Recomputes the lower bound from the scale's current on-screen extent.
    pub fn update_min_trans(&mut self, scale: &ScaleFactor) {
        self.min = self.frame - scale.current_frame();
    }

    /// Centers the content within the frame.
    pub fn apply_central_trans(&mut self) {
        self.apply_trans(self.min / 2.0);
    }

    /// Positions the content proportionally to a frame-space focus coordinate.
    pub fn apply_focus_trans(&mut self, focus: f64) {
        let ratio = focus / self.frame;
        self.apply_trans(self.min * ratio);
    }

    /// Sets the translation.
    ///
    /// Clamped into `[min, 0]` while the content overflows the frame; when
    /// the content is smaller than the frame (`min > 0`) the value is taken
    /// as is. Non-finite values are ignored.
    pub fn apply_trans(&mut self, trans: f64) {
        if !trans.is_finite() {
            return;
        }
        self.current = if self.min <= Self::MAX {
            trans.clamp(self.min, Self::MAX)
        } else {
            trans
        };
    }

    /// Returns `true` once the content is drawn larger than its fit extent.
    #[must_use]
    pub fn is_exceed_fit(&self, scale: &ScaleFactor) -> bool {
        scale.current_frame() > scale.fit_frame()
    }
}

/// Paired scale and translation state for one axis.
///
/// Scale mutators refresh the translation bound before returning, so the
/// translation is always consistent with the current scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFactor {
    scale: ScaleFactor,
    translation: TranslationFactor,
}

impl AxisFactor {
    /// Pairs a scale factor with a centered translation over `frame`.
    #[must_use]
    pub fn new(scale: ScaleFactor, frame: u32) -> Self {
        let translation = TranslationFactor::new(frame, &scale);
        Self { scale, translation }
    }

    /// Scale state.
    #[must_use]
    pub fn scale(&self) -> &ScaleFactor {
        &self.scale
    }

    /// Translation state.
    #[must_use]
    pub fn translation(&self) -> &TranslationFactor {
        &self.translation
    }

    /// See [`ScaleFactor::apply_scale`].
    pub fn apply_scale(&mut self, scale: f64) {
        self.scale.apply_scale(scale);
        self.update_min_trans();
    }

    /// See [`ScaleFactor::apply_min_scale`].
    pub fn apply_min_scale(&mut self) {
        self.scale.apply_min_scale();
        self.update_min_trans();
    }

    /// See [`ScaleFactor::apply_fit_scale`].
    pub fn apply_fit_scale(&mut self) {
        self.scale.apply_fit_scale();
        self.update_min_trans();
    }

    /// See [`ScaleFactor::apply_max_scale`].
    pub fn apply_max_scale(&mut self) {
        self.scale.apply_max_scale();
        self.update_min_trans();
    }

    /// See [`TranslationFactor::update_min_trans`].
    pub fn update_min_trans(&mut self) {
        self.translation.update_min_trans(&self.scale);
    }

    /// See [`TranslationFactor::apply_central_trans`].
    pub fn apply_central_trans(&mut self) {
        self.translation.apply_central_trans();
    }

    /// See [`TranslationFactor::apply_focus_trans`].
    pub fn apply_focus_trans(&mut self, focus: f64) {
        self.translation.apply_focus_trans(focus);
    }

    /// See [`TranslationFactor::apply_trans`].
    pub fn apply_trans(&mut self, trans: f64) {
        self.translation.apply_trans(trans);
    }

    /// See [`TranslationFactor::is_exceed_fit`].
    #[must_use]
    pub fn is_exceed_fit(&self) -> bool {
        self.translation.is_exceed_fit(&self.scale)
    }
}
