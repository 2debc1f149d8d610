// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Scroll multiplier shipped by the first releases of the scaler.
///
/// [`ScalerConfig::default`] uses `1.0`; pass this to
/// [`ScalerConfig::with_scroll_factor`] for the faster legacy drag speed.
pub const LEGACY_SCROLL_FACTOR: f64 = 1.5;

/// Kind of rendering surface a transform is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SurfaceKind {
    /// A texture-backed surface that takes a content transform.
    Texture,
    /// An image surface that takes an image matrix.
    Image,
    /// Any other surface; cannot be driven by the scaler.
    Other,
}

impl SurfaceKind {
    /// Returns `true` if a transform matrix can be applied to this kind.
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Texture | Self::Image)
    }
}

/// Where translation is anchored while a pinch changes the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoomAnchorPolicy {
    /// Re-center the content after every scale step.
    Center,
    /// Anchor to the focus point reported by the current scale step.
    LiveFocus,
    /// Anchor to the focus point recorded when the pinch began.
    #[default]
    InitialFocus,
}

/// The pair of scale stops a double-tap toggles between.
///
/// Each axis toggles independently: if the axis is below the upper stop it
/// jumps there, otherwise it returns to the lower stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DoubleTapToggle {
    /// Toggle between the minimum and maximum scale.
    #[default]
    MinMax,
    /// Toggle between the minimum and fit scale.
    MinFit,
    /// Toggle between the fit and maximum scale.
    FitMax,
}

/// When emitted transforms reach the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmissionMode {
    /// Apply inside the callback that produced the transform.
    #[default]
    Immediate,
    /// Keep the latest transform and apply it on the next render tick.
    Deferred,
}

/// Behavior knobs for a scaler.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScalerConfig {
    /// Pinch anchoring.
    pub zoom_anchor: ZoomAnchorPolicy,
    /// Double-tap scale stops.
    pub double_tap: DoubleTapToggle,
    /// Multiplier applied to scroll distances before panning.
    pub scroll_factor: f64,
    /// Emission timing.
    pub emission: EmissionMode,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            zoom_anchor: ZoomAnchorPolicy::default(),
            double_tap: DoubleTapToggle::default(),
            scroll_factor: 1.0,
            emission: EmissionMode::default(),
        }
    }
}

impl ScalerConfig {
    /// Sets the pinch anchoring policy.
    #[must_use]
    pub fn with_zoom_anchor(mut self, policy: ZoomAnchorPolicy) -> Self {
        self.zoom_anchor = policy;
        self
    }

    /// Sets the double-tap scale stops.
    #[must_use]
    pub fn with_double_tap(mut self, toggle: DoubleTapToggle) -> Self {
        self.double_tap = toggle;
        self
    }

    /// Sets the scroll multiplier. Non-finite or non-positive values are ignored.
    #[must_use]
    pub fn with_scroll_factor(mut self, factor: f64) -> Self {
        if factor.is_finite() && factor > 0.0 {
            self.scroll_factor = factor;
        }
        self
    }

    /// Sets the emission timing.
    #[must_use]
    pub fn with_emission(mut self, mode: EmissionMode) -> Self {
        self.emission = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{EmissionMode, ScalerConfig, SurfaceKind, ZoomAnchorPolicy};

    #[test]
    fn builder_overrides_defaults() {
        let config = ScalerConfig::default()
            .with_zoom_anchor(ZoomAnchorPolicy::Center)
            .with_scroll_factor(2.0)
            .with_emission(EmissionMode::Deferred);
        assert_eq!(config.zoom_anchor, ZoomAnchorPolicy::Center);
        assert_eq!(config.scroll_factor, 2.0);
        assert_eq!(config.emission, EmissionMode::Deferred);
    }

    #[test]
    fn bad_scroll_factor_is_ignored() {
        let config = ScalerConfig::default()
            .with_scroll_factor(-1.0)
            .with_scroll_factor(f64::INFINITY);
        assert_eq!(config.scroll_factor, 1.0);
    }

    #[test]
    fn only_texture_and_image_are_supported() {
        assert!(SurfaceKind::Texture.is_supported());
        assert!(SurfaceKind::Image.is_supported());
        assert!(!SurfaceKind::Other.is_supported());
    }
}
