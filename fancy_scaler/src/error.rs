// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::SurfaceKind;

/// Errors raised while configuring a scaler.
///
/// Gesture input never produces an error: out-of-range requests are clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScalerError {
    /// The rendering surface cannot receive a transform matrix.
    #[error("scaler only supports texture or image surfaces, got {0:?}")]
    UnsupportedSurfaceKind(SurfaceKind),
    /// A source dimension was zero.
    #[error("source size must be positive, got {width}x{height}")]
    InvalidSourceSize {
        /// Requested source width.
        width: u32,
        /// Requested source height.
        height: u32,
    },
    /// A frame dimension was zero.
    #[error("frame size must be positive, got {width}x{height}")]
    InvalidFrameSize {
        /// Reported frame width.
        width: u32,
        /// Reported frame height.
        height: u32,
    },
    /// A resolution ratio name did not match any known ratio.
    #[error("unknown resolution ratio")]
    UnknownRatio,
}
