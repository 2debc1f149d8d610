// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::error::ScalerError;

/// Size of the display area, in device pixels.
///
/// A frame is replaced wholesale whenever the host layout changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    /// Creates a frame size, rejecting zero extents.
    pub fn new(width: u32, height: u32) -> Result<Self, ScalerError> {
        if width == 0 || height == 0 {
            return Err(ScalerError::InvalidFrameSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    // Ratio sizes are derived from a valid frame and floored at one pixel.
    pub(crate) fn derived(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width: {}, height: {}", self.width, self.height)
    }
}

/// Native size of the content being displayed, in source pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceSize {
    width: u32,
    height: u32,
}

impl SourceSize {
    /// Creates a source size, rejecting zero extents.
    ///
    /// Both extents are divisors of the fit scale, so they must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self, ScalerError> {
        if width == 0 || height == 0 {
            return Err(ScalerError::InvalidSourceSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Source width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Source height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for SourceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width: {}, height: {}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameSize, SourceSize};
    use crate::ScalerError;

    #[test]
    fn zero_extents_are_rejected() {
        assert_eq!(
            FrameSize::new(0, 10),
            Err(ScalerError::InvalidFrameSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            SourceSize::new(10, 0),
            Err(ScalerError::InvalidSourceSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn derived_sizes_are_floored_at_one_pixel() {
        let size = FrameSize::derived(0, 7);
        assert_eq!(size.width(), 1);
        assert_eq!(size.height(), 7);
    }
}
