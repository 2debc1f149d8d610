// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::error::ScalerError;
use crate::factor::ScaleFloor;
use crate::size::FrameSize;

/// Target aspect ratio used to derive a letterboxed minimum size from the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResolutionRatio {
    /// Use the whole frame.
    MatchParent,
    /// Square with the frame's shorter side.
    OneToOne,
    /// Frame width, 4:3 height.
    FourToThree,
    /// Frame width, 16:9 height.
    SixteenToNine,
}

impl ResolutionRatio {
    /// Returns `(width, height)` ratio terms, or `None` for [`Self::MatchParent`].
    #[must_use]
    pub fn terms(self) -> Option<(f64, f64)> {
        match self {
            Self::MatchParent => None,
            Self::OneToOne => Some((1.0, 1.0)),
            Self::FourToThree => Some((4.0, 3.0)),
            Self::SixteenToNine => Some((16.0, 9.0)),
        }
    }

    /// Height matching `width` under this ratio, truncated to whole pixels.
    ///
    /// [`Self::MatchParent`] has no intrinsic height and returns `None`.
    #[must_use]
    pub fn height_for(self, width: u32) -> Option<u32> {
        self.terms().map(|(w, h)| {
            #[expect(clippy::cast_possible_truncation, reason = "truncate to whole pixels")]
            let height = (f64::from(width) / w * h) as u32;
            height
        })
    }

    /// Reference size derived from `frame`.
    #[must_use]
    pub fn ratio_size(self, frame: FrameSize) -> FrameSize {
        match self {
            Self::MatchParent => frame,
            Self::OneToOne => {
                let side = frame.width().min(frame.height());
                FrameSize::derived(side, side)
            }
            Self::FourToThree | Self::SixteenToNine => {
                let height = self.height_for(frame.width()).unwrap_or(frame.height());
                FrameSize::derived(frame.width(), height)
            }
        }
    }
}

impl fmt::Display for ResolutionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MatchParent => "ratio_match",
            Self::OneToOne => "ratio_1:1",
            Self::FourToThree => "ratio_4:3",
            Self::SixteenToNine => "ratio_16:9",
        })
    }
}

impl FromStr for ResolutionRatio {
    type Err = ScalerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix("ratio_").unwrap_or(name);
        match name {
            "match" | "match_parent" => Ok(Self::MatchParent),
            "1:1" => Ok(Self::OneToOne),
            "4:3" => Ok(Self::FourToThree),
            "16:9" => Ok(Self::SixteenToNine),
            _ => Err(ScalerError::UnknownRatio),
        }
    }
}

/// How the minimum scale of each axis is chosen for a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizingPolicy {
    /// Per-axis flags: a set flag floors the axis at the frame extent, a
    /// cleared flag floors it at the source's native resolution.
    FitFlags {
        /// Floor the X axis at the frame width.
        width_fit_frame: bool,
        /// Floor the Y axis at the frame height.
        height_fit_frame: bool,
    },
    /// Floor both axes at a ratio size derived from the frame.
    Ratio(ResolutionRatio),
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self::FitFlags {
            width_fit_frame: false,
            height_fit_frame: false,
        }
    }
}

impl SizingPolicy {
    /// Shorthand for [`Self::FitFlags`].
    #[must_use]
    pub fn fit_flags(width_fit_frame: bool, height_fit_frame: bool) -> Self {
        Self::FitFlags {
            width_fit_frame,
            height_fit_frame,
        }
    }

    /// Scale floors for the `(x, y)` axes against `frame`.
    #[must_use]
    pub fn floors(&self, frame: FrameSize) -> (ScaleFloor, ScaleFloor) {
        match *self {
            Self::FitFlags {
                width_fit_frame,
                height_fit_frame,
            } => (flag_floor(width_fit_frame), flag_floor(height_fit_frame)),
            Self::Ratio(ratio) => {
                let reference = ratio.ratio_size(frame);
                (
                    ScaleFloor::Reference(reference.width()),
                    ScaleFloor::Reference(reference.height()),
                )
            }
        }
    }
}

fn flag_floor(fit_frame: bool) -> ScaleFloor {
    if fit_frame {
        ScaleFloor::Fit
    } else {
        ScaleFloor::Native
    }
}
