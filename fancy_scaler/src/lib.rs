// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fancy Scaler: a headless fit/zoom/pan constraint model.
//!
//! This crate fits a source rectangle (typically a decoded image or a video
//! frame) into a display frame and keeps the resulting scale + translation
//! within sensible bounds on each axis. It focuses on:
//! - Per-axis scale bounds: a floor, a "fit" scale and a zoom ceiling.
//! - Per-axis translation bounds that follow the current scale.
//! - Centering and focus-relative positioning.
//! - Producing the transform matrix a rendering surface should apply.
//!
//! It does **not** decode images, render, or receive input. Callers are
//! expected to:
//! - Report frame size changes and the source size.
//! - Drive the per-axis operations from gesture input (see the
//!   `fancy_scaler_gesture` crate for a ready-made controller).
//! - Apply [`ViewportModel::transform`] to their surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use fancy_scaler::{FrameSize, SizingPolicy, SourceSize, ViewportModel};
//!
//! let mut model = ViewportModel::new();
//! model.set_frame_size(FrameSize::new(300, 300).unwrap());
//! model.set_source(SourceSize::new(100, 100).unwrap(), SizingPolicy::default());
//!
//! // Native floor: the 100px source starts at scale 1, centered.
//! let x = model.axis_x().unwrap();
//! assert_eq!(x.scale().current(), 1.0);
//! assert_eq!(x.translation().current(), 100.0);
//!
//! // Zoom all the way in and anchor to the frame center.
//! let (x, y) = model.axes_mut().unwrap();
//! x.apply_max_scale();
//! y.apply_max_scale();
//! x.apply_focus_trans(150.0);
//! y.apply_focus_trans(150.0);
//! assert_eq!(model.axis_x().unwrap().translation().current(), -450.0);
//!
//! let transform = model.transform().unwrap();
//! # let _ = transform;
//! ```
//!
//! ## Sizing policies
//!
//! [`SizingPolicy::FitFlags`] floors each axis either at the frame extent or
//! at the native source resolution. [`SizingPolicy::Ratio`] floors both axes
//! at a letterboxed size derived from the frame with a [`ResolutionRatio`].
//! When the floor is smaller than the frame the content floats: translation
//! is left unclamped on that axis until the content overflows the frame.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for sizes, policies and
//!   [`ScalerConfig`].
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod error;
mod factor;
mod policy;
mod size;
mod viewport;

pub use config::{
    DoubleTapToggle, EmissionMode, LEGACY_SCROLL_FACTOR, ScalerConfig, SurfaceKind,
    ZoomAnchorPolicy,
};
pub use error::ScalerError;
pub use factor::{AxisFactor, MAX_SCALE_MULTIPLIER, ScaleFactor, ScaleFloor, TranslationFactor};
pub use policy::{ResolutionRatio, SizingPolicy};
pub use size::{FrameSize, SourceSize};
pub use viewport::{AxisDebugInfo, ViewportDebugInfo, ViewportModel, matrix_values};
