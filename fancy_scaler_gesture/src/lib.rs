// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fancy Scaler Gesture: pinch, pan and double-tap on top of `fancy_scaler`.
//!
//! [`GestureController`] consumes recognized gesture primitives (scale
//! begin/step/end, single-finger scroll, double-tap, pointer down/up) and
//! turns them into constrained changes of a [`fancy_scaler::ViewportModel`].
//! After every accepted change it hands the resulting transform to a
//! [`Surface`].
//!
//! ## Sequences and precedence
//!
//! A pointer sequence starts at pointer-down. The pinch path always sees
//! events first; once a pinch has run, the sequence is
//! [`ScaleSession::Consumed`] and scroll and double-tap input is ignored
//! until the next pointer-down. This keeps the last finger of a pinch from
//! being read as a pan.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use fancy_scaler::{ScalerConfig, SizingPolicy, SurfaceKind};
//! use fancy_scaler_gesture::{GestureController, Surface};
//! use kurbo::{Affine, Point};
//!
//! struct Texture(Option<Affine>);
//!
//! impl Surface for Texture {
//!     fn kind(&self) -> SurfaceKind {
//!         SurfaceKind::Texture
//!     }
//!
//!     fn apply_transform(&mut self, transform: Affine) {
//!         self.0 = Some(transform);
//!     }
//! }
//!
//! let surface = Rc::new(RefCell::new(Texture(None)));
//! let mut scaler = GestureController::new(&surface, ScalerConfig::default()).unwrap();
//! scaler.on_frame_size_changed(300, 300).unwrap();
//! scaler.set_source_size(100, 100, SizingPolicy::default()).unwrap();
//!
//! scaler.on_pointer_down();
//! scaler.on_double_tap(Point::new(150.0, 150.0));
//!
//! // Zoomed to 12x and anchored around the tap.
//! let applied = surface.borrow().0.unwrap();
//! assert_eq!(applied * Point::ZERO, Point::new(-450.0, -450.0));
//! ```
//!
//! ## Lifetimes
//!
//! The controller keeps only a weak reference to its surface. If the host
//! drops the surface, emissions are discarded and
//! [`GestureController::is_surface_alive`] turns `false`.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod controller;
mod event;
mod session;
mod surface;

pub use controller::GestureController;
pub use event::GestureEvent;
pub use session::{GestureState, ScaleSession, ScaleSpans};
pub use surface::{Delivery, Surface, SurfaceHandle};

pub use fancy_scaler::{
    DoubleTapToggle, EmissionMode, ScalerConfig, ScalerError, SizingPolicy, SurfaceKind,
    ZoomAnchorPolicy,
};
