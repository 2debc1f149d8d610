// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering surface boundary.
//!
//! The controller never owns its surface. It keeps a [`SurfaceHandle`], a
//! weak reference that is upgraded only for the duration of one delivery, so
//! the host alone decides how long the surface lives.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;

use fancy_scaler::{EmissionMode, ScalerError, SurfaceKind};
use kurbo::Affine;

/// A display surface that accepts a content transform.
pub trait Surface {
    /// The kind of surface; only texture and image surfaces are supported.
    fn kind(&self) -> SurfaceKind;

    /// Applies a new content transform.
    fn apply_transform(&mut self, transform: Affine);

    /// Called when the controller attaches to or detaches from this surface's input.
    ///
    /// Hosts that route layout and touch callbacks conditionally can
    /// register or unregister them here. Calls always alternate.
    fn set_input_attached(&mut self, attached: bool) {
        let _ = attached;
    }
}

/// Result of handing something to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// The surface received it.
    Applied,
    /// The surface is alive but already borrowed.
    Busy,
    /// The surface has been dropped.
    Gone,
}

/// Non-owning handle to a [`Surface`].
pub struct SurfaceHandle<S> {
    surface: Weak<RefCell<S>>,
}

impl<S> fmt::Debug for SurfaceHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceHandle")
            .field("alive", &self.is_alive())
            .finish_non_exhaustive()
    }
}

impl<S> Clone for SurfaceHandle<S> {
    fn clone(&self) -> Self {
        Self {
            surface: self.surface.clone(),
        }
    }
}

impl<S: Surface> SurfaceHandle<S> {
    /// Creates a handle, failing if the surface kind cannot take transforms.
    ///
    /// A surface that is mutably borrowed at this point cannot be inspected
    /// and is rejected as [`SurfaceKind::Other`].
    pub fn new(surface: &Rc<RefCell<S>>) -> Result<Self, ScalerError> {
        let kind = surface
            .try_borrow()
            .map(|s| s.kind())
            .unwrap_or(SurfaceKind::Other);
        if !kind.is_supported() {
            return Err(ScalerError::UnsupportedSurfaceKind(kind));
        }
        Ok(Self {
            surface: Rc::downgrade(surface),
        })
    }

    /// Applies `transform` if the surface is still alive and not borrowed.
    pub fn apply(&self, transform: Affine) -> Delivery {
        self.with(|s| s.apply_transform(transform))
    }

    /// Notifies the surface of an attach/detach transition.
    pub fn set_input_attached(&self, attached: bool) -> Delivery {
        self.with(|s| s.set_input_attached(attached))
    }

    fn with(&self, f: impl FnOnce(&mut S)) -> Delivery {
        let Some(cell) = self.surface.upgrade() else {
            return Delivery::Gone;
        };
        let Ok(mut surface) = cell.try_borrow_mut() else {
            return Delivery::Busy;
        };
        f(&mut surface);
        Delivery::Applied
    }
}

impl<S> SurfaceHandle<S> {
    /// Returns `true` while the host still holds the surface.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.surface.strong_count() > 0
    }
}

/// Delivers transforms to a surface, immediately or on the next render tick.
///
/// Only the latest pending transform is kept: intermediate transforms that
/// were superseded before a tick are coalesced, never reordered.
///
/// Attach notifications that hit a borrowed surface are parked the same way
/// and delivered before any later notification, so the surface always sees
/// them alternate.
pub(crate) struct Emitter<S> {
    handle: SurfaceHandle<S>,
    mode: EmissionMode,
    pending: Option<Affine>,
    pending_attach: Option<bool>,
}

impl<S> fmt::Debug for Emitter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("handle", &self.handle)
            .field("mode", &self.mode)
            .field("pending", &self.pending)
            .field("pending_attach", &self.pending_attach)
            .finish()
    }
}

impl<S: Surface> Emitter<S> {
    pub(crate) fn new(handle: SurfaceHandle<S>, mode: EmissionMode) -> Self {
        Self {
            handle,
            mode,
            pending: None,
            pending_attach: None,
        }
    }

    pub(crate) fn handle(&self) -> &SurfaceHandle<S> {
        &self.handle
    }

    pub(crate) fn pending(&self) -> Option<Affine> {
        self.pending
    }

    pub(crate) fn pending_attach(&self) -> Option<bool> {
        self.pending_attach
    }

    pub(crate) fn emit(&mut self, transform: Affine) {
        match self.mode {
            EmissionMode::Deferred if !self.handle.is_alive() => {
                log::debug!("surface dropped, discarding transform");
                self.pending = None;
            }
            EmissionMode::Deferred => self.pending = Some(transform),
            EmissionMode::Immediate => match self.handle.apply(transform) {
                Delivery::Applied => self.pending = None,
                Delivery::Busy => {
                    log::debug!("surface busy, parking transform until next tick");
                    self.pending = Some(transform);
                }
                Delivery::Gone => {
                    log::debug!("surface dropped, discarding transform");
                    self.pending = None;
                }
            },
        }
    }

    /// Tells the surface about an attach transition.
    ///
    /// A previously parked notification goes first. If it still cannot be
    /// delivered the surface never left the requested state, so both are
    /// dropped.
    pub(crate) fn set_attached(&mut self, attached: bool) {
        if let Some(parked) = self.pending_attach.take() {
            if self.handle.set_input_attached(parked) == Delivery::Busy {
                log::debug!("surface busy, parked attach {parked} cancelled by {attached}");
                return;
            }
        }
        if self.handle.set_input_attached(attached) == Delivery::Busy {
            log::debug!("surface busy, parking attach {attached} until next tick");
            self.pending_attach = Some(attached);
        }
    }

    /// Delivers a parked attach notification, if any.
    pub(crate) fn flush_attached(&mut self) {
        let Some(attached) = self.pending_attach else {
            return;
        };
        if self.handle.set_input_attached(attached) != Delivery::Busy {
            self.pending_attach = None;
        }
    }

    /// Applies the pending transform, if any. Returns `true` if one was applied.
    pub(crate) fn flush(&mut self) -> bool {
        let Some(transform) = self.pending else {
            return false;
        };
        match self.handle.apply(transform) {
            Delivery::Applied => {
                self.pending = None;
                true
            }
            Delivery::Busy => false,
            Delivery::Gone => {
                log::debug!("surface dropped, discarding pending transform");
                self.pending = None;
                false
            }
        }
    }
}
