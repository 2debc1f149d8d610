// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::RefCell;

use fancy_scaler::{
    AxisFactor, DoubleTapToggle, FrameSize, ScalerConfig, ScalerError, SizingPolicy, SourceSize,
    ViewportModel, ZoomAnchorPolicy,
};
use kurbo::{Affine, Point, Vec2};

use crate::event::GestureEvent;
use crate::session::{GestureState, ScaleSession, ScaleSpans};
use crate::surface::{Emitter, Surface, SurfaceHandle};

/// Whether the controller currently receives input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Attachment {
    Attached,
    Detached,
}

/// Drives a [`ViewportModel`] from gesture input and emits transforms to a surface.
///
/// Every handler returns `true` if it consumed the input. Handlers are
/// no-ops returning `false` while the controller is disabled or while the
/// model is not ready (no frame or no source yet).
pub struct GestureController<S: Surface> {
    model: ViewportModel,
    config: ScalerConfig,
    emitter: Emitter<S>,
    state: GestureState,
    session: ScaleSession,
    scale_focus: Point,
    attachment: Attachment,
}

impl<S: Surface> core::fmt::Debug for GestureController<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GestureController")
            .field("model", &self.model)
            .field("config", &self.config)
            .field("emitter", &self.emitter)
            .field("state", &self.state)
            .field("session", &self.session)
            .field("scale_focus", &self.scale_focus)
            .field("attachment", &self.attachment)
            .finish()
    }
}

impl<S: Surface> GestureController<S> {
    /// Creates an enabled controller bound to `surface`.
    ///
    /// Only a weak reference to the surface is kept. Fails with
    /// [`ScalerError::UnsupportedSurfaceKind`] unless the surface is a
    /// texture or image surface.
    pub fn new(surface: &Rc<RefCell<S>>, config: ScalerConfig) -> Result<Self, ScalerError> {
        let handle = SurfaceHandle::new(surface)?;
        let mut controller = Self {
            model: ViewportModel::new(),
            config,
            emitter: Emitter::new(handle, config.emission),
            state: GestureState::Idle,
            session: ScaleSession::Fresh,
            scale_focus: Point::ZERO,
            attachment: Attachment::Detached,
        };
        controller.enable();
        Ok(controller)
    }

    /// The underlying model.
    #[must_use]
    pub fn model(&self) -> &ViewportModel {
        &self.model
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    /// Which gesture currently drives the viewport.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Whether a pinch has claimed the current pointer sequence.
    #[must_use]
    pub fn session(&self) -> ScaleSession {
        self.session
    }

    /// Returns `true` while attached to input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.attachment == Attachment::Attached
    }

    /// Returns `true` while the host still holds the surface.
    #[must_use]
    pub fn is_surface_alive(&self) -> bool {
        self.emitter.handle().is_alive()
    }

    /// The transform the model currently describes.
    #[must_use]
    pub fn transform(&self) -> Option<Affine> {
        self.model.transform()
    }

    /// A transform waiting for the next render tick, if any.
    #[must_use]
    pub fn pending_transform(&self) -> Option<Affine> {
        self.emitter.pending()
    }

    /// Attaches to input. Idempotent.
    pub fn enable(&mut self) {
        if self.attachment == Attachment::Attached {
            return;
        }
        self.attachment = Attachment::Attached;
        self.emitter.set_attached(true);
        log::debug!("scaler attached to input");
    }

    /// Detaches from input. Idempotent.
    ///
    /// Resets the gesture state; the model keeps its current zoom and pan.
    /// Input is refused right away even if the surface is borrowed and the
    /// detach notification has to wait for [`Self::on_render_tick`].
    pub fn disable(&mut self) {
        if self.attachment == Attachment::Detached {
            return;
        }
        self.attachment = Attachment::Detached;
        self.state = GestureState::Idle;
        self.session = ScaleSession::Fresh;
        self.emitter.set_attached(false);
        log::debug!("scaler detached from input");
    }

    /// Reports the new frame size from a layout pass.
    ///
    /// Rebuilds and re-centers the axes and emits the result. Returns
    /// `Ok(true)` if a transform was emitted. Ignored while disabled.
    pub fn on_frame_size_changed(&mut self, width: u32, height: u32) -> Result<bool, ScalerError> {
        if !self.is_enabled() {
            return Ok(false);
        }
        let frame = FrameSize::new(width, height)?;
        self.state = GestureState::Idle;
        let ready = self.model.set_frame_size(frame);
        if ready {
            self.emit();
        }
        Ok(ready)
    }

    /// Convenience wrapper over [`Self::on_frame_size_changed`] for layout bounds.
    pub fn on_layout_change(
        &mut self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    ) -> Result<bool, ScalerError> {
        let width = u32::try_from(right.saturating_sub(left)).unwrap_or(0);
        let height = u32::try_from(bottom.saturating_sub(top)).unwrap_or(0);
        self.on_frame_size_changed(width, height)
    }

    /// Sets the source size and sizing policy.
    ///
    /// Rebuilds the axes and emits the result once a frame is known. Returns
    /// `Ok(true)` if a transform was emitted.
    pub fn set_source_size(
        &mut self,
        width: u32,
        height: u32,
        policy: SizingPolicy,
    ) -> Result<bool, ScalerError> {
        let source = SourceSize::new(width, height)?;
        self.state = GestureState::Idle;
        let ready = self.model.set_source(source, policy);
        if ready {
            self.emit();
        }
        Ok(ready)
    }

    /// Routes one event, giving the pinch path precedence over pan and double-tap.
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        match event {
            GestureEvent::PointerDown => self.on_pointer_down(),
            GestureEvent::PointerUp => self.on_pointer_up(),
            GestureEvent::ScaleBegin { focus } => self.on_scale_begin(focus),
            GestureEvent::Scale(spans) => self.on_scale(spans),
            GestureEvent::ScaleEnd => self.on_scale_end(),
            GestureEvent::Scroll { distance } => self.on_scroll(distance),
            GestureEvent::DoubleTap { position } => self.on_double_tap(position),
        }
    }

    /// Starts a new pointer sequence.
    pub fn on_pointer_down(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.session = ScaleSession::Fresh;
        self.state = GestureState::Idle;
        true
    }

    /// Ends the active gesture; the sequence stays claimed until the next pointer-down.
    pub fn on_pointer_up(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.state = GestureState::Idle;
        true
    }

    /// Starts a pinch at `focus`.
    pub fn on_scale_begin(&mut self, focus: Point) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.begin_scale(focus);
        true
    }

    /// Applies one pinch step.
    pub fn on_scale(&mut self, spans: ScaleSpans) -> bool {
        if !self.accepts_input() {
            return false;
        }
        if self.state != GestureState::Scaling {
            log::trace!("scale step without begin, starting at {:?}", spans.focus);
            self.begin_scale(spans.focus);
        }
        let anchor = match self.config.zoom_anchor {
            ZoomAnchorPolicy::Center => None,
            ZoomAnchorPolicy::LiveFocus => Some(spans.focus),
            ZoomAnchorPolicy::InitialFocus => Some(self.scale_focus),
        };
        let Some((x, y)) = self.model.axes_mut() else {
            return false;
        };
        x.apply_scale(x.scale().current() * spans.ratio_x());
        y.apply_scale(y.scale().current() * spans.ratio_y());
        match anchor {
            None => {
                x.apply_central_trans();
                y.apply_central_trans();
            }
            Some(focus) => {
                x.apply_focus_trans(focus.x);
                y.apply_focus_trans(focus.y);
            }
        }
        log::trace!(
            "scale step: scale ({}, {}), trans ({}, {})",
            x.scale().current(),
            y.scale().current(),
            x.translation().current(),
            y.translation().current()
        );
        self.session = ScaleSession::Consumed;
        self.emit();
        true
    }

    /// Ends the pinch.
    pub fn on_scale_end(&mut self) -> bool {
        if !self.accepts_input() || self.state != GestureState::Scaling {
            return false;
        }
        self.state = GestureState::Idle;
        true
    }

    /// Pans by a single-finger scroll `distance` (previous minus current position).
    ///
    /// Ignored once a pinch has claimed the sequence. Only axes whose content
    /// overflows its fit extent move; a transform is emitted only if one did.
    pub fn on_scroll(&mut self, distance: Vec2) -> bool {
        if !self.accepts_input()
            || self.session.is_consumed()
            || self.state == GestureState::Scaling
        {
            return false;
        }
        let factor = self.config.scroll_factor;
        let Some((x, y)) = self.model.axes_mut() else {
            return false;
        };
        let moved_x = drag_axis(x, distance.x * factor);
        let moved_y = drag_axis(y, distance.y * factor);
        self.state = GestureState::Panning;
        if moved_x || moved_y {
            log::trace!(
                "pan: trans ({}, {})",
                x.translation().current(),
                y.translation().current()
            );
            self.emit();
        }
        true
    }

    /// Toggles each axis between its double-tap stops and anchors to `position`.
    ///
    /// Ignored once a pinch has claimed the sequence.
    pub fn on_double_tap(&mut self, position: Point) -> bool {
        if !self.accepts_input() || self.session.is_consumed() {
            return false;
        }
        let toggle = self.config.double_tap;
        let Some((x, y)) = self.model.axes_mut() else {
            return false;
        };
        toggle_axis(x, toggle);
        toggle_axis(y, toggle);
        x.apply_focus_trans(position.x);
        y.apply_focus_trans(position.y);
        log::trace!(
            "double tap at {position:?}: scale ({}, {})",
            x.scale().current(),
            y.scale().current()
        );
        self.state = GestureState::Idle;
        self.emit();
        true
    }

    /// Delivers parked attach notifications and deferred or parked transforms.
    /// Call once per host render tick.
    ///
    /// Returns `true` if a transform reached the surface.
    pub fn on_render_tick(&mut self) -> bool {
        self.emitter.flush_attached();
        self.emitter.flush()
    }

    /// An attach notification waiting for the surface to be released, if any.
    #[must_use]
    pub fn pending_input_attached(&self) -> Option<bool> {
        self.emitter.pending_attach()
    }

    fn accepts_input(&self) -> bool {
        self.is_enabled() && self.model.is_ready()
    }

    fn begin_scale(&mut self, focus: Point) {
        self.scale_focus = focus;
        self.state = GestureState::Scaling;
        self.session = ScaleSession::Consumed;
    }

    fn emit(&mut self) {
        if let Some(transform) = self.model.transform() {
            self.emitter.emit(transform);
        }
    }
}

impl<S: Surface> Drop for GestureController<S> {
    fn drop(&mut self) {
        self.disable();
        if self.emitter.pending_attach().is_some() {
            log::warn!("surface borrowed while the scaler was dropped, detach not delivered");
        }
    }
}

// Panning reveals nothing until the content overflows its fit extent.
fn drag_axis(axis: &mut AxisFactor, distance: f64) -> bool {
    if !axis.is_exceed_fit() {
        return false;
    }
    let before = axis.translation().current();
    axis.apply_trans(before - distance);
    axis.translation().current() != before
}

fn toggle_axis(axis: &mut AxisFactor, toggle: DoubleTapToggle) {
    let scale = axis.scale();
    let current = scale.current();
    match toggle {
        DoubleTapToggle::MinMax => {
            if current < scale.max() {
                axis.apply_max_scale();
            } else {
                axis.apply_min_scale();
            }
        }
        DoubleTapToggle::MinFit => {
            if current < scale.fit() {
                axis.apply_fit_scale();
            } else {
                axis.apply_min_scale();
            }
        }
        DoubleTapToggle::FitMax => {
            if current < scale.max() {
                axis.apply_max_scale();
            } else {
                axis.apply_fit_scale();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fancy_scaler::{AxisFactor, DoubleTapToggle, ScaleFactor, ScaleFloor};

    use super::{drag_axis, toggle_axis};

    fn axis(src: u32, frame: u32) -> AxisFactor {
        AxisFactor::new(ScaleFactor::new(src, frame, ScaleFloor::Native), frame)
    }

    #[test]
    fn drag_is_gated_by_exceed_fit() {
        let mut a = axis(100, 200);
        assert!(!drag_axis(&mut a, 10.0));
        assert_eq!(a.translation().current(), 50.0);

        a.apply_scale(4.0);
        a.apply_central_trans();
        assert!(drag_axis(&mut a, 10.0));
        assert_eq!(a.translation().current(), -110.0);
    }

    #[test]
    fn drag_at_edge_does_not_move() {
        let mut a = axis(100, 200);
        a.apply_scale(4.0);
        a.apply_trans(0.0);
        assert!(!drag_axis(&mut a, -25.0));
    }

    #[test]
    fn min_fit_toggle() {
        let mut a = axis(100, 300);
        toggle_axis(&mut a, DoubleTapToggle::MinFit);
        assert_eq!(a.scale().current(), 3.0);
        toggle_axis(&mut a, DoubleTapToggle::MinFit);
        assert_eq!(a.scale().current(), 1.0);
    }

    #[test]
    fn fit_max_toggle() {
        let mut a = axis(100, 300);
        toggle_axis(&mut a, DoubleTapToggle::FitMax);
        assert_eq!(a.scale().current(), 12.0);
        toggle_axis(&mut a, DoubleTapToggle::FitMax);
        assert_eq!(a.scale().current(), 3.0);
    }
}
