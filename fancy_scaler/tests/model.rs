// Copyright 2025 the Fancy Scaler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `fancy_scaler` model.
//!
//! These exercise the bound invariants across a spread of source/frame/policy
//! combinations, plus the text and serde surfaces of the configuration types.

use fancy_scaler::{
    AxisFactor, FrameSize, ResolutionRatio, ScaleFactor, ScaleFloor, SizingPolicy, SourceSize,
    ViewportModel,
};

const EXTENTS: [u32; 6] = [1, 37, 100, 480, 1080, 4096];

fn policies() -> Vec<SizingPolicy> {
    vec![
        SizingPolicy::fit_flags(false, false),
        SizingPolicy::fit_flags(true, false),
        SizingPolicy::fit_flags(false, true),
        SizingPolicy::fit_flags(true, true),
        SizingPolicy::Ratio(ResolutionRatio::MatchParent),
        SizingPolicy::Ratio(ResolutionRatio::OneToOne),
        SizingPolicy::Ratio(ResolutionRatio::FourToThree),
        SizingPolicy::Ratio(ResolutionRatio::SixteenToNine),
    ]
}

fn assert_axis_within_bounds(axis: &AxisFactor) {
    let scale = axis.scale();
    assert!(scale.min() <= scale.max(), "empty scale range: {scale:?}");
    assert!(
        scale.min() <= scale.current() && scale.current() <= scale.max(),
        "scale out of range: {scale:?}"
    );
    let trans = axis.translation();
    if trans.min() <= 0.0 {
        assert!(
            trans.min() <= trans.current() && trans.current() <= 0.0,
            "translation out of range: {trans:?}"
        );
    }
}

#[test]
fn initial_state_respects_bounds_for_all_inputs() {
    for policy in policies() {
        for &sw in &EXTENTS {
            for &sh in &EXTENTS {
                for &fw in &EXTENTS {
                    for &fh in &EXTENTS {
                        let mut model = ViewportModel::new();
                        model.set_frame_size(FrameSize::new(fw, fh).unwrap());
                        model.set_source(SourceSize::new(sw, sh).unwrap(), policy);
                        assert_axis_within_bounds(model.axis_x().unwrap());
                        assert_axis_within_bounds(model.axis_y().unwrap());
                    }
                }
            }
        }
    }
}

#[test]
fn mutations_keep_bounds() {
    let mut model = ViewportModel::new();
    model.set_frame_size(FrameSize::new(1080, 720).unwrap());
    model.set_source(SourceSize::new(640, 480).unwrap(), SizingPolicy::default());

    let requests = [-1e9, -3.0, 0.0, 0.5, 1.7, 2.2, 9.0, 1e9];
    for &scale in &requests {
        for &trans in &requests {
            let (x, y) = model.axes_mut().unwrap();
            x.apply_scale(scale);
            y.apply_scale(scale);
            x.apply_trans(trans * 100.0);
            y.apply_trans(trans * 100.0);
            assert_axis_within_bounds(model.axis_x().unwrap());
            assert_axis_within_bounds(model.axis_y().unwrap());
        }
    }
}

#[test]
fn fit_example_from_native_floor() {
    let mut axis = AxisFactor::new(ScaleFactor::new(100, 200, ScaleFloor::Native), 200);
    assert_eq!(axis.scale().fit(), 2.0);
    assert_eq!(axis.scale().min(), 1.0);
    assert_eq!(axis.scale().max(), 8.0);
    assert_eq!(axis.scale().current(), 1.0);

    axis.apply_fit_scale();
    axis.apply_central_trans();
    assert_eq!(axis.scale().current(), 2.0);
    assert_eq!(axis.translation().min(), 0.0);
    assert_eq!(axis.translation().current(), 0.0);
}

#[test]
fn focus_anchoring_after_zoom() {
    let mut axis = AxisFactor::new(ScaleFactor::new(120, 360, ScaleFloor::Fit), 360);
    axis.apply_scale(5.0);
    for focus in [0.0, 90.0, 180.0, 359.0] {
        axis.apply_focus_trans(focus);
        let expected = axis.translation().min() * (focus / 360.0);
        assert!((axis.translation().current() - expected).abs() < 1e-9);
    }
}

#[test]
fn sizes_and_ratios_display() {
    let frame = FrameSize::new(640, 480).unwrap();
    assert_eq!(frame.to_string(), "width: 640, height: 480");
    for ratio in [
        ResolutionRatio::MatchParent,
        ResolutionRatio::OneToOne,
        ResolutionRatio::FourToThree,
        ResolutionRatio::SixteenToNine,
    ] {
        assert_eq!(ratio.to_string().parse::<ResolutionRatio>(), Ok(ratio));
    }
    assert_eq!(ResolutionRatio::SixteenToNine.to_string(), "ratio_16:9");
}

#[test]
fn errors_render_readable_messages() {
    let err = SourceSize::new(0, 10).unwrap_err();
    assert_eq!(err.to_string(), "source size must be positive, got 0x10");
}

#[cfg(feature = "serde")]
mod serde_config {
    use fancy_scaler::{
        DoubleTapToggle, EmissionMode, ResolutionRatio, ScalerConfig, SizingPolicy,
        ZoomAnchorPolicy,
    };

    #[test]
    fn config_fills_missing_fields_with_defaults() {
        let config: ScalerConfig =
            serde_json::from_str(r#"{ "zoom_anchor": "center", "scroll_factor": 1.5 }"#).unwrap();
        assert_eq!(config.zoom_anchor, ZoomAnchorPolicy::Center);
        assert_eq!(config.scroll_factor, 1.5);
        assert_eq!(config.double_tap, DoubleTapToggle::MinMax);
        assert_eq!(config.emission, EmissionMode::Immediate);
    }

    #[test]
    fn sizing_policy_uses_snake_case_names() {
        let policy: SizingPolicy = serde_json::from_str(r#"{ "ratio": "four_to_three" }"#).unwrap();
        assert_eq!(policy, SizingPolicy::Ratio(ResolutionRatio::FourToThree));

        let json = serde_json::to_string(&SizingPolicy::fit_flags(true, false)).unwrap();
        assert_eq!(
            json,
            r#"{"fit_flags":{"width_fit_frame":true,"height_fit_frame":false}}"#
        );
    }
}
