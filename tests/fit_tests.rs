// Host-side tests for background fitting and orientation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod orientation {
    include!("../src/orientation.rs");
}
mod fit {
    include!("../src/fit.rs");
}

use fit::*;
use orientation::Orientation;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn portrait_tall_screen_wide_image_fits_height() {
    // screen ratio 0.5 < texture ratio 2
    let fit = fit_background(Size::new(400.0, 800.0), Size::new(200.0, 100.0), Orientation::Portrait);
    assert!(approx(fit.scale, 8.0));
    assert!(approx(fit.offset.x, -600.0));
    assert!(approx(fit.offset.y, 0.0));
}

#[test]
fn portrait_wide_screen_fits_width() {
    let fit = fit_background(Size::new(800.0, 400.0), Size::new(100.0, 100.0), Orientation::Portrait);
    assert!(approx(fit.scale, 8.0));
    assert!(approx(fit.offset.x, 0.0));
    assert!(approx(fit.offset.y, -200.0));
}

#[test]
fn landscape_inverts_axis_choice() {
    let viewport = Size::new(400.0, 800.0);
    let texture = Size::new(200.0, 100.0);
    let fit = fit_background(viewport, texture, Orientation::Landscape);
    // fit to width: 400 / 200
    assert!(approx(fit.scale, 2.0));
    assert!(approx(fit.offset.x, 0.0));
    assert!(approx(fit.offset.y, (800.0 - 100.0 * 2.0) / 2.0));

    let fit = fit_background(Size::new(800.0, 400.0), Size::new(100.0, 100.0), Orientation::Landscape);
    // fit to height: 400 / 100
    assert!(approx(fit.scale, 4.0));
    assert!(approx(fit.offset.x, 200.0));
    assert!(approx(fit.offset.y, 0.0));
}

#[test]
fn matching_ratios_fill_exactly_in_both_orientations() {
    let viewport = Size::new(400.0, 800.0);
    let texture = Size::new(200.0, 400.0);
    for orientation in [Orientation::Portrait, Orientation::Landscape] {
        let fit = fit_background(viewport, texture, orientation);
        assert!(approx(fit.scale, 2.0));
        assert!(approx(fit.offset.x, 0.0));
        assert!(approx(fit.offset.y, 0.0));
    }
}

#[test]
fn leftover_margin_is_split_evenly() {
    let viewports = [Size::new(400.0, 800.0), Size::new(1280.0, 720.0), Size::new(333.0, 333.0)];
    let textures = [Size::new(200.0, 100.0), Size::new(64.0, 256.0), Size::new(1920.0, 1080.0)];
    for viewport in viewports {
        for texture in textures {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let fit = fit_background(viewport, texture, orientation);
                let scaled = fit.scaled(texture);
                // One axis matches the viewport exactly, the other is centered.
                let width_matched = approx(scaled.width, viewport.width);
                let height_matched = approx(scaled.height, viewport.height);
                assert!(width_matched || height_matched);
                assert!(approx(fit.offset.x * 2.0 + scaled.width, viewport.width));
                assert!(approx(fit.offset.y * 2.0 + scaled.height, viewport.height));
            }
        }
    }
}

#[test]
fn landscape_keeps_whole_image_inside_viewport() {
    let viewport = Size::new(1280.0, 720.0);
    for texture in [Size::new(200.0, 100.0), Size::new(64.0, 256.0), Size::new(1000.0, 1000.0)] {
        let scaled = fit_background(viewport, texture, Orientation::Landscape).scaled(texture);
        assert!(scaled.width <= viewport.width + 1e-3);
        assert!(scaled.height <= viewport.height + 1e-3);
    }
}

#[test]
fn portrait_covers_whole_viewport() {
    let viewport = Size::new(720.0, 1280.0);
    for texture in [Size::new(200.0, 100.0), Size::new(64.0, 256.0), Size::new(1000.0, 1000.0)] {
        let scaled = fit_background(viewport, texture, Orientation::Portrait).scaled(texture);
        assert!(scaled.width >= viewport.width - 1e-3);
        assert!(scaled.height >= viewport.height - 1e-3);
    }
}

#[test]
fn identity_fit_is_unit_scale_at_origin() {
    assert_eq!(BackgroundFit::IDENTITY.scale, 1.0);
    assert_eq!(BackgroundFit::IDENTITY.offset, glam::Vec2::ZERO);
}

#[test]
fn orientation_double_toggle_round_trips() {
    let start = Orientation::default();
    assert_eq!(start, Orientation::Portrait);
    let once = start.toggled();
    assert!(once.is_landscape());
    assert_eq!(once.container_css_transform(), "rotate(-90deg)");
    let twice = once.toggled();
    assert_eq!(twice, start);
    assert_eq!(twice.container_css_transform(), "rotate(0deg)");
    assert_eq!(twice.container_rotation_deg(), start.container_rotation_deg());
}
