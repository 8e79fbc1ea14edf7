use glam::Vec2;
use pagefx_core::config::TiltConfig;
use pagefx_core::geometry::Rect;
use pagefx_core::tilt::{normalized_offset, tilt_for, PointerTilt, TiltTransform};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const IDENTITY_CSS: &str = "rotateX(0deg) rotateY(0deg) translateZ(0px)";

fn card() -> Rect {
    Rect::new(100.0, 200.0, 300.0, 200.0)
}

#[test]
fn test_center_gives_zero_rotation() {
    let t = tilt_for(card(), card().center(), &TiltConfig::default());
    assert_eq!(t.rotate_x_deg, 0.0);
    assert_eq!(t.rotate_y_deg, 0.0);
    assert_eq!(t.translate_z_px, 8.0);
    assert_eq!(t.to_css(), "rotateX(0deg) rotateY(0deg) translateZ(8px)");
}

#[test]
fn test_corner_tilt() {
    // Bottom-right corner: dx = dy = 0.5
    let t = tilt_for(card(), Vec2::new(400.0, 400.0), &TiltConfig::default());
    assert!((t.rotate_x_deg - 3.0).abs() < 1e-6);
    assert!((t.rotate_y_deg + 5.0).abs() < 1e-6);
}

#[test]
fn test_zero_size_rect_is_finite() {
    let flat = Rect::new(10.0, 10.0, 0.0, 0.0);
    let d = normalized_offset(flat, Vec2::new(50.0, 90.0));
    assert_eq!(d, Vec2::ZERO);
}

#[test]
fn test_rect_measured_once_per_session() {
    let css = Rc::new(RefCell::new(String::new()));
    let mut tilt = PointerTilt::new(css.clone(), TiltConfig::default());
    let measured = Cell::new(0);

    tilt.pointer_enter(card());
    for x in [150.0, 200.0, 250.0] {
        tilt.pointer_move(Vec2::new(x, 300.0), || {
            measured.set(measured.get() + 1);
            Rect::new(0.0, 0.0, 10.0, 10.0)
        });
    }
    assert_eq!(measured.get(), 0, "moves reuse the rectangle captured on enter");
    assert_eq!(tilt.cached_rect(), Some(card()));
}

#[test]
fn test_stale_rect_used_within_session() {
    let css = Rc::new(RefCell::new(String::new()));
    let mut tilt = PointerTilt::new(css.clone(), TiltConfig::default());
    tilt.pointer_enter(card());
    // The card scrolled 100px up but the session keeps the old rectangle.
    let moved = Rect::new(100.0, 100.0, 300.0, 200.0);
    let t = tilt.pointer_move(card().center(), || moved);
    assert_eq!(t.rotate_x_deg, 0.0);
}

#[test]
fn test_reentry_remeasures() {
    let css = Rc::new(RefCell::new(String::new()));
    let mut tilt = PointerTilt::new(css.clone(), TiltConfig::default());
    tilt.pointer_enter(card());
    tilt.pointer_leave();
    assert_eq!(tilt.cached_rect(), None);

    let moved = Rect::new(100.0, 100.0, 300.0, 200.0);
    tilt.pointer_enter(moved);
    let t = tilt.pointer_move(moved.center(), card);
    assert_eq!(t.rotate_x_deg, 0.0);
    assert_eq!(tilt.cached_rect(), Some(moved));
}

#[test]
fn test_move_without_enter_measures_lazily() {
    let css = Rc::new(RefCell::new(String::new()));
    let mut tilt = PointerTilt::new(css.clone(), TiltConfig::default());
    let measured = Cell::new(0);
    for _ in 0..3 {
        tilt.pointer_move(Vec2::new(120.0, 220.0), || {
            measured.set(measured.get() + 1);
            card()
        });
    }
    assert_eq!(measured.get(), 1);
}

#[test]
fn test_leave_always_resets_to_identity() {
    let css = Rc::new(RefCell::new(String::new()));
    let mut tilt = PointerTilt::new(css.clone(), TiltConfig::default());
    tilt.pointer_enter(card());
    tilt.pointer_move(Vec2::new(110.0, 390.0), card);
    assert_ne!(*css.borrow(), IDENTITY_CSS);

    tilt.pointer_leave();
    assert_eq!(*css.borrow(), IDENTITY_CSS);

    // Leave without any prior tilt.
    let mut fresh = PointerTilt::new(css.clone(), TiltConfig::default());
    css.borrow_mut().clear();
    fresh.pointer_leave();
    assert_eq!(*css.borrow(), IDENTITY_CSS);
    assert_eq!(TiltTransform::IDENTITY.to_css(), IDENTITY_CSS);
}
