use pagefx_core::math::*;
use pagefx_core::surface::Rgba;

#[test]
fn test_ease_out_cubic_boundaries() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-7);
}

#[test]
fn test_ease_out_cubic_monotonic() {
    let mut prev = ease_out_cubic(0.0);
    for i in 1..=1000 {
        let v = ease_out_cubic(i as f64 / 1000.0);
        assert!(v >= prev, "ease_out_cubic decreased at {}", i);
        prev = v;
    }
}

#[test]
fn test_saturate() {
    assert_eq!(saturate(-0.5), 0.0);
    assert_eq!(saturate(0.25), 0.25);
    assert_eq!(saturate(3.0), 1.0);
    assert_eq!(saturate(f64::NAN), 0.0);
}

#[test]
fn test_unsign_zero_formats_plain_zero() {
    assert_eq!(format!("{}", unsign_zero(-0.0)), "0");
    assert_eq!(format!("{}", unsign_zero(-2.5)), "-2.5");
}

#[test]
fn test_rgba_css() {
    assert_eq!(Rgba::rgb(173, 216, 255).with_alpha(0.5).to_string(), "rgba(173,216,255,0.5)");
}
