use glam::Vec2;

/// Axis-aligned rectangle in viewport coordinates, as reported by layout.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// True when any part of the rectangle lies within `[0, viewport_height)`.
    pub fn overlaps_vertically(&self, viewport_height: f32) -> bool {
        self.bottom() > 0.0 && self.top < viewport_height
    }
}

/// Fraction of `rect`'s area that lies inside `viewport`, in [0,1].
///
/// Zero-area rectangles count as fully visible when they sit inside the
/// viewport, matching how intersection observers report them.
pub fn visible_fraction(rect: Rect, viewport: Rect) -> f32 {
    let w = (rect.right().min(viewport.right()) - rect.left.max(viewport.left)).max(0.0);
    let h = (rect.bottom().min(viewport.bottom()) - rect.top.max(viewport.top)).max(0.0);
    let area = rect.width * rect.height;
    if area <= 0.0 {
        let inside = rect.left >= viewport.left
            && rect.right() <= viewport.right()
            && rect.top >= viewport.top
            && rect.bottom() <= viewport.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    (w * h / area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_half_below_fold() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let rect = Rect::new(100.0, 700.0, 200.0, 200.0);
        assert!((visible_fraction(rect, viewport) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_fraction_outside_is_zero() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let rect = Rect::new(0.0, 900.0, 100.0, 100.0);
        assert_eq!(visible_fraction(rect, viewport), 0.0);
    }

    #[test]
    fn test_vertical_overlap_edges() {
        let r = Rect::new(0.0, -100.0, 10.0, 100.0);
        assert!(!r.overlaps_vertically(800.0), "bottom == 0 is not visible");
        let r = Rect::new(0.0, 800.0, 10.0, 100.0);
        assert!(!r.overlaps_vertically(800.0), "top == H is not visible");
    }
}
