use crate::config::ParallaxConfig;
use crate::geometry::Rect;
use crate::math::unsign_zero;
use crate::sink::TransformSink;

/// Background transform: a vertical offset plus a slight overscale so the
/// shifted edge never shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTransform {
    pub translate_y: f32,
    pub scale: f32,
}

impl ParallaxTransform {
    pub fn to_css(&self) -> String {
        format!(
            "translateY({}px) scale({})",
            unsign_zero(self.translate_y),
            self.scale
        )
    }
}

/// How far the viewport centre has travelled through the anchor plus half a
/// viewport: 0 when the anchor's top sits at the viewport centre, rising as
/// the page scrolls down.
pub fn scroll_progress(anchor: Rect, viewport_height: f32) -> f32 {
    let half = viewport_height * 0.5;
    let span = anchor.height + half;
    if span <= 0.0 {
        return 0.5;
    }
    (half - anchor.top) / span
}

/// Clamped, unscaled offset for a given progress.
pub fn parallax_offset(progress: f32, config: &ParallaxConfig) -> f32 {
    ((progress - 0.5) * config.gain).clamp(-config.range, config.range)
}

/// Transform for the current anchor position, or `None` while the anchor
/// is entirely outside the viewport.
pub fn parallax_transform(anchor: Rect, viewport_height: f32, config: &ParallaxConfig) -> Option<ParallaxTransform> {
    if !anchor.overlaps_vertically(viewport_height) {
        return None;
    }
    let offset = parallax_offset(scroll_progress(anchor, viewport_height), config);
    Some(ParallaxTransform {
        translate_y: offset * config.depth,
        scale: config.scale,
    })
}

/// Scroll-linked background offset.
///
/// While the anchor is off screen the last transform stays in place; the
/// background never snaps back.
pub struct ScrollParallax<S: TransformSink> {
    background: S,
    config: ParallaxConfig,
    last: Option<ParallaxTransform>,
}

impl<S: TransformSink> ScrollParallax<S> {
    pub fn new(background: S, config: ParallaxConfig) -> Self {
        Self {
            background,
            config,
            last: None,
        }
    }

    /// Last transform written to the background, if any.
    pub fn last(&self) -> Option<ParallaxTransform> {
        self.last
    }

    /// Recompute from the anchor's current rectangle. Returns whether the
    /// background was updated.
    pub fn on_scroll(&mut self, anchor: Rect, viewport_height: f32) -> bool {
        let Some(transform) = parallax_transform(anchor, viewport_height, &self.config) else {
            return false;
        };
        if self.last != Some(transform) {
            self.background.set_transform(&transform.to_css());
            self.last = Some(transform);
        }
        true
    }
}
