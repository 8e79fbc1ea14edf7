use crate::config::TiltConfig;
use crate::geometry::Rect;
use crate::math::unsign_zero;
use crate::sink::TransformSink;
use glam::Vec2;

/// 3D card tilt, in degrees and px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub translate_z_px: f32,
}

impl TiltTransform {
    pub const IDENTITY: TiltTransform = TiltTransform {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        translate_z_px: 0.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) translateZ({}px)",
            unsign_zero(self.rotate_x_deg),
            unsign_zero(self.rotate_y_deg),
            unsign_zero(self.translate_z_px)
        )
    }
}

/// Pointer offset from the rectangle centre, normalized by its size.
///
/// A zero-size axis yields 0 on that axis.
pub fn normalized_offset(rect: Rect, pointer: Vec2) -> Vec2 {
    let c = rect.center();
    let axis = |p: f32, center: f32, extent: f32| {
        if extent > 0.0 {
            (p - center) / extent
        } else {
            0.0
        }
    };
    Vec2::new(axis(pointer.x, c.x, rect.width), axis(pointer.y, c.y, rect.height))
}

pub fn tilt_for(rect: Rect, pointer: Vec2, config: &TiltConfig) -> TiltTransform {
    let d = normalized_offset(rect, pointer);
    TiltTransform {
        rotate_x_deg: d.y * config.rotate_x_deg,
        rotate_y_deg: d.x * config.rotate_y_deg,
        translate_z_px: config.lift_px,
    }
}

/// Pointer-reactive tilt for one card.
///
/// The card's rectangle is measured on enter and reused for every move of
/// that hover session. It is dropped on leave, so the next session measures
/// again; layout shifts during one session are not tracked.
pub struct PointerTilt<S: TransformSink> {
    card: S,
    config: TiltConfig,
    cached: Option<Rect>,
}

impl<S: TransformSink> PointerTilt<S> {
    pub fn new(card: S, config: TiltConfig) -> Self {
        Self {
            card,
            config,
            cached: None,
        }
    }

    pub fn cached_rect(&self) -> Option<Rect> {
        self.cached
    }

    pub fn pointer_enter(&mut self, rect: Rect) {
        self.cached = Some(rect);
    }

    /// Tilt towards `pointer`. `measure` runs only when no session rectangle
    /// is cached yet (a move that arrives without an enter).
    pub fn pointer_move<M>(&mut self, pointer: Vec2, measure: M) -> TiltTransform
    where
        M: FnOnce() -> Rect,
    {
        let rect = *self.cached.get_or_insert_with(measure);
        let tilt = tilt_for(rect, pointer, &self.config);
        self.card.set_transform(&tilt.to_css());
        tilt
    }

    pub fn pointer_leave(&mut self) {
        self.cached = None;
        self.card.set_transform(&TiltTransform::IDENTITY.to_css());
    }
}
