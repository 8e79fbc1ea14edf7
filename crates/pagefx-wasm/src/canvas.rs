use crate::host::{host_error, listen, AnimationFrameClock, ElementHandle};
use glam::Vec2;
use pagefx_core::config::FieldConfig;
use pagefx_core::surface::{Rgba, Surface2d};
use pagefx_core::{drive, EffectError, FieldLoop, ParticleField};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, Window};

/// `Surface2d` over a 2D canvas context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EffectError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(host_error)?
            .ok_or_else(|| EffectError::SurfaceUnavailable("no 2d context".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EffectError::SurfaceUnavailable("context is not 2d".to_owned()))?;
        Ok(Self { canvas, ctx })
    }

    /// Logical (CSS) size of the canvas.
    pub fn client_size(&self) -> Vec2 {
        Vec2::new(self.canvas.client_width() as f32, self.canvas.client_height() as f32)
    }
}

impl Surface2d for CanvasSurface {
    fn set_backing_size(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.canvas.set_width((width * pixel_ratio).round() as u32);
        self.canvas.set_height((height * pixel_ratio).round() as u32);
        let ratio = pixel_ratio as f64;
        if let Err(err) = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0) {
            log::warn!("canvas setTransform failed: {:?}", err);
        }
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_string());
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}

fn random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(_) => js_sys::Date::now().to_bits(),
    }
}

/// Start the background particle field on `canvas`, reseeding on resize.
pub fn mount(
    canvas: Option<ElementHandle>,
    config: FieldConfig,
    window: &Window,
    clock: AnimationFrameClock,
) -> Result<Rc<RefCell<FieldLoop<CanvasSurface>>>, EffectError> {
    let canvas = canvas.ok_or(EffectError::MissingTarget("particle canvas"))?;
    let canvas = canvas
        .0
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| EffectError::SurfaceUnavailable("target is not a canvas".to_owned()))?;
    let surface = CanvasSurface::new(canvas)?;
    let size = surface.client_size();
    let field = ParticleField::new(
        size.x,
        size.y,
        window.device_pixel_ratio() as f32,
        config,
        random_seed(),
    );
    let field_loop = Rc::new(RefCell::new(FieldLoop::new(field, surface)));

    {
        let field_loop = field_loop.clone();
        let win = window.clone();
        listen(window, "resize", true, move |_: Event| {
            let mut field_loop = field_loop.borrow_mut();
            let size = field_loop.surface().client_size();
            field_loop.resize(size.x, size.y, win.device_pixel_ratio() as f32);
        })?;
    }

    drive(clock, field_loop.clone());
    Ok(field_loop)
}
