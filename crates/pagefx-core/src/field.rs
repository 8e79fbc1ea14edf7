use crate::clock::{FrameDriven, FrameStatus};
use crate::config::FieldConfig;
use crate::particle::{ParticleSet, ParticleVertex};
use crate::surface::Surface2d;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Particle count for a `width` x `height` surface.
///
/// One particle per `area_per_particle` px², rounded, then clamped to the
/// configured bounds. Degenerate sizes fall back to the minimum.
pub fn particle_count_for(width: f32, height: f32, config: &FieldConfig) -> usize {
    let raw = (width * height / config.area_per_particle).round();
    let raw = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    raw.max(config.min_particles).min(config.max_particles)
}

/// Opacity of the link between two particles `distance` apart.
///
/// Falls off linearly from `link_alpha` at contact to exactly 0 at
/// `link_distance` and beyond.
pub fn link_alpha(distance: f32, config: &FieldConfig) -> f32 {
    if distance < config.link_distance {
        (1.0 - distance / config.link_distance) * config.link_alpha
    } else {
        0.0
    }
}

/// Toroidal wrap with a margin: leaving by more than `margin` on one side
/// re-enters just past the margin on the other.
#[inline]
pub fn wrap_coordinate(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

/// The background particle simulation.
///
/// Owns the particle batch, the logical surface size and the pixel ratio.
/// Count and scale always change together: a resize throws the old batch
/// away and seeds a new one sized for the new surface.
pub struct ParticleField {
    pub particles: ParticleSet,
    pub config: FieldConfig,
    size: Vec2,
    pixel_ratio: f32,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, pixel_ratio: f32, config: FieldConfig, seed: u64) -> Self {
        let mut field = Self {
            particles: ParticleSet::new(0),
            config,
            size: Vec2::ZERO,
            pixel_ratio: 1.0,
            rng: SmallRng::seed_from_u64(seed),
        };
        field.resize(width, height, pixel_ratio);
        field
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Adopt a new surface size and reseed the whole batch.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.size = Vec2::new(non_negative(width), non_negative(height));
        self.pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        let count = particle_count_for(self.size.x, self.size.y, &self.config);
        self.particles = ParticleSet::seeded(count, self.size, &self.config, &mut self.rng);
        log::debug!(
            "particle field seeded: {} particles on {}x{} @{}x",
            count,
            self.size.x,
            self.size.y,
            self.pixel_ratio
        );
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let cfg = &self.config;
        let (w, h) = (self.size.x, self.size.y);
        for i in 0..self.particles.count {
            let vel = self.particles.velocity[i];
            let pos = &mut self.particles.position[i];
            pos.x += vel.x + (pos.y * cfg.sway_frequency).sin() * cfg.sway_amplitude;
            pos.y += vel.y + cfg.drift;
            pos.x = wrap_coordinate(pos.x, w, cfg.wrap_margin);
            pos.y = wrap_coordinate(pos.y, h, cfg.wrap_margin);
        }
    }

    /// Visit every unordered pair closer than `link_distance` with the
    /// pair's link alpha.
    ///
    /// Brute force over all pairs; the count cap keeps this cheap.
    pub fn for_each_link<F: FnMut(Vec2, Vec2, f32)>(&self, mut visit: F) {
        let positions = &self.particles.position;
        for i in 0..self.particles.count {
            for j in (i + 1)..self.particles.count {
                let (a, b) = (positions[i], positions[j]);
                let d = a.distance(b);
                if d < self.config.link_distance {
                    visit(a, b, link_alpha(d, &self.config));
                }
            }
        }
    }

    /// Draw the current state; assumes the surface was cleared.
    pub fn draw<S: Surface2d + ?Sized>(&self, surface: &mut S) {
        let cfg = &self.config;
        for i in 0..self.particles.count {
            surface.fill_circle(
                self.particles.position[i],
                self.particles.radius[i],
                cfg.particle_color.with_alpha(self.particles.alpha[i]),
            );
        }
        self.for_each_link(|a, b, alpha| {
            surface.stroke_line(a, b, cfg.link_color.with_alpha(alpha), cfg.link_width);
        });
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// A [`ParticleField`] bound to the surface it paints, run forever by the
/// frame clock.
pub struct FieldLoop<S: Surface2d> {
    pub field: ParticleField,
    surface: S,
    vertices: Vec<ParticleVertex>,
    frames: u64,
}

impl<S: Surface2d> FieldLoop<S> {
    pub fn new(field: ParticleField, mut surface: S) -> Self {
        let size = field.size();
        surface.set_backing_size(size.x, size.y, field.pixel_ratio());
        let mut vertices = Vec::with_capacity(field.config.max_particles);
        field.particles.write_vertices(&mut vertices);
        Self {
            field,
            surface,
            vertices,
            frames: 0,
        }
    }

    /// Resize surface and field together.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.field.resize(width, height, pixel_ratio);
        let size = self.field.size();
        self.surface
            .set_backing_size(size.x, size.y, self.field.pixel_ratio());
        self.field.particles.write_vertices(&mut self.vertices);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Snapshot of the field as of the last frame.
    pub fn vertices(&self) -> &[ParticleVertex] {
        &self.vertices
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<S: Surface2d> FrameDriven for FieldLoop<S> {
    fn frame(&mut self, _now_ms: f64) -> FrameStatus {
        let size = self.field.size();
        self.surface.clear(size.x, size.y);
        self.field.step();
        self.field.draw(&mut self.surface);
        self.field.particles.write_vertices(&mut self.vertices);
        self.frames += 1;
        FrameStatus::Continue
    }
}
