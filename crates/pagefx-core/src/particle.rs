use crate::config::FieldConfig;
use crate::math::sample_range;
use glam::Vec2;
use rand::Rng;

/// Per-particle snapshot, 16 bytes, for hosts that read the field directly.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 2],
    pub radius: f32,
    pub alpha: f32,
}

/// SoA particle storage.
///
/// Radius, velocity and alpha are fixed at seeding; only position changes.
pub struct ParticleSet {
    pub count: usize,
    /// Surface-local position, logical px
    pub position: Vec<Vec2>,
    /// Per-frame displacement, logical px
    pub velocity: Vec<Vec2>,
    pub radius: Vec<f32>,
    pub alpha: Vec<f32>,
}

impl ParticleSet {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec2::ZERO; count],
            velocity: vec![Vec2::ZERO; count],
            radius: vec![0.0; count],
            alpha: vec![0.0; count],
        }
    }

    /// Seed `count` particles uniformly over a `size` surface.
    pub fn seeded<R: Rng>(count: usize, size: Vec2, config: &FieldConfig, rng: &mut R) -> Self {
        let mut set = Self::new(count);
        for i in 0..count {
            set.position[i] = Vec2::new(
                sample_range(rng, 0.0, size.x),
                sample_range(rng, 0.0, size.y),
            );
            set.radius[i] = sample_range(rng, config.radius_range.0, config.radius_range.1);
            set.velocity[i] = Vec2::new(
                sample_range(rng, -config.max_speed_x, config.max_speed_x),
                sample_range(rng, -config.max_speed_y, config.max_speed_y),
            );
            set.alpha[i] = sample_range(rng, config.alpha_range.0, config.alpha_range.1);
        }
        set
    }

    /// Overwrite `out` with the current state of every particle.
    pub fn write_vertices(&self, out: &mut Vec<ParticleVertex>) {
        out.clear();
        out.extend((0..self.count).map(|i| ParticleVertex {
            position: self.position[i].to_array(),
            radius: self.radius[i],
            alpha: self.alpha[i],
        }));
    }
}
