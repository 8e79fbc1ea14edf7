use crate::error::EffectError;
use crate::surface::Rgba;

/// Upper bound accepted for `max_particles`; links are paired O(n²).
pub const PARTICLE_CEILING: usize = 2_000;

/// Particle field tuning.
#[derive(Clone)]
pub struct FieldConfig {
    /// Surface area (px²) that earns one particle.
    pub area_per_particle: f32,
    pub min_particles: usize,
    pub max_particles: usize,
    pub radius_range: (f32, f32),
    pub max_speed_x: f32,
    pub max_speed_y: f32,
    pub alpha_range: (f32, f32),
    /// Horizontal sway `sin(y * sway_frequency) * sway_amplitude`.
    pub sway_frequency: f32,
    pub sway_amplitude: f32,
    /// Constant vertical drift added every frame (negative is upward).
    pub drift: f32,
    /// How far past an edge a particle travels before wrapping.
    pub wrap_margin: f32,
    pub link_distance: f32,
    /// Link alpha at zero distance; falls off linearly to 0 at `link_distance`.
    pub link_alpha: f32,
    pub link_width: f32,
    pub particle_color: Rgba,
    pub link_color: Rgba,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 90_000.0,
            min_particles: 28,
            max_particles: 80,
            radius_range: (0.8, 2.4),
            max_speed_x: 0.3,
            max_speed_y: 0.12,
            alpha_range: (0.06, 0.4),
            sway_frequency: 0.01,
            sway_amplitude: 0.02,
            drift: -0.01,
            wrap_margin: 10.0,
            link_distance: 100.0,
            link_alpha: 0.045,
            link_width: 0.55,
            particle_color: Rgba::rgb(255, 255, 255),
            link_color: Rgba::rgb(173, 216, 255),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), EffectError> {
        if !(self.area_per_particle > 0.0) {
            return Err(invalid("area_per_particle must be positive"));
        }
        if self.min_particles > self.max_particles {
            return Err(invalid("min_particles exceeds max_particles"));
        }
        if self.max_particles > PARTICLE_CEILING {
            return Err(invalid("max_particles exceeds PARTICLE_CEILING"));
        }
        if self.radius_range.0 > self.radius_range.1 || self.radius_range.0 < 0.0 {
            return Err(invalid("radius_range is inverted or negative"));
        }
        if self.alpha_range.0 > self.alpha_range.1
            || self.alpha_range.0 < 0.0
            || self.alpha_range.1 > 1.0
        {
            return Err(invalid("alpha_range must lie inside [0, 1]"));
        }
        if !(self.link_distance > 0.0) {
            return Err(invalid("link_distance must be positive"));
        }
        if self.wrap_margin < 0.0 {
            return Err(invalid("wrap_margin must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.link_alpha) {
            return Err(invalid("link_alpha must lie inside [0, 1]"));
        }
        if !(self.link_width >= 0.0) || !self.link_width.is_finite() {
            return Err(invalid("link_width must be finite and not negative"));
        }
        if !self.sway_frequency.is_finite() || !self.sway_amplitude.is_finite() {
            return Err(invalid("sway parameters must be finite"));
        }
        Ok(())
    }
}

/// Scroll-linked background offset.
#[derive(Clone)]
pub struct ParallaxConfig {
    /// Clamp bound for the raw offset, in px.
    pub range: f32,
    /// Multiplier applied to `progress - 0.5`.
    pub gain: f32,
    /// Fraction of the clamped offset actually applied.
    pub depth: f32,
    pub scale: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            range: 40.0,
            gain: 40.0,
            depth: 0.35,
            scale: 1.02,
        }
    }
}

/// Tilt per unit of normalized pointer offset; the card edge sits at 0.5.
#[derive(Clone)]
pub struct TiltConfig {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub lift_px: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            rotate_x_deg: 6.0,
            rotate_y_deg: -10.0,
            lift_px: 8.0,
        }
    }
}

#[derive(Clone)]
pub struct CounterConfig {
    pub duration_ms: f64,
    /// Attribute carrying the goal value.
    pub goal_attribute: &'static str,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1100.0,
            goal_attribute: "data-target",
        }
    }
}

/// Visibility thresholds and the state classes they add.
#[derive(Clone)]
pub struct RevealConfig {
    pub underline_threshold: f32,
    pub underline_class: &'static str,
    pub fade_threshold: f32,
    pub fade_class: &'static str,
    pub counter_threshold: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            underline_threshold: 0.2,
            underline_class: "underline-visible",
            fade_threshold: 0.18,
            fade_class: "visible",
            counter_threshold: 0.6,
        }
    }
}

#[derive(Clone)]
pub struct TitleConfig {
    pub word_class: &'static str,
    pub stagger_ms: u32,
    pub transform_ms: u32,
    pub opacity_ms: u32,
    pub transform_easing: &'static str,
    /// Transform each word settles at once revealed.
    pub settled_transform: &'static str,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            word_class: "hero-title-word",
            stagger_ms: 70,
            transform_ms: 650,
            opacity_ms: 520,
            transform_easing: "cubic-bezier(.2,.9,.3,1)",
            settled_transform: "translateY(0) rotateX(0deg)",
        }
    }
}

/// DOM query contract.
#[derive(Clone)]
pub struct Selectors {
    pub hero: &'static str,
    pub hero_background: &'static str,
    pub hero_heading: &'static str,
    pub section_headers: &'static str,
    pub fade_up: &'static str,
    pub counters: &'static str,
    pub tilt_cards: &'static str,
    /// Element id, not a selector.
    pub canvas_id: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            hero: ".iqac-hero",
            hero_background: ".hero-image",
            hero_heading: ".hero-inner h1",
            section_headers: "h2",
            fade_up: ".fade-up",
            counters: ".num",
            tilt_cards: ".info-card",
            canvas_id: "hero-canvas",
        }
    }
}

#[derive(Clone, Default)]
pub struct EngineConfig {
    pub field: FieldConfig,
    pub parallax: ParallaxConfig,
    pub tilt: TiltConfig,
    pub counter: CounterConfig,
    pub reveal: RevealConfig,
    pub title: TitleConfig,
    pub selectors: Selectors,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EffectError> {
        self.field.validate()?;
        if !(self.counter.duration_ms > 0.0) {
            return Err(invalid("counter duration must be positive"));
        }
        for threshold in [
            self.reveal.underline_threshold,
            self.reveal.fade_threshold,
            self.reveal.counter_threshold,
        ] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(invalid("visibility thresholds must lie inside [0, 1]"));
            }
        }
        if self.parallax.range < 0.0 {
            return Err(invalid("parallax range must not be negative"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> EffectError {
    EffectError::InvalidConfig(reason.to_owned())
}
