mod canvas;
mod host;
mod observe;
mod pointer;
mod scroll;
mod title;

use canvas::CanvasSurface;
use host::{AnimationFrameClock, PageTargets};
use pagefx_core::particle::ParticleVertex;
use pagefx_core::{EffectError, EngineConfig, FieldLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Count a mounted component, staying quiet about absent targets.
fn settle(component: &str, result: Result<(), EffectError>) -> u32 {
    match result {
        Ok(()) => 1,
        Err(err) if err.is_silent() => 0,
        Err(err) => {
            log::warn!("{} disabled: {}", component, err);
            0
        }
    }
}

#[wasm_bindgen]
pub struct PageEffects {
    config: EngineConfig,
    field: Option<Rc<RefCell<FieldLoop<CanvasSurface>>>>,
    mounted: bool,
}

#[wasm_bindgen]
impl PageEffects {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PageEffects {
        PageEffects {
            config: EngineConfig::default(),
            field: None,
            mounted: false,
        }
    }

    #[wasm_bindgen]
    pub fn set_field_density(&mut self, area_per_particle: f32, min_particles: usize, max_particles: usize) -> bool {
        self.try_config(|c| {
            c.field.area_per_particle = area_per_particle;
            c.field.min_particles = min_particles;
            c.field.max_particles = max_particles;
        })
    }

    #[wasm_bindgen]
    pub fn set_links(&mut self, distance: f32, max_alpha: f32, width: f32) -> bool {
        self.try_config(|c| {
            c.field.link_distance = distance;
            c.field.link_alpha = max_alpha;
            c.field.link_width = width;
        })
    }

    #[wasm_bindgen]
    pub fn set_thresholds(&mut self, underline: f32, fade: f32, counter: f32) -> bool {
        self.try_config(|c| {
            c.reveal.underline_threshold = underline;
            c.reveal.fade_threshold = fade;
            c.reveal.counter_threshold = counter;
        })
    }

    #[wasm_bindgen]
    pub fn set_counter_duration(&mut self, duration_ms: f64) -> bool {
        self.try_config(|c| c.counter.duration_ms = duration_ms)
    }

    #[wasm_bindgen]
    pub fn set_tilt(&mut self, rotate_x_deg: f32, rotate_y_deg: f32, lift_px: f32) -> bool {
        self.try_config(|c| {
            c.tilt.rotate_x_deg = rotate_x_deg;
            c.tilt.rotate_y_deg = rotate_y_deg;
            c.tilt.lift_px = lift_px;
        })
    }

    /// Query the page and start every component whose targets exist.
    ///
    /// Returns how many components started. Mounting twice is a no-op.
    #[wasm_bindgen]
    pub fn mount(&mut self) -> u32 {
        if self.mounted {
            return 0;
        }
        let Some(window) = web_sys::window() else {
            return 0;
        };
        let Some(document) = window.document() else {
            return 0;
        };
        self.mounted = true;

        let cfg = &self.config;
        let clock = AnimationFrameClock::new(window.clone());
        let PageTargets {
            hero,
            background,
            heading,
            section_headers,
            fade_up,
            counters,
            cards,
            canvas,
        } = PageTargets::query(&document, &cfg.selectors);

        let mut started = 0;
        started += settle(
            "hero parallax",
            scroll::mount_parallax(hero, background, cfg.parallax.clone(), &window),
        );
        started += settle(
            "hero title",
            title::mount_title_reveal(heading, &cfg.title, &document, &clock),
        );
        started += settle(
            "section underline",
            observe::mount_class_reveal(
                section_headers,
                cfg.reveal.underline_threshold,
                cfg.reveal.underline_class,
                "section headers",
            ),
        );
        started += settle(
            "fade-up",
            observe::mount_class_reveal(fade_up, cfg.reveal.fade_threshold, cfg.reveal.fade_class, "fade-up"),
        );
        started += settle(
            "counters",
            observe::mount_counters(counters, &cfg.counter, cfg.reveal.counter_threshold, clock.clone()),
        );
        started += settle("card tilt", pointer::mount_tilt(cards, &cfg.tilt));

        match canvas::mount(canvas, cfg.field.clone(), &window, clock) {
            Ok(field) => {
                self.field = Some(field);
                started += 1;
            }
            Err(err) => started += settle("particle field", Err(err)),
        }

        web_sys::console::log_1(&format!("PageEffects mounted: {} components", started).into());
        started
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.field
            .as_ref()
            .map_or(0, |f| f.borrow().field.particles.count)
    }

    /// Pointer to the live `[x, y, radius, alpha]` snapshot of every particle.
    ///
    /// Valid until the next frame; the buffer never outgrows its initial
    /// capacity, so the address is stable across resizes.
    #[wasm_bindgen]
    pub fn particle_buffer_ptr(&self) -> *const f32 {
        match &self.field {
            Some(f) => bytemuck::cast_slice::<ParticleVertex, f32>(f.borrow().vertices()).as_ptr(),
            None => std::ptr::null(),
        }
    }

    #[wasm_bindgen]
    pub fn particle_buffer_byte_length(&self) -> usize {
        self.field.as_ref().map_or(0, |f| {
            bytemuck::cast_slice::<ParticleVertex, u8>(f.borrow().vertices()).len()
        })
    }
}

impl PageEffects {
    /// Apply `edit` to a copy of the config and keep it only if it validates.
    ///
    /// Mounted components hold their own copies, so edits after `mount` are refused.
    fn try_config(&mut self, edit: impl FnOnce(&mut EngineConfig)) -> bool {
        if self.mounted {
            log::warn!("config change ignored: effects already mounted");
            return false;
        }
        let mut candidate = self.config.clone();
        edit(&mut candidate);
        match candidate.validate() {
            Ok(()) => {
                self.config = candidate;
                true
            }
            Err(err) => {
                log::warn!("config rejected: {}", err);
                false
            }
        }
    }
}

impl Default for PageEffects {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_validate_before_mount() {
        let mut effects = PageEffects::new();
        assert!(effects.set_links(120.0, 0.1, 1.0));
        assert_eq!(effects.config.field.link_distance, 120.0);

        assert!(!effects.set_links(120.0, -0.5, 1.0));
        assert_eq!(effects.config.field.link_alpha, 0.1);
        assert!(!effects.set_field_density(90_000.0, 28, usize::MAX));
        assert_eq!(effects.config.field.max_particles, 80);
    }

    #[test]
    fn test_setters_refused_once_mounted() {
        let mut effects = PageEffects::new();
        effects.mounted = true;

        assert!(!effects.set_counter_duration(500.0));
        assert!(!effects.set_tilt(1.0, 1.0, 1.0));
        assert_eq!(effects.config.counter.duration_ms, 1100.0);
        assert_eq!(effects.config.tilt.lift_px, 8.0);
    }
}
