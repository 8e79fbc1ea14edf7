use crate::host::{listen, ElementHandle};
use pagefx_core::config::ParallaxConfig;
use pagefx_core::parallax::ScrollParallax;
use pagefx_core::EffectError;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Event, Window};

/// Drive the hero background offset from the hero's scroll position.
pub fn mount_parallax(
    hero: Option<ElementHandle>,
    background: Option<ElementHandle>,
    config: ParallaxConfig,
    window: &Window,
) -> Result<(), EffectError> {
    let (Some(hero), Some(background)) = (hero, background) else {
        return Err(EffectError::MissingTarget("hero parallax"));
    };
    let parallax = Rc::new(RefCell::new(ScrollParallax::new(background, config)));
    let win = window.clone();
    let update = move || {
        let viewport_height = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0) as f32;
        parallax.borrow_mut().on_scroll(hero.rect(), viewport_height);
    };
    update();
    listen(window, "scroll", true, move |_: Event| update())
}
