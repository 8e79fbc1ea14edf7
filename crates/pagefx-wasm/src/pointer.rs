use crate::host::{listen, ElementHandle};
use glam::Vec2;
use pagefx_core::config::TiltConfig;
use pagefx_core::tilt::PointerTilt;
use pagefx_core::EffectError;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Event, MouseEvent};

/// Attach hover tilt to every card.
pub fn mount_tilt(cards: Vec<ElementHandle>, config: &TiltConfig) -> Result<(), EffectError> {
    if cards.is_empty() {
        return Err(EffectError::MissingTarget("tilt cards"));
    }
    for card in cards {
        let target = card.0.clone();
        let tilt = Rc::new(RefCell::new(PointerTilt::new(card.clone(), config.clone())));

        {
            let tilt = tilt.clone();
            let card = card.clone();
            listen(&target, "mouseenter", true, move |_: Event| {
                tilt.borrow_mut().pointer_enter(card.rect());
            })?;
        }
        {
            let tilt = tilt.clone();
            let card = card.clone();
            listen(&target, "mousemove", true, move |e: MouseEvent| {
                let pointer = Vec2::new(e.client_x() as f32, e.client_y() as f32);
                tilt.borrow_mut().pointer_move(pointer, || card.rect());
            })?;
        }
        listen(&target, "mouseleave", true, move |_: Event| {
            tilt.borrow_mut().pointer_leave();
        })?;
    }
    Ok(())
}
