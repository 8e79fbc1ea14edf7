//! Browser implementations of the core's host traits.

use pagefx_core::clock::{FrameCallback, FrameClock};
use pagefx_core::config::Selectors;
use pagefx_core::sink::{ClassSink, TextSink, TransformSink};
use pagefx_core::{EffectError, Rect};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, Window};

pub fn host_error(err: JsValue) -> EffectError {
    EffectError::Host(format!("{:?}", err))
}

/// `requestAnimationFrame`-backed frame clock.
#[derive(Clone)]
pub struct AnimationFrameClock {
    window: Window,
}

impl AnimationFrameClock {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameClock for AnimationFrameClock {
    fn schedule(&self, callback: FrameCallback) {
        let closure = Closure::once_into_js(move |now: f64| callback(now));
        if let Err(err) = self.window.request_animation_frame(closure.unchecked_ref()) {
            log::warn!("requestAnimationFrame rejected: {:?}", err);
        }
    }
}

/// Handle to one page element, owned by exactly one component.
#[derive(Clone)]
pub struct ElementHandle(pub Element);

impl ElementHandle {
    pub fn rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    pub fn set_style(&self, property: &str, value: &str) {
        let Some(el) = self.0.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = el.style().set_property(property, value) {
            log::warn!("setting {} failed: {:?}", property, err);
        }
    }
}

impl ClassSink for ElementHandle {
    fn add_class(&mut self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("adding class {} failed: {:?}", class, err);
        }
    }
}

impl TextSink for ElementHandle {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

impl TransformSink for ElementHandle {
    fn set_transform(&mut self, transform: &str) {
        self.set_style("transform", transform);
    }
}

/// Register `handler` for `event` on `target` for the page's lifetime.
pub fn listen<E, F>(target: &EventTarget, event: &str, passive: bool, handler: F) -> Result<(), EffectError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(host_error)?;
    closure.forget();
    Ok(())
}

fn query_one(document: &Document, selector: &str) -> Option<ElementHandle> {
    document.query_selector(selector).ok().flatten().map(ElementHandle)
}

fn query_all(document: &Document, selector: &str) -> Vec<ElementHandle> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(ElementHandle)
        .collect()
}

/// Everything the engine reads from the page, queried once.
///
/// Fields are moved out one component at a time, so no two components
/// ever hold the same element.
pub struct PageTargets {
    pub hero: Option<ElementHandle>,
    pub background: Option<ElementHandle>,
    pub heading: Option<ElementHandle>,
    pub section_headers: Vec<ElementHandle>,
    pub fade_up: Vec<ElementHandle>,
    pub counters: Vec<ElementHandle>,
    pub cards: Vec<ElementHandle>,
    pub canvas: Option<ElementHandle>,
}

impl PageTargets {
    pub fn query(document: &Document, selectors: &Selectors) -> Self {
        Self {
            hero: query_one(document, selectors.hero),
            background: query_one(document, selectors.hero_background),
            heading: query_one(document, selectors.hero_heading),
            section_headers: query_all(document, selectors.section_headers),
            fade_up: query_all(document, selectors.fade_up),
            counters: query_all(document, selectors.counters),
            cards: query_all(document, selectors.tilt_cards),
            canvas: document.get_element_by_id(selectors.canvas_id).map(ElementHandle),
        }
    }
}
