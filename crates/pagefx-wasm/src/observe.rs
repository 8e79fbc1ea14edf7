//! One-shot visibility wiring: class reveals and eased counters.

use crate::host::{host_error, AnimationFrameClock, ElementHandle};
use pagefx_core::config::CounterConfig;
use pagefx_core::counter::{parse_goal, EasedCounter};
use pagefx_core::reveal::{class_reveal, RevealTarget};
use pagefx_core::trigger::VisibilityTrigger;
use pagefx_core::{drive, EffectError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Visible fraction reported by the newest entry matching `is_target`.
///
/// Observers may batch several entries for one element; the last reflects its
/// current state. A missing or non-intersecting entry reads as 0.
fn latest_ratio<E>(entries: &[E], is_target: impl Fn(&E) -> bool, reading: impl Fn(&E) -> (bool, f32)) -> f32 {
    match entries.iter().rfind(|e| is_target(e)).map(reading) {
        Some((true, ratio)) => ratio,
        _ => 0.0,
    }
}

/// Feed an `IntersectionObserver` at the trigger's threshold into `trigger`,
/// unobserving each element as soon as it fires.
fn observe<T: 'static>(
    trigger: VisibilityTrigger<T>,
    elements: Vec<Element>,
    element_of: fn(&T) -> &Element,
) -> Result<(), EffectError> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(trigger.threshold() as f64));
    let trigger = Rc::new(RefCell::new(trigger));

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            let fired = trigger.borrow_mut().poll(|target| {
                let element = element_of(target);
                latest_ratio(&entries, |e| e.target() == *element, |e| {
                    (e.is_intersecting(), e.intersection_ratio() as f32)
                })
            });
            for target in &fired {
                observer.unobserve(element_of(target));
            }
        },
    );
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(host_error)?;
    for element in &elements {
        observer.observe(element);
    }
    callback.forget();
    Ok(())
}

fn reveal_element(target: &RevealTarget<ElementHandle>) -> &Element {
    &target.element.0
}

fn counter_element(node: &ElementHandle) -> &Element {
    &node.0
}

/// Add `class` to each element the first time `threshold` of it is visible.
pub fn mount_class_reveal(
    elements: Vec<ElementHandle>,
    threshold: f32,
    class: &'static str,
    label: &'static str,
) -> Result<(), EffectError> {
    if elements.is_empty() {
        return Err(EffectError::MissingTarget(label));
    }
    let raw: Vec<Element> = elements.iter().map(|h| h.0.clone()).collect();
    let trigger = class_reveal(elements, threshold, class);
    observe(trigger, raw, reveal_element)
}

/// Count each counter element up to its goal once it is visible.
pub fn mount_counters(
    nodes: Vec<ElementHandle>,
    config: &CounterConfig,
    threshold: f32,
    clock: AnimationFrameClock,
) -> Result<(), EffectError> {
    if nodes.is_empty() {
        return Err(EffectError::MissingTarget("counters"));
    }
    let duration_ms = config.duration_ms;
    let goal_attribute = config.goal_attribute;
    let raw: Vec<Element> = nodes.iter().map(|h| h.0.clone()).collect();

    let mut trigger = VisibilityTrigger::new(threshold);
    trigger.observe_all(nodes, move |node: &mut ElementHandle| {
        let goal = parse_goal(node.attribute(goal_attribute).as_deref());
        let counter = EasedCounter::new(goal, duration_ms, node.clone());
        drive(clock.clone(), Rc::new(RefCell::new(counter)));
    });
    observe(trigger, raw, counter_element)
}
