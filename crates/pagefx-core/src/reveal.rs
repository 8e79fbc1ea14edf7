use crate::sink::ClassSink;
use crate::trigger::VisibilityTrigger;

/// Lifecycle of a one-shot reveal target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Triggered,
}

/// An element that gains a state class the first time it is seen.
pub struct RevealTarget<E> {
    pub element: E,
    state: RevealState,
}

impl<E: ClassSink> RevealTarget<E> {
    pub fn new(element: E) -> Self {
        Self {
            element,
            state: RevealState::Pending,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Add `class` once. Returns false if the target already fired.
    pub fn trigger(&mut self, class: &str) -> bool {
        if self.state == RevealState::Triggered {
            return false;
        }
        self.element.add_class(class);
        self.state = RevealState::Triggered;
        true
    }
}

/// Build a trigger that adds `class` to each target on first visibility.
pub fn class_reveal<E, I>(elements: I, threshold: f32, class: &'static str) -> VisibilityTrigger<RevealTarget<E>>
where
    E: ClassSink + 'static,
    I: IntoIterator<Item = E>,
{
    let mut trigger = VisibilityTrigger::new(threshold);
    trigger.observe_all(elements.into_iter().map(RevealTarget::new), move |target: &mut RevealTarget<E>| {
        target.trigger(class);
    });
    trigger
}
