//! Capability handles for element mutation.
//!
//! Each component is handed only the sinks for the elements it owns, so two
//! components can never write to the same element.

use std::cell::RefCell;
use std::rc::Rc;

/// Adds state classes to an element.
pub trait ClassSink {
    fn add_class(&mut self, class: &str);
}

/// Replaces an element's text content.
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

/// Writes an element's inline `transform`.
pub trait TransformSink {
    fn set_transform(&mut self, transform: &str);
}

impl ClassSink for Rc<RefCell<Vec<String>>> {
    fn add_class(&mut self, class: &str) {
        let mut classes = self.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }
}

impl TextSink for Rc<RefCell<String>> {
    fn set_text(&mut self, text: &str) {
        let mut current = self.borrow_mut();
        current.clear();
        current.push_str(text);
    }
}

impl TransformSink for Rc<RefCell<String>> {
    fn set_transform(&mut self, transform: &str) {
        let mut current = self.borrow_mut();
        current.clear();
        current.push_str(transform);
    }
}
