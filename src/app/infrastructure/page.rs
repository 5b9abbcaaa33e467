//! Page bindings: where theme attributes and font stylesheets end up.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::error::Result;

/// Writes the crate performs on the hosting document
pub trait PageBinding {
    /// Set an attribute on the document's root element
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<()>;

    /// Create or replace the stylesheet identified by `id`
    fn inject_stylesheet(&mut self, id: &str, css: &str) -> Result<()>;
}

#[derive(Debug, Default)]
struct HeadlessState {
    attributes: BTreeMap<String, String>,
    stylesheets: BTreeMap<String, String>,
}

/// Page binding that records writes instead of touching a DOM.
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    pub fn stylesheet(&self, id: &str) -> Option<String> {
        self.state.borrow().stylesheets.get(id).cloned()
    }

    pub fn stylesheet_count(&self) -> usize {
        self.state.borrow().stylesheets.len()
    }
}

impl PageBinding for HeadlessPage {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn inject_stylesheet(&mut self, id: &str, css: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .stylesheets
            .insert(id.to_string(), css.to_string());
        Ok(())
    }
}
