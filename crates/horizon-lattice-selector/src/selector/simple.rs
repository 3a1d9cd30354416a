//! Compound selector accumulator.

use std::fmt;

/// The parts of a single compound selector (e.g., `a#nav.item[href]:hover::after`).
///
/// Groups are always rendered in the order element, id, classes, attributes,
/// pseudo-classes, pseudo-element regardless of how they were filled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimpleSelector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
}

impl SimpleSelector {
    /// Create a new empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the canonical text and reset every group.
    ///
    /// Rendering an already cleared selector yields the empty string.
    pub fn render(&mut self) -> String {
        std::mem::take(self).to_string()
    }

    /// Check if no part has been set.
    pub fn is_empty(&self) -> bool {
        self.element.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.pseudo_classes.is_empty()
            && self.pseudo_element.is_none()
    }

    /// The type selector, if set.
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The ID, if set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class names in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attribute clause bodies in insertion order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-class names in insertion order.
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    pub fn pseudo_element(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    pub(crate) fn set_element(&mut self, name: String) {
        self.element = Some(name);
    }

    pub(crate) fn set_id(&mut self, name: String) {
        self.id = Some(name);
    }

    pub(crate) fn push_class(&mut self, name: String) {
        self.classes.push(name);
    }

    pub(crate) fn push_attribute(&mut self, clause: String) {
        self.attributes.push(clause);
    }

    pub(crate) fn push_pseudo_class(&mut self, name: String) {
        self.pseudo_classes.push(name);
    }

    pub(crate) fn set_pseudo_element(&mut self, name: String) {
        self.pseudo_element = Some(name);
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            write!(f, "{}", element)?;
        }

        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }

        for class in &self.classes {
            write!(f, ".{}", class)?;
        }

        for attr in &self.attributes {
            write!(f, "[{}]", attr)?;
        }

        for pseudo in &self.pseudo_classes {
            write!(f, ":{}", pseudo)?;
        }

        if let Some(pseudo) = &self.pseudo_element {
            write!(f, "::{}", pseudo)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_groups_in_canonical_order() {
        let mut sel = SimpleSelector::new();
        // Filled out of order on purpose; rendering reorders.
        sel.set_pseudo_element("after".into());
        sel.push_pseudo_class("hover".into());
        sel.push_attribute("href".into());
        sel.push_class("nav".into());
        sel.push_class("item".into());
        sel.set_id("menu".into());
        sel.set_element("a".into());
        assert_eq!(sel.to_string(), "a#menu.nav.item[href]:hover::after");
    }

    #[test]
    fn render_resets() {
        let mut sel = SimpleSelector::new();
        sel.set_element("div".into());
        sel.push_class("box".into());
        assert!(!sel.is_empty());

        assert_eq!(sel.render(), "div.box");
        assert!(sel.is_empty());
        assert_eq!(sel.render(), "");
    }

    #[test]
    fn display_does_not_reset() {
        let mut sel = SimpleSelector::new();
        sel.set_id("main".into());
        assert_eq!(sel.to_string(), "#main");
        assert_eq!(sel.id(), Some("main"));
        assert_eq!(sel.render(), "#main");
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(SimpleSelector::new().to_string(), "");
    }
}
