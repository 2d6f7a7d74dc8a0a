//! Document port — the slice of the DOM the controller touches.

/// Synchronous access to the hosting document.
///
/// Every method takes `&self`: the DOM is a shared, interior-mutable
/// resource. Methods addressing an element by id report its absence instead
/// of failing.
pub trait Document {
    /// Read an attribute of the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute on the root element.
    fn set_root_attribute(&self, name: &str, value: &str);

    /// Flip `class` on the element with `element_id`.
    ///
    /// Returns `None` when the element does not exist or rejects the class,
    /// otherwise whether the class is present after the flip.
    fn toggle_class(&self, element_id: &str, class: &str) -> Option<bool>;

    /// Force `class` present or absent. Returns `false` when the element does
    /// not exist or rejects the class.
    fn set_class(&self, element_id: &str, class: &str, present: bool) -> bool;

    /// Set the text and tooltip of a control. Returns `false` when the
    /// element does not exist.
    fn set_control_label(&self, element_id: &str, text: &str, title: &str) -> bool;
}

impl<T: Document + ?Sized> Document for &T {
    fn root_attribute(&self, name: &str) -> Option<String> {
        (**self).root_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        (**self).set_root_attribute(name, value);
    }

    fn toggle_class(&self, element_id: &str, class: &str) -> Option<bool> {
        (**self).toggle_class(element_id, class)
    }

    fn set_class(&self, element_id: &str, class: &str, present: bool) -> bool {
        (**self).set_class(element_id, class, present)
    }

    fn set_control_label(&self, element_id: &str, text: &str, title: &str) -> bool {
        (**self).set_control_label(element_id, text, title)
    }
}
