//! DOM access through `web-sys`.

use uiprefs_app::ports::Document;

/// [`Document`] over the live browser document.
#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }
}

impl Document for WebDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        if let Err(err) = root.set_attribute(name, value) {
            tracing::warn!(name, error = ?err, "failed to set root attribute");
        }
    }

    fn toggle_class(&self, element_id: &str, class: &str) -> Option<bool> {
        let element = self.element(element_id)?;
        match element.class_list().toggle(class) {
            Ok(present) => Some(present),
            Err(err) => {
                tracing::warn!(element_id, class, error = ?err, "failed to toggle class");
                None
            }
        }
    }

    fn set_class(&self, element_id: &str, class: &str, present: bool) -> bool {
        let Some(element) = self.element(element_id) else {
            return false;
        };
        match element.class_list().toggle_with_force(class, present) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(element_id, class, error = ?err, "failed to set class");
                false
            }
        }
    }

    fn set_control_label(&self, element_id: &str, text: &str, title: &str) -> bool {
        let Some(element) = self.element(element_id) else {
            return false;
        };
        element.set_text_content(Some(text));
        if let Err(err) = element.set_attribute("title", title) {
            tracing::warn!(element_id, error = ?err, "failed to set control title");
        }
        true
    }
}
