use std::rc::Rc;

use web_sys::HtmlElement;

use business::domain::catalog::ports::FormPanels;
use business::domain::product::draft::EditDraft;

use super::elements::CatalogElements;

pub struct DomFormPanels {
    elements: Rc<CatalogElements>,
}

impl DomFormPanels {
    pub fn new(elements: Rc<CatalogElements>) -> Self {
        Self { elements }
    }
}

impl FormPanels for DomFormPanels {
    fn show_add_panel(&self) {
        set_display(&self.elements.update_panel, "none");
        set_display(&self.elements.add_panel, "block");
    }

    fn show_update_panel(&self, draft: &EditDraft) {
        self.elements.update_id.set_value(&draft.id);
        self.elements.update_name.set_value(&draft.name);
        self.elements.update_price.set_value(&draft.price);
        set_display(&self.elements.add_panel, "none");
        set_display(&self.elements.update_panel, "block");
    }

    fn clear_add_form(&self) {
        self.elements.add_form.reset();
    }

    fn clear_update_form(&self) {
        self.elements.update_form.reset();
        // reset() restores hidden inputs to their value attribute, not to empty
        self.elements.update_id.set_value("");
    }
}

fn set_display(element: &HtmlElement, value: &str) {
    if let Err(e) = element.style().set_property("display", value) {
        tracing::warn!(error = ?e, "could not toggle panel");
    }
}
