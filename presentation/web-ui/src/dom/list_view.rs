use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use business::domain::catalog::list_view_model::{ProductListItem, ProductListViewModel};
use business::domain::catalog::ports::ProductListView;

pub const ACTION_EDIT: &str = "edit";
pub const ACTION_DELETE: &str = "delete";

/// Draws the product list into `#products`.
///
/// Entry buttons carry `data-action` and `data-index`; a single delegated
/// click listener resolves them against the items of the last render.
pub struct DomListView {
    document: Document,
    list: Element,
    items: RefCell<Vec<ProductListItem>>,
}

impl DomListView {
    pub fn new(document: Document, list: Element) -> Self {
        Self {
            document,
            list,
            items: RefCell::new(Vec::new()),
        }
    }

    pub fn list_element(&self) -> &Element {
        &self.list
    }

    pub fn item_at(&self, index: usize) -> Option<ProductListItem> {
        self.items.borrow().get(index).cloned()
    }

    fn draw(&self, model: &ProductListViewModel) -> Result<(), JsValue> {
        match model {
            ProductListViewModel::Products(items) => {
                for (index, item) in items.iter().enumerate() {
                    let entry = self.entry(index, item)?;
                    self.list.append_child(&entry)?;
                }
            }
            ProductListViewModel::Error { message } => {
                let entry = self.document.create_element("li")?;
                entry.set_attribute("style", "color: red;")?;
                entry.set_text_content(Some(&format!("❌ {}", message)));
                self.list.append_child(&entry)?;
            }
        }
        Ok(())
    }

    fn entry(&self, index: usize, item: &ProductListItem) -> Result<Element, JsValue> {
        let entry = self.document.create_element("li")?;
        entry.set_class_name("product-item");

        let info = self.document.create_element("span")?;
        info.set_text_content(Some(&item.label));
        entry.append_child(&info)?;

        let delete = self.button(index, ACTION_DELETE, "🗑️ Delete", "btn btn-danger btn-small")?;
        entry.append_child(&delete)?;

        let edit = self.button(index, ACTION_EDIT, "✏️ Edit", "btn btn-primary btn-small")?;
        entry.append_child(&edit)?;

        Ok(entry)
    }

    fn button(
        &self,
        index: usize,
        action: &str,
        text: &str,
        class: &str,
    ) -> Result<Element, JsValue> {
        let button = self.document.create_element("button")?;
        button.set_attribute("type", "button")?;
        button.set_attribute("data-action", action)?;
        button.set_attribute("data-index", &index.to_string())?;
        button.set_class_name(class);
        button.set_text_content(Some(text));
        Ok(button)
    }
}

impl ProductListView for DomListView {
    fn render(&self, model: &ProductListViewModel) {
        self.list.set_inner_html("");
        *self.items.borrow_mut() = model.items().to_vec();

        if let Err(e) = self.draw(model) {
            tracing::error!(error = ?e, "failed to draw product list");
        }
    }
}
