use anyhow::{Context, anyhow};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use business::domain::product::draft::{EditDraft, ProductDraft};

use super::browser::js_error;

/// Element handles of the catalog screen, looked up once at startup.
pub struct CatalogElements {
    pub list: Element,
    pub add_panel: HtmlElement,
    pub update_panel: HtmlElement,
    pub add_form: HtmlFormElement,
    pub add_name: HtmlInputElement,
    pub add_price: HtmlInputElement,
    pub update_form: HtmlFormElement,
    pub update_id: HtmlInputElement,
    pub update_name: HtmlInputElement,
    pub update_price: HtmlInputElement,
    pub cancel_update: Element,
}

impl CatalogElements {
    pub fn locate(document: &Document) -> anyhow::Result<Self> {
        Ok(Self {
            list: find(document, "#products")?,
            add_panel: find(document, ".add-mode")?,
            update_panel: find(document, ".update-mode")?,
            add_form: find(document, "#add-product-form")?,
            add_name: find(document, "#add-product-form [name=\"name\"]")?,
            add_price: find(document, "#add-product-form [name=\"price\"]")?,
            update_form: find(document, "#update-product-form")?,
            update_id: find(document, "#update-id")?,
            update_name: find(document, "#update-name")?,
            update_price: find(document, "#update-price")?,
            cancel_update: find(document, "#cancel-update")?,
        })
    }

    pub fn add_draft(&self) -> ProductDraft {
        ProductDraft::new(self.add_name.value(), self.add_price.value())
    }

    pub fn update_draft(&self) -> EditDraft {
        EditDraft::new(
            self.update_id.value(),
            self.update_name.value(),
            self.update_price.value(),
        )
    }
}

fn find<T: JsCast>(document: &Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .with_context(|| format!("missing element {}", selector))?
        .dyn_into::<T>()
        .map_err(|_| anyhow!("element {} has an unexpected type", selector))
}
