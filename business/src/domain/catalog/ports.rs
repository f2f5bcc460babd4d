//! Outbound ports of the catalog screen. The browser adapters implement them;
//! tests substitute mocks.

use crate::domain::product::draft::EditDraft;

use super::list_view_model::ProductListViewModel;

pub trait ProductListView {
    /// Replaces the whole list area with `model`.
    fn render(&self, model: &ProductListViewModel);
}

pub trait FormPanels {
    fn show_add_panel(&self);
    /// Fills the update form with `draft` and makes it the visible panel.
    fn show_update_panel(&self, draft: &EditDraft);
    fn clear_add_form(&self);
    fn clear_update_form(&self);
}

pub trait UserPrompt {
    /// Blocking yes/no question. `false` means the user declined.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}
