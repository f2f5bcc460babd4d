use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::domain::catalog::list_view_model::{DisplayOptions, build_list_view};
use crate::domain::catalog::ports::{FormPanels, ProductListView, UserPrompt};
use crate::domain::catalog::refresh_sequencer::RefreshSequencer;
use crate::domain::catalog::view_state::{ViewEvent, ViewState};
use crate::domain::logger::Logger;
use crate::domain::product::draft::{EditDraft, ProductDraft};
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::create::CreateProductUseCase;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::use_cases::update::UpdateProductUseCase;
use crate::domain::product::value_objects::ProductId;

pub struct CatalogUseCases {
    pub get_all: Rc<dyn GetAllProductsUseCase>,
    pub create: Rc<dyn CreateProductUseCase>,
    pub update: Rc<dyn UpdateProductUseCase>,
    pub delete: Rc<dyn DeleteProductUseCase>,
}

pub struct CatalogPorts {
    pub list_view: Rc<dyn ProductListView>,
    pub panels: Rc<dyn FormPanels>,
    pub prompt: Rc<dyn UserPrompt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Rendered { entries: usize },
    /// The fetch failed and the error entry was rendered.
    Failed,
    /// A newer refresh started while this one was in flight; nothing rendered.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Applied,
    /// A local precondition failed; no request was sent.
    Rejected(ProductError),
    /// The user declined the confirmation; no request was sent.
    Declined,
    Failed(ProductError),
}

/// Drives the catalog screen: the list renderer, the three mutations and the
/// add/update panel switch.
///
/// Mutations are not serialized against each other. Overlapping refreshes are
/// resolved by [`RefreshSequencer`]: only the most recently started fetch renders.
pub struct CatalogController {
    use_cases: CatalogUseCases,
    ports: CatalogPorts,
    display: DisplayOptions,
    logger: Arc<dyn Logger>,
    state: RefCell<ViewState>,
    sequencer: RefreshSequencer,
}

impl CatalogController {
    pub fn new(
        use_cases: CatalogUseCases,
        ports: CatalogPorts,
        display: DisplayOptions,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            use_cases,
            ports,
            display,
            logger,
            state: RefCell::new(ViewState::default()),
            sequencer: RefreshSequencer::new(),
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Shows the add panel and loads the list for the first time.
    pub async fn start(&self) -> RefreshOutcome {
        self.apply_view(&ViewState::Adding);
        self.refresh().await
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let ticket = self.sequencer.begin();
        let snapshot = self.use_cases.get_all.execute().await;

        if !self.sequencer.is_current(ticket) {
            self.logger
                .debug("Discarding product list from a superseded fetch");
            return RefreshOutcome::Superseded;
        }

        let model = build_list_view(&snapshot, &self.display);
        self.ports.list_view.render(&model);

        match snapshot {
            Ok(products) => RefreshOutcome::Rendered {
                entries: products.len(),
            },
            Err(_) => RefreshOutcome::Failed,
        }
    }

    pub async fn submit_add(&self, draft: ProductDraft) -> MutationOutcome {
        let params = match draft.to_create_params() {
            Ok(params) => params,
            Err(e) => return self.reject("add", e),
        };

        match self.use_cases.create.execute(params).await {
            Ok(_) => {
                self.ports.panels.clear_add_form();
                self.refresh().await;
                MutationOutcome::Applied
            }
            Err(e) => self.fail("adding", e),
        }
    }

    pub fn select_edit(&self, draft: EditDraft) {
        self.logger
            .debug(&format!("Editing product: {}", draft.id));
        self.transition(ViewEvent::EditSelected(draft));
    }

    pub fn cancel_edit(&self) {
        self.transition(ViewEvent::Cancelled);
        self.ports.panels.clear_add_form();
    }

    pub async fn submit_update(&self, draft: EditDraft) -> MutationOutcome {
        let params = match draft.to_update_params() {
            Ok(params) => params,
            Err(e) => return self.reject("update", e),
        };

        match self.use_cases.update.execute(params).await {
            Ok(_) => {
                self.transition(ViewEvent::UpdateSucceeded);
                self.refresh().await;
                MutationOutcome::Applied
            }
            Err(e) => self.fail("updating", e),
        }
    }

    pub async fn delete(&self, id: ProductId) -> MutationOutcome {
        let question = format!("Are you sure you want to delete product ID {}?", id);
        if !self.ports.prompt.confirm(&question) {
            self.logger
                .debug(&format!("Deletion of product {} declined", id));
            return MutationOutcome::Declined;
        }

        match self
            .use_cases
            .delete
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => {
                self.refresh().await;
                MutationOutcome::Applied
            }
            Err(e) => self.fail("deleting", e),
        }
    }

    fn transition(&self, event: ViewEvent) {
        let next = self.state.borrow().clone().transition(event);
        self.apply_view(&next);
        *self.state.borrow_mut() = next;
    }

    fn apply_view(&self, state: &ViewState) {
        match state {
            ViewState::Adding => {
                self.ports.panels.clear_update_form();
                self.ports.panels.show_add_panel();
            }
            ViewState::Editing(draft) => self.ports.panels.show_update_panel(draft),
        }
    }

    fn reject(&self, form: &str, error: ProductError) -> MutationOutcome {
        self.logger
            .warn(&format!("Ignoring {} submit: {}", form, error));
        MutationOutcome::Rejected(error)
    }

    fn fail(&self, action: &str, error: ProductError) -> MutationOutcome {
        // The use case may still refuse locally; only request failures are shown.
        if error.is_precondition() {
            return self.reject(action, error);
        }
        self.logger
            .error(&format!("Error {} product: {}", action, error));
        self.ports
            .prompt
            .alert(&format!("Error {} product. See the console.", action));
        MutationOutcome::Failed(error)
    }
}
