use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use web_sys::Document;

use http_api::client::ApiClient;
use http_api::product_repository::ProductRepositoryHttp;
use logger::TracingLogger;

use business::application::catalog::controller::{
    CatalogController, CatalogPorts, CatalogUseCases,
};
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::app_config::AppConfig;
use crate::dom::browser;
use crate::dom::elements::CatalogElements;
use crate::dom::list_view::DomListView;
use crate::dom::panels::DomFormPanels;
use crate::dom::prompt::WindowPrompt;

/// Application context: built once at startup and handed to the event wiring.
pub struct DependencyContainer {
    pub controller: Rc<CatalogController>,
    pub elements: Rc<CatalogElements>,
    pub list_view: Rc<DomListView>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig, document: &Document) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let api_client = ApiClient::new(&config.api.base_url)
            .with_context(|| format!("invalid catalog API URL: {}", config.api.base_url))?;
        let product_repository = Rc::new(ProductRepositoryHttp::new(api_client));

        // Product use cases
        let use_cases = CatalogUseCases {
            get_all: Rc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            create: Rc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            update: Rc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            delete: Rc::new(DeleteProductUseCaseImpl {
                repository: product_repository,
                logger: logger.clone(),
            }),
        };

        // Browser adapters
        let elements = Rc::new(CatalogElements::locate(document)?);
        let list_view = Rc::new(DomListView::new(
            document.clone(),
            elements.list.clone(),
        ));
        let ports = CatalogPorts {
            list_view: list_view.clone(),
            panels: Rc::new(DomFormPanels::new(elements.clone())),
            prompt: Rc::new(WindowPrompt::new(browser::window()?)),
        };

        let controller = Rc::new(CatalogController::new(
            use_cases,
            ports,
            config.display_options(),
            logger,
        ));

        Ok(Self {
            controller,
            elements,
            list_view,
        })
    }
}
