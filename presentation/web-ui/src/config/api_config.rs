const DEFAULT_BASE_URL: &str = "http://localhost:3000/products";

/// Location of the remote catalog API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Collection endpoint; single products live at `{base_url}/{id}`.
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve the API location
    ///
    /// Sources, first match wins:
    /// - `<meta name="catalog-api-url">` in the host page
    /// - CATALOG_API_URL at build time
    /// - "http://localhost:3000/products"
    pub fn load(page_setting: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = page_setting("catalog-api-url")
            .or_else(|| option_env!("CATALOG_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }
}
