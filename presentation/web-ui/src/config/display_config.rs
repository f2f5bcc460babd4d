const DEFAULT_CURRENCY_PREFIX: &str = "R$";

/// How prices are shown in the list
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub currency_prefix: String,
}

impl DisplayConfig {
    /// Sources, first match wins:
    /// - `<meta name="catalog-currency-prefix">` in the host page
    /// - CATALOG_CURRENCY_PREFIX at build time
    /// - "R$"
    pub fn load(page_setting: impl Fn(&str) -> Option<String>) -> Self {
        let currency_prefix = page_setting("catalog-currency-prefix")
            .or_else(|| option_env!("CATALOG_CURRENCY_PREFIX").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_CURRENCY_PREFIX.to_string());

        Self { currency_prefix }
    }
}
