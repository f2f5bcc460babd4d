use business::domain::catalog::list_view_model::DisplayOptions;
use tracing::Level;
use web_sys::Document;

use super::{api_config::ApiConfig, display_config::DisplayConfig};

pub struct AppConfig {
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub log_level: Level,
}

impl AppConfig {
    /// Reads `<meta name="catalog-*">` settings from the host page.
    pub fn from_page(document: &Document) -> Self {
        Self::load(|name| meta_content(document, name))
    }

    pub fn load(page_setting: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = page_setting("catalog-log-level")
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        Self {
            api: ApiConfig::load(&page_setting),
            display: DisplayConfig::load(&page_setting),
            log_level,
        }
    }

    /// Settings the list renderer needs.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            currency_prefix: self.display.currency_prefix.clone(),
            api_location: self.api.base_url.clone(),
        }
    }
}

fn meta_content(document: &Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn page(settings: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let settings: HashMap<String, String> = settings
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| settings.get(name).cloned()
    }

    #[test]
    fn should_build_display_options_from_api_and_display_settings() {
        let config = AppConfig::load(page(&[
            ("catalog-api-url", "http://18.217.155.122:3000/products"),
            ("catalog-currency-prefix", "$"),
        ]));

        let options = config.display_options();

        assert_eq!(options.currency_prefix, "$");
        assert_eq!(options.api_location, "http://18.217.155.122:3000/products");
    }

    #[test]
    fn should_parse_log_level_and_default_to_info() {
        let verbose = AppConfig::load(page(&[("catalog-log-level", "debug")]));
        let unknown = AppConfig::load(page(&[("catalog-log-level", "chatty")]));

        assert_eq!(verbose.log_level, Level::DEBUG);
        assert_eq!(unknown.log_level, Level::INFO);
    }
}
