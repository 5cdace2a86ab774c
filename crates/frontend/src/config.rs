use crate::domain::a001_order::view_state::ViewMode;
use contracts::shared::order_query::{OrderQuery, SortDirection, SortField, SortSpec, DEFAULT_PAGE_SIZE};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse explorer config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid explorer config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub list: ListConfig,
    pub view: ViewConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: usize,
    /// Сколько номеров страниц показывать в полосе пагинации
    pub max_page_buttons: usize,
    pub search_debounce_ms: u32,
    pub default_sort: SortSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub mode: ViewMode,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            list: ListConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_buttons: 5,
            search_debounce_ms: 300,
            default_sort: SortSpec::new(SortField::OrderDate, SortDirection::Desc),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mode: ViewMode::List,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[list]
page_size = 10
max_page_buttons = 5
search_debounce_ms = 300

[list.default_sort]
field = "order_date"
direction = "desc"

[view]
mode = "list"
"#;

static DEFAULT: Lazy<ExplorerConfig> = Lazy::new(|| match ExplorerConfig::from_toml_str(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("Embedded explorer config is broken, using built-in defaults: {}", e);
        ExplorerConfig::default()
    }
});

/// Конфигурация по умолчанию (разбирается один раз)
pub fn default_config() -> &'static ExplorerConfig {
    &DEFAULT
}

impl ExplorerConfig {
    /// Parse a TOML override; missing keys fall back to defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ExplorerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.list.page_size == 0 {
            return Err(ConfigError::Invalid("list.page_size must be positive".to_string()));
        }
        if self.list.max_page_buttons == 0 {
            return Err(ConfigError::Invalid(
                "list.max_page_buttons must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Запрос, с которого начинается сессия обозревателя
    pub fn initial_query(&self) -> OrderQuery {
        OrderQuery::new(self.list.page_size).with_sort(self.list.default_sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ExplorerConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(default_config().list.page_size, 10);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ExplorerConfig::from_toml_str(
            r#"
            [list]
            page_size = 25

            [view]
            mode = "grid"
            "#,
        )
        .unwrap();
        assert_eq!(config.list.page_size, 25);
        assert_eq!(config.list.max_page_buttons, 5);
        assert_eq!(config.view.mode, ViewMode::Grid);
        assert_eq!(config.initial_query().page_size, 25);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = ExplorerConfig::from_toml_str("[list]\npage_size = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_max_page_buttons_rejected() {
        let result = ExplorerConfig::from_toml_str("[list]\nmax_page_buttons = 0\n");
        match result {
            Err(ConfigError::Invalid(message)) => assert!(message.contains("max_page_buttons")),
            other => panic!("expected ConfigError::Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = ExplorerConfig::from_toml_str("[list\npage_size = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
