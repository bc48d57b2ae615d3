use serde::{Deserialize, Serialize};

/// Configuration for [`RouteTranslator`](crate::RouteTranslator) logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Log descriptor fields dropped on the way to native at `warn` level
    /// instead of `debug` (default: true)
    pub warn_on_lossy: bool,

    /// Emit a `debug` event for every conversion (default: false)
    pub log_conversions: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            warn_on_lossy: true,
            log_conversions: false,
        }
    }
}

impl TranslatorConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> TranslatorConfigBuilder {
        TranslatorConfigBuilder::default()
    }
}

/// Builder for `TranslatorConfig`
#[derive(Debug, Clone, Default)]
pub struct TranslatorConfigBuilder {
    config: TranslatorConfig,
}

impl TranslatorConfigBuilder {
    /// Log dropped fields at `warn` level
    #[must_use]
    pub fn warn_on_lossy(mut self, enable: bool) -> Self {
        self.config.warn_on_lossy = enable;
        self
    }

    /// Log every conversion
    #[must_use]
    pub fn log_conversions(mut self, enable: bool) -> Self {
        self.config.log_conversions = enable;
        self
    }

    /// Build the config
    #[must_use]
    pub fn build(self) -> TranslatorConfig {
        self.config
    }
}
