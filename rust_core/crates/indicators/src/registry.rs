//! Indicator registry for dynamic indicator creation.

use crate::error::IndicatorError;
use crate::impl_::{adx::ADX, rsi::RSI, sma::SMA};
use crate::traits::{Indicator, IndicatorKey, IndicatorParams};
use std::collections::HashMap;
use std::sync::Arc;

/// Factory function type for creating indicators from parameters.
pub type IndicatorFactory =
    Box<dyn Fn(&IndicatorParams) -> Result<Arc<dyn Indicator>, IndicatorError> + Send + Sync>;

/// Registry for single-output indicator factories.
///
/// Allows dynamic creation of indicators by name and parameters.
/// Pre-populated with SMA, RSI and ADX.
pub struct IndicatorRegistry {
    /// Indicator factories by name.
    factories: HashMap<String, IndicatorFactory>,
}

impl IndicatorRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers an indicator factory.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&IndicatorParams) -> Result<Arc<dyn Indicator>, IndicatorError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Creates an indicator from a key.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::UnknownIndicator`] if the name is not registered
    /// and [`IndicatorError::InvalidParams`] when parameters do not match.
    pub fn create(&self, key: &IndicatorKey) -> Result<Arc<dyn Indicator>, IndicatorError> {
        let factory = self
            .factories
            .get(&key.name)
            .ok_or_else(|| IndicatorError::UnknownIndicator(key.name.clone()))?;
        factory(&key.params)
    }

    /// Checks if an indicator is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns list of registered indicator names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Creates a registry with the default indicators pre-registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("SMA", |params| match params {
            IndicatorParams::Period { period, source } => {
                Ok(Arc::new(SMA::new(*period).with_source(*source)))
            }
            _ => Err(IndicatorError::invalid_params("SMA requires Period params")),
        });

        registry.register("RSI", |params| match params {
            IndicatorParams::Period { period, source } => {
                Ok(Arc::new(RSI::new(*period).with_source(*source)))
            }
            _ => Err(IndicatorError::invalid_params("RSI requires Period params")),
        });

        registry.register("ADX", |params| match params {
            IndicatorParams::Ohlc { period } => Ok(Arc::new(ADX::new(*period))),
            _ => Err(IndicatorError::invalid_params("ADX requires Ohlc params")),
        });

        registry
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// BollingerBands is a MultiOutputIndicator and doesn't implement Indicator,
// so it goes through the cache's get_or_compute_multi method instead.
