//! Signal rule registry for dynamic rule creation
//!
//! Allows rules to be registered and created by name at runtime.

use crate::error::StrategyError;
use crate::traits::SignalRule;
use std::collections::HashMap;
use std::sync::Arc;

/// Factory function type for creating rules from JSON params.
pub type RuleFactory =
    Box<dyn Fn(&serde_json::Value) -> Result<Box<dyn SignalRule>, StrategyError> + Send + Sync>;

/// Registry for signal rule factories.
///
/// # Example
/// ```ignore
/// let registry = StrategyRegistry::with_defaults();
/// let rule = registry.create("trend_adx_hedge", &json!({"fast_ma": 20}))?;
/// ```
pub struct StrategyRegistry {
    factories: HashMap<String, Arc<RuleFactory>>,
}

impl StrategyRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry with default rules pre-registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Registers a rule factory.
    ///
    /// # Arguments
    /// * `name` - Rule name (case-insensitive)
    /// * `factory` - Factory function that creates the rule
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&serde_json::Value) -> Result<Box<dyn SignalRule>, StrategyError>
            + Send
            + Sync
            + 'static,
    {
        self.factories
            .insert(name.into().to_lowercase(), Arc::new(Box::new(factory)));
    }

    /// Creates a rule by name.
    ///
    /// # Errors
    /// Returns `StrategyError::UnknownStrategy` if the name is not registered,
    /// or the factory's error for invalid parameters.
    pub fn create(
        &self,
        name: &str,
        params: &serde_json::Value,
    ) -> Result<Box<dyn SignalRule>, StrategyError> {
        let factory = self
            .factories
            .get(&name.to_lowercase())
            .ok_or_else(|| StrategyError::UnknownStrategy(name.to_string()))?;

        factory(params)
    }

    /// Checks if a rule is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// Returns all registered rule names.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.factories.keys()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Checks if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn register_defaults(&mut self) {
        use crate::impl_::trend_adx::TrendAdxHedge;

        self.register("trend_adx_hedge", |params| {
            let rule = TrendAdxHedge::from_params(params)?;
            Ok(Box::new(rule))
        });
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedge_indicators::IndicatorTable;
    use hedge_types::{HedgeSignal, IndicatorSpec, SignalSnapshot};

    /// Rule that never hedges
    struct NeverHedge {
        name: String,
    }

    impl SignalRule for NeverHedge {
        fn name(&self) -> &str {
            &self.name
        }

        fn required_indicators(&self) -> Vec<IndicatorSpec> {
            Vec::new()
        }

        fn generate(&self, table: &IndicatorTable) -> Result<Vec<HedgeSignal>, StrategyError> {
            Ok(vec![HedgeSignal::None; table.len()])
        }

        fn snapshot_at(
            &self,
            _table: &IndicatorTable,
            _idx: usize,
        ) -> Result<SignalSnapshot, StrategyError> {
            Err(StrategyError::InvalidParams("no snapshot".to_string()))
        }
    }

    #[test]
    fn test_registry_new() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_defaults() {
        let registry = StrategyRegistry::with_defaults();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("TREND_ADX_HEDGE"));

        let rule = registry
            .create("trend_adx_hedge", &serde_json::json!({"slow_ma": 50}))
            .unwrap();
        assert_eq!(rule.name(), "trend_adx_hedge");
        assert_eq!(rule.required_columns(), vec!["sma_20", "sma_50", "adx_14"]);
    }

    #[test]
    fn test_registry_register_and_create() {
        let mut registry = StrategyRegistry::new();

        registry.register("never", |params| {
            let name = params
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or("never")
                .to_string();
            Ok(Box::new(NeverHedge { name }))
        });

        assert!(registry.contains("NEVER"));
        let rule = registry
            .create("never", &serde_json::json!({"name": "custom"}))
            .unwrap();
        assert_eq!(rule.name(), "custom");
        assert!(rule.required_columns().is_empty());
    }

    #[test]
    fn test_registry_unknown_strategy() {
        let registry = StrategyRegistry::with_defaults();
        let result = registry.create("nonexistent", &serde_json::json!({}));
        assert!(matches!(result, Err(StrategyError::UnknownStrategy(_))));
    }

    #[test]
    fn test_registry_propagates_invalid_params() {
        let registry = StrategyRegistry::with_defaults();
        let result = registry.create("trend_adx_hedge", &serde_json::json!({"adx_period": 0}));
        assert!(matches!(result, Err(StrategyError::InvalidParams(_))));
    }
}
