//! Selection state: the user's current choice for every category.
//!
//! The mapping always holds exactly one entry per registry category; an
//! empty string means "no selection". Keys are never added or removed after
//! construction, only values change.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::error::{Result, TweetsmithError};
use crate::registry::CategoryRegistry;

/// Which way to step when cycling through a category's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    registry: Arc<CategoryRegistry>,
    values: BTreeMap<String, String>,
}

impl SelectionState {
    /// Fresh state with every category unset.
    pub fn new(registry: Arc<CategoryRegistry>) -> Self {
        let values = Self::empty_values(&registry);
        Self { registry, values }
    }

    fn empty_values(registry: &CategoryRegistry) -> BTreeMap<String, String> {
        registry
            .keys()
            .map(|key| (key.to_string(), String::new()))
            .collect()
    }

    pub fn registry(&self) -> &Arc<CategoryRegistry> {
        &self.registry
    }

    /// Set the value for `key`. An empty `value` clears the selection.
    ///
    /// Unknown keys leave the mapping untouched and return
    /// [`TweetsmithError::UnknownCategory`].
    pub fn set_selection(&mut self, key: &str, value: &str) -> Result<()> {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None => {
                warn!(key, "Ignoring selection for unknown category");
                Err(TweetsmithError::UnknownCategory(key.to_string()))
            }
        }
    }

    /// Like [`set_selection`](Self::set_selection), but also requires `value`
    /// to be empty or one of the category's options.
    pub fn select(&mut self, key: &str, value: &str) -> Result<()> {
        let category = self
            .registry
            .get(key)
            .ok_or_else(|| TweetsmithError::UnknownCategory(key.to_string()))?;
        if !value.is_empty() && !category.has_option(value) {
            return Err(TweetsmithError::InvalidOption {
                category: key.to_string(),
                option: value.to_string(),
            });
        }
        self.set_selection(key, value)
    }

    /// Step to the neighbouring option. The unset value sits before the
    /// first option, so cycling wraps through "any".
    pub fn cycle(&mut self, key: &str, direction: CycleDirection) -> Result<()> {
        let category = self
            .registry
            .get(key)
            .ok_or_else(|| TweetsmithError::UnknownCategory(key.to_string()))?;

        // Position 0 is "unset", options follow at 1..=len.
        let slots = category.options.len() + 1;
        let current = self
            .get(key)
            .and_then(|v| category.options.iter().position(|o| o == v))
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = match direction {
            CycleDirection::Next => (current + 1) % slots,
            CycleDirection::Prev => (current + slots - 1) % slots,
        };
        let value = if next == 0 {
            String::new()
        } else {
            category.options[next - 1].clone()
        };
        self.set_selection(key, &value)
    }

    /// Back to all-empty, keyed by the registry.
    pub fn reset(&mut self) {
        self.values = Self::empty_values(&self.registry);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// Number of categories with a non-empty value.
    pub fn selected_count(&self) -> usize {
        self.values.values().filter(|v| !v.is_empty()).count()
    }

    /// Owned copy of the mapping, as sent in a request payload.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Category;
    use proptest::prelude::*;

    fn registry() -> Arc<CategoryRegistry> {
        Arc::new(
            CategoryRegistry::new(vec![
                Category::new("tone", "Tone", &["funny", "serious"]),
                Category::new("length", "Length", &["short", "long"]),
            ])
            .unwrap(),
        )
    }

    fn key_set(state: &SelectionState) -> Vec<String> {
        state.keys().map(str::to_string).collect()
    }

    fn registry_keys(registry: &CategoryRegistry) -> Vec<String> {
        let mut keys: Vec<String> = registry.keys().map(str::to_string).collect();
        keys.sort();
        keys
    }

    #[test]
    fn starts_with_every_key_empty() {
        let state = SelectionState::new(registry());
        assert_eq!(state.get("tone"), Some(""));
        assert_eq!(state.get("length"), Some(""));
        assert!(state.is_empty());
    }

    #[test]
    fn set_and_clear() {
        let mut state = SelectionState::new(registry());
        state.set_selection("tone", "funny").unwrap();
        assert_eq!(state.get("tone"), Some("funny"));
        assert_eq!(state.selected_count(), 1);

        state.set_selection("tone", "").unwrap();
        assert_eq!(state.get("tone"), Some(""));
    }

    #[test]
    fn unknown_key_is_rejected_without_adding_it() {
        let mut state = SelectionState::new(registry());
        let result = state.set_selection("mood", "calm");
        assert!(matches!(result, Err(TweetsmithError::UnknownCategory(_))));
        assert_eq!(state.get("mood"), None);
        assert_eq!(key_set(&state).len(), 2);
    }

    #[test]
    fn select_validates_options() {
        let mut state = SelectionState::new(registry());
        assert!(state.select("tone", "funny").is_ok());
        assert!(matches!(
            state.select("tone", "angry"),
            Err(TweetsmithError::InvalidOption { .. })
        ));
        assert_eq!(state.get("tone"), Some("funny"));
    }

    #[test]
    fn cycle_wraps_through_unset() {
        let mut state = SelectionState::new(registry());
        state.cycle("tone", CycleDirection::Next).unwrap();
        assert_eq!(state.get("tone"), Some("funny"));
        state.cycle("tone", CycleDirection::Next).unwrap();
        assert_eq!(state.get("tone"), Some("serious"));
        state.cycle("tone", CycleDirection::Next).unwrap();
        assert_eq!(state.get("tone"), Some(""));
        state.cycle("tone", CycleDirection::Prev).unwrap();
        assert_eq!(state.get("tone"), Some("serious"));
    }

    #[test]
    fn cycle_from_foreign_value_restarts() {
        let mut state = SelectionState::new(registry());
        state.set_selection("tone", "custom").unwrap();
        state.cycle("tone", CycleDirection::Next).unwrap();
        assert_eq!(state.get("tone"), Some("funny"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = SelectionState::new(registry());
        state.set_selection("tone", "funny").unwrap();
        state.set_selection("length", "long").unwrap();
        state.reset();
        assert!(state.is_empty());
        assert_eq!(key_set(&state), registry_keys(state.registry()));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Set(String, String),
        Cycle(String, bool),
        Reset,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let key = prop::sample::select(vec!["tone", "length", "mood", ""]).prop_map(String::from);
        let value = prop::sample::select(vec!["", "funny", "long", "whatever"]).prop_map(String::from);
        prop_oneof![
            (key.clone(), value).prop_map(|(k, v)| Op::Set(k, v)),
            (key, any::<bool>()).prop_map(|(k, next)| Op::Cycle(k, next)),
            Just(Op::Reset),
        ]
    }

    proptest! {
        #[test]
        fn prop_key_set_always_matches_registry(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let registry = registry();
            let expected = registry_keys(&registry);
            let mut state = SelectionState::new(registry);

            for op in ops {
                match op {
                    Op::Set(k, v) => { let _ = state.set_selection(&k, &v); }
                    Op::Cycle(k, next) => {
                        let dir = if next { CycleDirection::Next } else { CycleDirection::Prev };
                        let _ = state.cycle(&k, dir);
                    }
                    Op::Reset => state.reset(),
                }
                prop_assert_eq!(key_set(&state), expected.clone());
            }
        }

        #[test]
        fn prop_reset_is_idempotent(values in prop::collection::vec(("tone|length", "[a-z]{0,5}"), 0..10)) {
            let mut state = SelectionState::new(registry());
            for (k, v) in &values {
                state.set_selection(k, v).unwrap();
            }
            state.reset();
            let once = state.snapshot();
            state.reset();
            prop_assert_eq!(once, state.snapshot());
        }
    }
}
