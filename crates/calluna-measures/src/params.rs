//! Named-parameter sets for configuring distance measures.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// An ordered mapping from parameter name to scalar value.
///
/// This is the loosely-typed configuration boundary: callers that address
/// parameters by name (a split sampler drawing random measure
/// configurations, or a deserialized experiment description) build a
/// `ParamSet` and hand it to [`set_params`][crate::DistanceMeasure::set_params].
/// Keys are unique; unrecognized keys are carried, never rejected. Inside a
/// measure the values live in typed fields with `const` defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet(BTreeMap<String, f64>);

impl ParamSet {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_owned(), value);
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Return the value for `key`, or `default` if absent.
    ///
    /// This is the defaulting rule every measure applies during
    /// reconfiguration: a key left out of the provided set resets its
    /// parameter to the documented default rather than keeping the old value.
    #[must_use]
    pub fn value_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    /// Return true if the set contains `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Merge `base` underneath this set.
    ///
    /// Keys of `self` take precedence on collision. Used by measure variants
    /// to lay their own parameters over the ones contributed by their base
    /// parameter block.
    #[must_use]
    pub fn merge(self, base: ParamSet) -> ParamSet {
        let mut merged = base.0;
        merged.extend(self.0);
        ParamSet(merged)
    }

    /// Return the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the set holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<'a> IntoIterator for &'a ParamSet {
    type Item = (&'a String, &'a f64);
    type IntoIter = btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, f64)> for ParamSet {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_or_returns_stored() {
        let p = ParamSet::new().with("cost", 3.0);
        assert_eq!(p.value_or("cost", 1.0), 3.0);
    }

    #[test]
    fn value_or_falls_back() {
        let p = ParamSet::new();
        assert_eq!(p.value_or("cost", 1.0), 1.0);
    }

    #[test]
    fn insert_overwrites() {
        let mut p = ParamSet::new().with("w", 0.5);
        p.insert("w", 0.25);
        assert_eq!(p.get("w"), Some(0.25));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn merge_own_keys_win() {
        let own = ParamSet::new().with("cost", 5.0);
        let base = ParamSet::new().with("cost", 1.0).with("w", 0.5);
        let merged = own.merge(base);
        assert_eq!(merged.get("cost"), Some(5.0));
        assert_eq!(merged.get("w"), Some(0.5));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_keeps_disjoint_keys() {
        let own = ParamSet::new().with("cost", 2.0);
        let base = ParamSet::new().with("w", 1.0);
        let merged = own.merge(base);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains("cost"));
        assert!(merged.contains("w"));
    }

    #[test]
    fn iter_in_key_order() {
        let p = ParamSet::new().with("w", 1.0).with("cost", 2.0);
        let keys: Vec<&str> = p.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["cost", "w"]);
    }

    #[test]
    fn serde_round_trip() {
        let p = ParamSet::new().with("cost", 3.5).with("w", 0.1);
        let json = serde_json::to_string(&p).unwrap();
        let back: ParamSet = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn deserializes_plain_object() {
        let p: ParamSet = serde_json::from_str(r#"{"cost": 2.0}"#).unwrap();
        assert_eq!(p.get("cost"), Some(2.0));
    }
}
