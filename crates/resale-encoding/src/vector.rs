//! Encoded feature vectors.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Feature values aligned with the schema they were encoded against.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Arc<[String]>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Pair names with values.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn new(names: Arc<[String]>, values: Vec<f64>) -> Self {
        assert_eq!(
            names.len(),
            values.len(),
            "feature vector needs one value per name"
        );
        Self { names, values }
    }

    /// Feature names, in schema order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Feature values, in schema order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the vector, keeping only the values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Value of a feature by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no features.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Copy into a map keyed by feature name.
    ///
    /// The map is ordered by name; use [`FeatureVector::iter`] for schema order.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    /// Whether the vector's names equal `names`, in the same order.
    pub fn matches_names(&self, names: &[String]) -> bool {
        std::ptr::eq(self.names.as_ref(), names) || self.names.as_ref() == names
    }
}

/// Serializes as a JSON object whose keys keep schema order.
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
