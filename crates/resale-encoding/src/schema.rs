//! Feature schema: the ordered column names the model was trained on.

use crate::attributes::{Category, FlatModel, FlatType, Town};
use crate::error::SchemaError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Floor area column.
pub const FLOOR_AREA_SQM: &str = "floor_area_sqm";

/// Flat age column.
pub const FLAT_AGE: &str = "flat_age";

/// Storey median column.
pub const STOREY_MEDIAN: &str = "storey_median";

/// Ordered, duplicate-free list of feature names.
///
/// Cloning is cheap: the names are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Arc<[String]>,
}

impl FeatureSchema {
    /// Create a schema from feature names.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Empty`] for an empty list and
    /// [`SchemaError::Duplicate`] if a name appears twice.
    pub fn new(names: Vec<String>) -> Result<Self, SchemaError> {
        Self::from_shared(names.into())
    }

    /// Create a schema over already shared names, keeping the same allocation.
    ///
    /// # Errors
    ///
    /// As for [`FeatureSchema::new`].
    pub fn from_shared(names: Arc<[String]>) -> Result<Self, SchemaError> {
        if names.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in names.iter() {
            if !seen.insert(name.as_str()) {
                return Err(SchemaError::Duplicate(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Parse a schema from a JSON array of strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the names are invalid.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let names: Vec<String> = serde_json::from_str(json)?;
        Self::new(names)
    }

    /// Load a schema artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Read`] if the file cannot be read, or a parse
    /// error as for [`FeatureSchema::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let schema = Self::from_json(&json)?;
        log::info!(
            "Loaded feature schema with {} columns from {}",
            schema.len(),
            path.display()
        );
        Ok(schema)
    }

    /// Schema with the three numeric columns followed by a complete one-hot
    /// group for every town, flat type and flat model.
    pub fn full() -> Self {
        let names: Vec<String> = [FLOOR_AREA_SQM, FLAT_AGE, STOREY_MEDIAN]
            .into_iter()
            .map(String::from)
            .chain(Town::ALL.iter().map(Category::column_name))
            .chain(FlatType::ALL.iter().map(Category::column_name))
            .chain(FlatModel::ALL.iter().map(Category::column_name))
            .collect();
        Self {
            names: names.into(),
        }
    }

    /// Feature names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Shared handle to the feature names.
    pub fn shared_names(&self) -> Arc<[String]> {
        Arc::clone(&self.names)
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: empty schemas are rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a feature.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Whether the schema lists a feature.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate feature names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_full_schema() {
        let schema = FeatureSchema::full();
        assert_eq!(schema.len(), 3 + 26 + 7 + 10);
        assert_eq!(schema.position(FLOOR_AREA_SQM), Some(0));
        assert!(schema.contains("town_BEDOK"));
        assert!(schema.contains("flat_type_4 ROOM"));
        assert!(schema.contains("flat_model_MODEL A"));
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let err = FeatureSchema::new(vec!["flat_age".into(), "flat_age".into()]).unwrap_err();
        assert!(matches!(err, SchemaError::Duplicate(name) if name == "flat_age"));
        assert!(matches!(FeatureSchema::new(vec![]), Err(SchemaError::Empty)));
    }

    #[test]
    fn test_from_shared_keeps_allocation() {
        let names: Arc<[String]> = vec!["flat_age".to_string(), "town_BEDOK".to_string()].into();
        let schema = FeatureSchema::from_shared(Arc::clone(&names)).unwrap();
        assert!(Arc::ptr_eq(&schema.shared_names(), &names));
    }

    #[test]
    fn test_from_json() {
        let schema = FeatureSchema::from_json(r#"["floor_area_sqm", "town_BEDOK"]"#).unwrap();
        assert_eq!(schema.names(), ["floor_area_sqm", "town_BEDOK"]);
        assert!(matches!(
            FeatureSchema::from_json(r#"{"columns": []}"#),
            Err(SchemaError::Format(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["flat_age", "storey_median"]"#).unwrap();
        let schema = FeatureSchema::load(file.path()).unwrap();
        assert_eq!(schema.len(), 2);

        let missing = FeatureSchema::load("/nonexistent/model_features.json").unwrap_err();
        assert!(matches!(missing, SchemaError::Read { .. }));
    }
}
