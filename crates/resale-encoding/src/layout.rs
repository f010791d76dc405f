//! Schema resolution.
//!
//! A [`FeatureSchema`] is resolved once into a [`FeatureLayout`]: every column
//! gets a tagged [`FeatureSlot`] and each category gets a direct index into
//! the output vector, so encoding never compares column names.

use crate::attributes::{Category, FlatModel, FlatType, Town};
use crate::schema::{FLAT_AGE, FLOOR_AREA_SQM, FeatureSchema, STOREY_MEDIAN};
use std::fmt;
use std::sync::Arc;

/// What a schema column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSlot {
    /// `floor_area_sqm`
    FloorArea,
    /// `flat_age`
    FlatAge,
    /// `storey_median`
    StoreyMedian,
    /// `town_<name>`
    Town(Town),
    /// `flat_type_<name>`
    FlatType(FlatType),
    /// `flat_model_<name>`
    FlatModel(FlatModel),
    /// Any other column; always encoded as 0.
    Unused,
}

fn group_member<C: Category>(name: &str) -> Option<Option<C>> {
    name.strip_prefix(C::PREFIX).map(C::from_name)
}

impl FeatureSlot {
    /// Classify a column name.
    ///
    /// Group columns whose suffix names no known category are [`Unused`].
    ///
    /// [`Unused`]: FeatureSlot::Unused
    pub fn classify(name: &str) -> Self {
        match name {
            FLOOR_AREA_SQM => return Self::FloorArea,
            FLAT_AGE => return Self::FlatAge,
            STOREY_MEDIAN => return Self::StoreyMedian,
            _ => {}
        }

        if let Some(town) = group_member::<Town>(name) {
            town.map_or(Self::Unused, Self::Town)
        } else if let Some(flat_type) = group_member::<FlatType>(name) {
            flat_type.map_or(Self::Unused, Self::FlatType)
        } else if let Some(flat_model) = group_member::<FlatModel>(name) {
            flat_model.map_or(Self::Unused, Self::FlatModel)
        } else {
            Self::Unused
        }
    }
}

/// Categories and numeric features without a column in a layout.
///
/// Values listed here encode as an all-zero group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Numeric features missing from the schema
    pub missing_numeric: Vec<&'static str>,
    /// Towns without a `town_*` column
    pub missing_towns: Vec<Town>,
    /// Flat types without a `flat_type_*` column
    pub missing_flat_types: Vec<FlatType>,
    /// Flat models without a `flat_model_*` column
    pub missing_flat_models: Vec<FlatModel>,
    /// Columns the encoder always fills with 0
    pub unused_columns: Vec<String>,
}

impl Coverage {
    /// Whether every attribute value has a column and no column is unused.
    pub fn is_complete(&self) -> bool {
        self.missing_numeric.is_empty()
            && self.missing_towns.is_empty()
            && self.missing_flat_types.is_empty()
            && self.missing_flat_models.is_empty()
            && self.unused_columns.is_empty()
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            return writeln!(f, "Coverage: complete");
        }
        writeln!(f, "Coverage gaps:")?;
        if !self.missing_numeric.is_empty() {
            writeln!(f, "  numeric features: {}", join(&self.missing_numeric))?;
        }
        if !self.missing_towns.is_empty() {
            writeln!(f, "  towns: {}", join(&self.missing_towns))?;
        }
        if !self.missing_flat_types.is_empty() {
            writeln!(f, "  flat types: {}", join(&self.missing_flat_types))?;
        }
        if !self.missing_flat_models.is_empty() {
            writeln!(f, "  flat models: {}", join(&self.missing_flat_models))?;
        }
        if !self.unused_columns.is_empty() {
            writeln!(f, "  unused columns: {}", join(&self.unused_columns))?;
        }
        Ok(())
    }
}

/// A feature schema resolved into slots and per-category vector offsets.
#[derive(Debug, Clone)]
pub struct FeatureLayout {
    names: Arc<[String]>,
    slots: Vec<FeatureSlot>,
    floor_area: Option<usize>,
    flat_age: Option<usize>,
    storey_median: Option<usize>,
    towns: [Option<usize>; Town::COUNT],
    flat_types: [Option<usize>; FlatType::COUNT],
    flat_models: [Option<usize>; FlatModel::COUNT],
}

impl FeatureLayout {
    /// Resolve a schema.
    ///
    /// Logs a warning for every category or numeric feature the schema has
    /// no column for.
    pub fn resolve(schema: &FeatureSchema) -> Self {
        let mut layout = Self {
            names: schema.shared_names(),
            slots: Vec::with_capacity(schema.len()),
            floor_area: None,
            flat_age: None,
            storey_median: None,
            towns: [None; Town::COUNT],
            flat_types: [None; FlatType::COUNT],
            flat_models: [None; FlatModel::COUNT],
        };

        for (index, name) in schema.iter().enumerate() {
            let slot = FeatureSlot::classify(name);
            match slot {
                FeatureSlot::FloorArea => layout.floor_area = Some(index),
                FeatureSlot::FlatAge => layout.flat_age = Some(index),
                FeatureSlot::StoreyMedian => layout.storey_median = Some(index),
                FeatureSlot::Town(t) => layout.towns[t.index()] = Some(index),
                FeatureSlot::FlatType(t) => layout.flat_types[t.index()] = Some(index),
                FeatureSlot::FlatModel(m) => layout.flat_models[m.index()] = Some(index),
                FeatureSlot::Unused => {}
            }
            layout.slots.push(slot);
        }

        let coverage = layout.coverage();
        if !coverage.is_complete() {
            log::warn!(
                "Feature schema does not cover every attribute value; affected values encode as all-zero groups\n{coverage}"
            );
        }

        layout
    }

    /// Feature names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Shared handle to the feature names.
    pub fn shared_names(&self) -> Arc<[String]> {
        Arc::clone(&self.names)
    }

    /// Slot per column, in order.
    pub fn slots(&self) -> &[FeatureSlot] {
        &self.slots
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the layout has no columns.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Column index of `floor_area_sqm`.
    pub const fn floor_area_index(&self) -> Option<usize> {
        self.floor_area
    }

    /// Column index of `flat_age`.
    pub const fn flat_age_index(&self) -> Option<usize> {
        self.flat_age
    }

    /// Column index of `storey_median`.
    pub const fn storey_median_index(&self) -> Option<usize> {
        self.storey_median
    }

    /// Column index of a town's one-hot column.
    pub fn town_index(&self, town: Town) -> Option<usize> {
        self.towns[town.index()]
    }

    /// Column index of a flat type's one-hot column.
    pub fn flat_type_index(&self, flat_type: FlatType) -> Option<usize> {
        self.flat_types[flat_type.index()]
    }

    /// Column index of a flat model's one-hot column.
    pub fn flat_model_index(&self, flat_model: FlatModel) -> Option<usize> {
        self.flat_models[flat_model.index()]
    }

    /// Report the values this layout cannot represent.
    pub fn coverage(&self) -> Coverage {
        let missing_numeric = [
            (FLOOR_AREA_SQM, self.floor_area),
            (FLAT_AGE, self.flat_age),
            (STOREY_MEDIAN, self.storey_median),
        ]
        .into_iter()
        .filter_map(|(name, index)| index.is_none().then_some(name))
        .collect();

        Coverage {
            missing_numeric,
            missing_towns: missing(&Town::ALL, &self.towns),
            missing_flat_types: missing(&FlatType::ALL, &self.flat_types),
            missing_flat_models: missing(&FlatModel::ALL, &self.flat_models),
            unused_columns: self
                .names
                .iter()
                .zip(&self.slots)
                .filter(|(_, slot)| **slot == FeatureSlot::Unused)
                .map(|(name, _)| name.clone())
                .collect(),
        }
    }
}

fn missing<C: Copy>(all: &[C], indices: &[Option<usize>]) -> Vec<C> {
    all.iter()
        .zip(indices)
        .filter(|(_, index)| index.is_none())
        .map(|(value, _)| *value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("floor_area_sqm", FeatureSlot::FloorArea)]
    #[case("flat_age", FeatureSlot::FlatAge)]
    #[case("storey_median", FeatureSlot::StoreyMedian)]
    #[case("town_BEDOK", FeatureSlot::Town(Town::Bedok))]
    #[case("town_KALLANG/WHAMPOA", FeatureSlot::Town(Town::KallangWhampoa))]
    #[case("flat_type_4 ROOM", FeatureSlot::FlatType(FlatType::FourRoom))]
    #[case("flat_model_MODEL A", FeatureSlot::FlatModel(FlatModel::ModelA))]
    #[case("town_bedok", FeatureSlot::Unused)]
    #[case("town_LIM CHU KANG", FeatureSlot::Unused)]
    #[case("flat_model_2-ROOM", FeatureSlot::Unused)]
    #[case("remaining_lease", FeatureSlot::Unused)]
    fn test_classify(#[case] name: &str, #[case] expected: FeatureSlot) {
        assert_eq!(FeatureSlot::classify(name), expected);
    }

    #[test]
    fn test_full_layout_is_complete() {
        let layout = FeatureLayout::resolve(&FeatureSchema::full());
        assert!(layout.coverage().is_complete());
        assert_eq!(layout.floor_area_index(), Some(0));
        assert_eq!(layout.flat_age_index(), Some(1));
        assert_eq!(layout.storey_median_index(), Some(2));
        assert_eq!(layout.town_index(Town::AngMoKio), Some(3));
        assert_eq!(layout.flat_type_index(FlatType::OneRoom), Some(3 + 26));
        assert_eq!(layout.flat_model_index(FlatModel::Improved), Some(3 + 26 + 7));
    }

    #[test]
    fn test_partial_layout_coverage() {
        // Dropped-first-level encoding: ANG MO KIO and 1 ROOM have no column.
        let schema = FeatureSchema::new(vec![
            "flat_age".into(),
            "town_BEDOK".into(),
            "flat_type_4 ROOM".into(),
            "month_index".into(),
        ])
        .unwrap();
        let layout = FeatureLayout::resolve(&schema);
        let coverage = layout.coverage();

        assert!(!coverage.is_complete());
        assert_eq!(coverage.missing_numeric, ["floor_area_sqm", "storey_median"]);
        assert_eq!(coverage.missing_towns.len(), 25);
        assert!(!coverage.missing_towns.contains(&Town::Bedok));
        assert_eq!(coverage.missing_flat_types.len(), 6);
        assert_eq!(coverage.missing_flat_models.len(), 10);
        assert_eq!(coverage.unused_columns, ["month_index"]);
        assert_eq!(layout.town_index(Town::AngMoKio), None);

        let report = coverage.to_string();
        assert!(report.contains("unused columns: month_index"));
        assert!(report.contains("numeric features: floor_area_sqm, storey_median"));
    }
}
