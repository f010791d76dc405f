//! Gradient boosted tree ensembles.
//!
//! Trees are stored as flat node lists with the root at index 0, the layout
//! XGBoost's JSON dump uses. Child indices must point strictly forward, which
//! rules out cycles and bounds traversal by the tree size.

use super::Regressor;
use crate::error::ArtifactError;
use serde::{Deserialize, Serialize};

const fn default_missing_left() -> bool {
    true
}

/// A tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Internal split
    Split {
        /// Feature index tested
        feature: usize,
        /// Rows with `x[feature] < threshold` go left
        threshold: f64,
        /// Index of the left child
        left: usize,
        /// Index of the right child
        right: usize,
        /// Whether NaN inputs go left
        #[serde(default = "default_missing_left")]
        missing_left: bool,
    },
    /// Terminal node
    Leaf {
        /// Contribution of this leaf
        value: f64,
    },
}

/// A single regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Nodes, root first
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree from its nodes.
    pub const fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    fn validate(&self, tree: usize, n_features: usize) -> Result<(), ArtifactError> {
        let invalid = |msg: String| ArtifactError::Invalid(format!("tree {tree}: {msg}"));

        if self.nodes.is_empty() {
            return Err(invalid("has no nodes".to_string()));
        }

        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    if feature >= n_features {
                        return Err(invalid(format!(
                            "node {index} splits on feature {feature}, model has {n_features}"
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(invalid(format!("node {index} has a NaN threshold")));
                    }
                    for child in [left, right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(invalid(format!(
                                "node {index} has out-of-order child {child}"
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(invalid(format!("leaf {index} is not finite")));
                    }
                }
            }
        }
        Ok(())
    }

    /// Leaf value reached by `row`.
    pub fn leaf_value(&self, row: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    missing_left,
                } => {
                    let x = row[feature];
                    let go_left = if x.is_nan() {
                        missing_left
                    } else {
                        x < threshold
                    };
                    index = if go_left { left } else { right };
                }
            }
        }
    }
}

/// `base_score` plus the sum of every tree's leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    /// Global bias
    #[serde(default)]
    pub base_score: f64,
    /// Boosted trees
    pub trees: Vec<Tree>,
}

impl TreeEnsemble {
    /// Create an ensemble.
    pub const fn new(base_score: f64, trees: Vec<Tree>) -> Self {
        Self { base_score, trees }
    }
}

impl Regressor for TreeEnsemble {
    fn kind(&self) -> &'static str {
        "tree_ensemble"
    }

    fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        if !self.base_score.is_finite() {
            return Err(ArtifactError::Invalid(
                "base_score is not finite".to_string(),
            ));
        }
        if self.trees.is_empty() {
            return Err(ArtifactError::Invalid(
                "tree ensemble has no trees".to_string(),
            ));
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(i, tree)| tree.validate(i, n_features))
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        self.base_score + self.trees.iter().map(|t| t.leaf_value(row)).sum::<f64>()
    }
}
