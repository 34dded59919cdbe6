//! Decision-tree ensemble loaded from a JSON artifact.
//!
//! Layout:
//!
//! ```json
//! {
//!   "classes": [0, 1],
//!   "feature_names": ["url_length", "..."],
//!   "trees": [
//!     { "nodes": [
//!         { "feature": 5, "threshold": 0.5, "left": 1, "right": 2 },
//!         { "value": [30.0, 2.0] },
//!         { "value": [1.0, 40.0] }
//!     ] }
//!   ]
//! }
//! ```
//!
//! A split sends the row left when `row[feature] <= threshold`. Leaves hold
//! per-class weights (sample counts or fractions). Node 0 is the root and
//! children always come after their parent.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Classifier;
use crate::error::{Error, Result};
use crate::features::{FeatureRow, FEATURE_COLUMNS, FEATURE_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Normalized class distribution of the leaf `row` lands in.
    fn leaf_distribution(&self, row: &FeatureRow) -> Vec<f64> {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = row.get(*feature).unwrap_or(0.0);
                    idx = if x <= *threshold { *left } else { *right };
                }
                TreeNode::Leaf { value } => {
                    let total: f64 = value.iter().sum();
                    return if total > 0.0 {
                        value.iter().map(|v| v / total).collect()
                    } else {
                        vec![0.0; value.len()]
                    };
                }
            }
        }
    }

    fn validate(&self, tree_idx: usize, n_classes: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::InvalidModel(format!("tree {tree_idx} has no nodes")));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(Error::InvalidModel(format!(
                            "tree {tree_idx} node {i}: feature index {feature} out of range"
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(Error::InvalidModel(format!(
                            "tree {tree_idx} node {i}: threshold is NaN"
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(Error::InvalidModel(format!(
                                "tree {tree_idx} node {i}: bad child index {child}"
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(Error::InvalidModel(format!(
                            "tree {tree_idx} node {i}: leaf has {} weights, expected {n_classes}",
                            value.len()
                        )));
                    }
                    if let Some(w) = value.iter().find(|w| !w.is_finite() || **w < 0.0) {
                        return Err(Error::InvalidModel(format!(
                            "tree {tree_idx} node {i}: leaf weight {w} is not a finite non-negative number"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Ensemble of decision trees voting by averaged leaf probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    /// Class labels, in the order leaf weights are listed.
    pub classes: Vec<i64>,
    /// Column names the model was trained on; checked against the schema when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    /// Read and validate a JSON artifact.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let model: ForestModel = serde_json::from_slice(bytes)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(Error::InvalidModel("no classes".to_string()));
        }
        if self.trees.is_empty() {
            return Err(Error::InvalidModel("no trees".to_string()));
        }
        if let Some(names) = &self.feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
                return Err(Error::InvalidModel(format!(
                    "feature columns {names:?} do not match {FEATURE_COLUMNS:?}"
                )));
            }
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.classes.len())?;
        }
        Ok(())
    }

    fn average_distribution(&self, row: &FeatureRow) -> Vec<f64> {
        let mut acc = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (a, p) in acc.iter_mut().zip(tree.leaf_distribution(row)) {
                *a += p;
            }
        }
        let n = self.trees.len() as f64;
        acc.iter_mut().for_each(|a| *a /= n);
        acc
    }
}

impl Classifier for ForestModel {
    fn name(&self) -> &'static str {
        "forest"
    }

    fn predict(&self, row: &FeatureRow) -> Result<i64> {
        let proba = self.average_distribution(row);
        // First maximum wins on ties.
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        Ok(self.classes[best])
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>> {
        Ok(self.average_distribution(row))
    }
}
