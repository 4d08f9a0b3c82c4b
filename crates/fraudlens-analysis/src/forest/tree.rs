//! Isolation trees: immutable binary partitions of a subsample.

use serde::{Deserialize, Serialize};

use super::path_length::average_path_length;

/// A node owns its children exclusively; there are no back-references.
///
/// Serialized as `{feature_index, threshold, left, right}` for internal
/// nodes and `{leaf_size}` for leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Internal {
        feature_index: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        leaf_size: usize,
    },
}

impl Node {
    pub fn leaf(leaf_size: usize) -> Self {
        Self::Leaf { leaf_size }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// One randomized partition tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsolationTree {
    root: Node,
}

impl IsolationTree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// `h(x) = d + c(leaf_size)` where `d` is the number of edges from the
    /// root to the leaf `x` falls into. Points go left when
    /// `x[feature] < threshold`.
    ///
    /// `x` must be at least as wide as the widest feature index; the model
    /// checks this before calling.
    pub fn path_length(&self, x: &[f64]) -> f64 {
        let mut node = &self.root;
        let mut depth = 0usize;
        loop {
            match node {
                Node::Internal {
                    feature_index,
                    threshold,
                    left,
                    right,
                } => {
                    node = if x[*feature_index] < *threshold {
                        &**left
                    } else {
                        &**right
                    };
                    depth += 1;
                }
                Node::Leaf { leaf_size } => {
                    return depth as f64 + average_path_length(*leaf_size);
                }
            }
        }
    }

    /// Longest root-to-leaf edge count.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Internal { left, right, .. } => 1 + walk(left).max(walk(right)),
                Node::Leaf { .. } => 0,
            }
        }
        walk(&self.root)
    }

    /// Sum of leaf sizes: the number of subsample points the tree was built on.
    pub fn sample_count(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Internal { left, right, .. } => walk(left) + walk(right),
                Node::Leaf { leaf_size } => *leaf_size,
            }
        }
        walk(&self.root)
    }

    /// Add one to `counts[f]` for every internal node splitting on `f`.
    pub fn count_splits(&self, counts: &mut [usize]) {
        fn walk(node: &Node, counts: &mut [usize]) {
            if let Node::Internal {
                feature_index,
                left,
                right,
                ..
            } = node
            {
                if let Some(slot) = counts.get_mut(*feature_index) {
                    *slot += 1;
                }
                walk(left, counts);
                walk(right, counts);
            }
        }
        walk(&self.root, counts);
    }

    /// Largest feature index referenced by any split.
    pub fn max_feature_index(&self) -> Option<usize> {
        fn walk(node: &Node) -> Option<usize> {
            match node {
                Node::Internal {
                    feature_index,
                    left,
                    right,
                    ..
                } => [Some(*feature_index), walk(left), walk(right)]
                    .into_iter()
                    .flatten()
                    .max(),
                Node::Leaf { .. } => None,
            }
        }
        walk(&self.root)
    }
}
