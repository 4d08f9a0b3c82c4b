//! Isolation forest: an ensemble of random partition trees.
//!
//! Anomalies sit closer to the root because fewer random splits are needed
//! to separate them from the rest of the subsample.

pub mod builder;
pub mod model;
pub mod path_length;
pub mod tree;

pub use builder::TreeBuilder;
pub use model::{ForestParams, IsolationForestModel};
pub use path_length::{average_path_length, max_depth_for};
pub use tree::{IsolationTree, Node};
