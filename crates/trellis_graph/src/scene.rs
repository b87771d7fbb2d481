// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene persistence: a named collection of node trees.

use crate::tree::NodeTree;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default scene file name
pub const SCENE_FILE_NAME: &str = "scene.trellis";

/// Error loading or saving a scene
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed scene data
    #[error("Invalid scene data: {0}")]
    Format(String),
}

/// A set of node trees addressed by name.
///
/// Trees keep insertion order. Adding a tree under an existing name
/// replaces it in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Trees by name
    trees: IndexMap<String, NodeTree>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tree, keyed by its name
    pub fn add_tree(&mut self, tree: NodeTree) {
        self.trees.insert(tree.name.clone(), tree);
    }

    /// Get a tree by name
    pub fn tree(&self, name: &str) -> Option<&NodeTree> {
        self.trees.get(name)
    }

    /// Get a mutable tree by name
    pub fn tree_mut(&mut self, name: &str) -> Option<&mut NodeTree> {
        self.trees.get_mut(name)
    }

    /// Remove a tree by name
    pub fn remove_tree(&mut self, name: &str) -> Option<NodeTree> {
        self.trees.shift_remove(name)
    }

    /// Get all trees
    pub fn trees(&self) -> impl Iterator<Item = &NodeTree> {
        self.trees.values()
    }

    /// Get the number of trees
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Whether the scene has no trees
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Load a scene from a file
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        let scene = ron::from_str(&content).map_err(|e| SceneError::Format(e.to_string()))?;
        Ok(scene)
    }

    /// Save the scene to a file
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);

        let content =
            ron::ser::to_string_pretty(self, config).map_err(|e| SceneError::Format(e.to_string()))?;

        std::fs::write(path, content)?;
        Ok(())
    }
}
