//! Nested message trees, dot-path resolution, and merging

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A parsed resource bundle: nested namespaces with message leaves.
///
/// Deserialization enforces the structural contract. A JSON value that is
/// neither a string nor an object fails to parse, so numbers, arrays, and
/// null never make it into a tree. Trees are immutable after load; merging
/// builds a new tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageTree {
    /// A translated message, possibly containing `{{name}}` placeholders
    Leaf(String),
    /// A namespace of nested messages
    Node(BTreeMap<String, MessageTree>),
}

impl Default for MessageTree {
    fn default() -> Self {
        Self::Node(BTreeMap::new())
    }
}

impl MessageTree {
    /// Parse a bundle from JSON text. The root must be an object.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        use serde::de::Error;

        let tree: Self = serde_json::from_str(content)?;
        match tree {
            Self::Node(_) => Ok(tree),
            Self::Leaf(_) => Err(serde_json::Error::custom("bundle root must be an object")),
        }
    }

    /// Resolve a dot-separated path to a leaf message.
    ///
    /// Returns `None` when a segment is absent, when the path runs past a
    /// leaf, or when it stops on a namespace instead of a message. Never
    /// panics and never coerces a namespace into text.
    pub fn resolve(&self, dot_path: &str) -> Option<&str> {
        let mut current = self;
        for segment in dot_path.split('.') {
            match current {
                Self::Node(children) => current = children.get(segment)?,
                Self::Leaf(_) => return None,
            }
        }
        match current {
            Self::Leaf(text) => Some(text.as_str()),
            Self::Node(_) => None,
        }
    }

    /// Whether the path resolves to a leaf
    pub fn has_translation(&self, dot_path: &str) -> bool {
        self.resolve(dot_path).is_some()
    }

    /// Lay this tree over a base tree, producing the merged result.
    ///
    /// Keys present in both recurse when both sides are namespaces;
    /// everywhere else this tree wins, including when the shapes disagree.
    /// Keys present only in the base are kept. Both inputs are left
    /// untouched, and merging a tree over itself returns an equal tree.
    pub fn merged_over(&self, base: &Self) -> Self {
        match (self, base) {
            (Self::Node(ours), Self::Node(theirs)) => {
                let mut merged = theirs.clone();
                for (key, value) in ours {
                    let resolved = match merged.remove(key) {
                        Some(existing) => value.merged_over(&existing),
                        None => value.clone(),
                    };
                    merged.insert(key.clone(), resolved);
                }
                Self::Node(merged)
            }
            _ => self.clone(),
        }
    }

    /// Which of the given dot-paths do not resolve in this tree
    pub fn missing_keys<'a, I>(&self, keys: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter()
            .filter(|key| !self.has_translation(key))
            .map(str::to_owned)
            .collect()
    }

    /// Every leaf's dot-path, in tree order
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_leaf_paths(String::new(), &mut paths);
        paths
    }

    fn collect_leaf_paths(&self, prefix: String, paths: &mut Vec<String>) {
        match self {
            Self::Leaf(_) => paths.push(prefix),
            Self::Node(children) => {
                for (key, child) in children {
                    let child_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    child.collect_leaf_paths(child_prefix, paths);
                }
            }
        }
    }
}
