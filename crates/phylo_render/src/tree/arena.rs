//! Arena-based tree storage with explicit parent links
//!
//! Nodes are addressed by integer index so that the per-frame ancestor walks
//! in label placement are pointer-chase free: no string hashing on the hot
//! path. String identifiers exist only at construction time, for the loading
//! collaborator's convenience.
//!
//! The root node doubles as the walk-termination sentinel: its parent link
//! points at itself, and [`TreeArena::ancestors`] stops before yielding it.
//! Insertion requires the parent to already exist, so every parent chain is
//! acyclic by construction and walks are guaranteed to terminate.

use std::collections::HashMap;

use thiserror::Error;

/// Index of a node in a [`TreeArena`]
///
/// Cheap to copy and hash; valid only for the arena that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Arena slot index for table lookups
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors from tree construction
#[derive(Debug, Error)]
pub enum TreeError {
    /// A node with this identifier was already inserted
    #[error("duplicate node identifier: {0}")]
    DuplicateNode(String),

    /// The named parent has not been inserted yet
    #[error("unknown parent {parent:?} for node {node:?}")]
    UnknownParent {
        /// Identifier of the node being inserted
        node: String,
        /// Identifier of the missing parent
        parent: String,
    },
}

#[derive(Debug)]
struct NodeRecord {
    name: String,
    parent: NodeId,
    metadata: HashMap<String, String>,
}

/// Arena of tree nodes with parent links and display metadata
///
/// Metadata is a flat string map per node, keyed by taxonomy-prefixed level
/// strings (for example `"tax_Phylum"`); [`metadata_key`] builds the
/// composed key. Missing entries are an expected, non-fatal condition for
/// label placement.
#[derive(Debug)]
pub struct TreeArena {
    nodes: Vec<NodeRecord>,
    ids: HashMap<String, NodeId>,
}

impl TreeArena {
    /// Create an arena containing only the root node
    ///
    /// The root's parent link refers to itself, making it the sentinel that
    /// terminates every ancestor walk.
    pub fn with_root(root_name: impl Into<String>) -> Self {
        let root_name = root_name.into();
        let root = NodeId(0);
        let mut ids = HashMap::new();
        ids.insert(root_name.clone(), root);
        Self {
            nodes: vec![NodeRecord {
                name: root_name,
                parent: root,
                metadata: HashMap::new(),
            }],
            ids,
        }
    }

    /// The root sentinel
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds only the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Insert a node under an existing parent
    ///
    /// # Errors
    /// [`TreeError::DuplicateNode`] if `name` was already inserted, and
    /// [`TreeError::UnknownParent`] if `parent_name` has not been inserted
    /// yet. Inserting parents before children is what keeps every parent
    /// chain acyclic.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        parent_name: &str,
    ) -> Result<NodeId, TreeError> {
        let name = name.into();
        if self.ids.contains_key(&name) {
            return Err(TreeError::DuplicateNode(name));
        }
        let parent = self
            .ids
            .get(parent_name)
            .copied()
            .ok_or_else(|| TreeError::UnknownParent {
                node: name.clone(),
                parent: parent_name.to_string(),
            })?;

        let id = NodeId(u32::try_from(self.nodes.len()).expect("arena exceeds u32 indices"));
        self.ids.insert(name.clone(), id);
        self.nodes.push(NodeRecord {
            name,
            parent,
            metadata: HashMap::new(),
        });
        Ok(id)
    }

    /// Look up a node by its string identifier
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Parent of a node; the root's parent is the root itself
    pub fn parent(&self, node: NodeId) -> NodeId {
        self.nodes[node.index()].parent
    }

    /// String identifier of a node
    pub fn name(&self, node: NodeId) -> &str {
        &self.nodes[node.index()].name
    }

    /// Attach or replace one metadata entry on a node
    pub fn set_metadata(
        &mut self,
        node: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.nodes[node.index()]
            .metadata
            .insert(key.into(), value.into());
    }

    /// Metadata entry for a composed key, if the node carries one
    pub fn metadata(&self, node: NodeId, key: &str) -> Option<&str> {
        self.nodes[node.index()].metadata.get(key).map(String::as_str)
    }

    /// Iterate the strict ancestors of `node`, nearest first
    ///
    /// The root sentinel is never yielded; an ancestor walk that reaches it
    /// simply ends. Walking from the root yields nothing.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            current: self.parent(node),
        }
    }
}

/// Iterator over a node's strict ancestors, excluding the root sentinel
#[derive(Debug)]
pub struct Ancestors<'a> {
    arena: &'a TreeArena,
    current: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == self.arena.root() {
            return None;
        }
        let out = self.current;
        self.current = self.arena.parent(out);
        Some(out)
    }
}

/// Compose the metadata key for a taxonomic level
///
/// The loading collaborator stores display strings under prefixed keys; the
/// same composition is used at placement time so lookups are a single map
/// probe per candidate.
pub(crate) fn metadata_key(prefix: &str, level: &str) -> String {
    format!("{prefix}{level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> TreeArena {
        let mut arena = TreeArena::with_root("N1");
        arena.insert("N2", "N1").unwrap();
        arena.insert("N3", "N2").unwrap();
        arena.insert("N4", "N3").unwrap();
        arena
    }

    #[test]
    fn ancestors_exclude_root_and_terminate() {
        let arena = small_tree();
        let n4 = arena.lookup("N4").unwrap();

        let chain: Vec<&str> = arena.ancestors(n4).map(|n| arena.name(n)).collect();
        assert_eq!(chain, vec!["N3", "N2"]);
    }

    #[test]
    fn root_has_no_ancestors() {
        let arena = small_tree();
        assert_eq!(arena.ancestors(arena.root()).count(), 0);
    }

    #[test]
    fn insert_rejects_unknown_parent() {
        let mut arena = TreeArena::with_root("N1");
        let err = arena.insert("N9", "missing").unwrap_err();
        assert!(matches!(err, TreeError::UnknownParent { .. }));
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut arena = small_tree();
        let err = arena.insert("N2", "N1").unwrap_err();
        assert!(matches!(err, TreeError::DuplicateNode(_)));
    }

    #[test]
    fn metadata_lookup_uses_composed_keys() {
        let mut arena = small_tree();
        let n2 = arena.lookup("N2").unwrap();
        arena.set_metadata(n2, metadata_key("tax_", "Phylum"), "Proteobacteria");

        assert_eq!(
            arena.metadata(n2, &metadata_key("tax_", "Phylum")),
            Some("Proteobacteria")
        );
        assert_eq!(arena.metadata(n2, &metadata_key("tax_", "Genus")), None);
    }
}
