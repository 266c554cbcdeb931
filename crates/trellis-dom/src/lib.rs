//! Element tree implementation for the trellis layout engine.
//!
//! This crate provides an arena-based tree structure that owns every element
//! of a scene.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships.
//! A node owns the list of its children's ids; the parent link is just another
//! id used for lookups, never for ownership. This gives O(1) access and
//! traversal without reference cycles or borrow checker issues.
//!
//! Slots are never reused: once a subtree is removed its ids stay dead, so a
//! stale id can never alias a newer node.

use std::fmt;
use std::ops::{Index, IndexMut};

use thiserror::Error;

/// A type-safe index into the tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural errors raised by tree mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Appending would make a node its own descendant.
    #[error("cannot append {child} to {parent}: {child} is {parent} or one of its ancestors")]
    Cycle {
        /// The would-be parent.
        parent: NodeId,
        /// The would-be child.
        child: NodeId,
    },
    /// The id refers to a node that was removed (or never existed).
    #[error("node {0} is not in the tree")]
    Stale(NodeId),
}

/// A single slot in the arena: the payload plus its tree links.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Payload carried by this node.
    pub data: T,

    /// Parent link, used for lookups only. Never an ownership edge.
    pub parent: Option<NodeId>,

    /// Ordered list of owned children.
    pub children: Vec<NodeId>,
}

/// Arena-based tree with O(1) node access and traversal.
///
/// Nodes live in one vector and refer to each other by `NodeId`, so lookups
/// and parent hops are O(1) and no node ever borrows another. Attaching
/// checks for cycles, so the structure is always a forest.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    /// All nodes ever allocated, indexed by `NodeId`. Removed nodes are `None`.
    nodes: Vec<Option<Node<T>>>,
    /// Number of live nodes.
    live: usize,
}

impl<T> Tree<T> {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            live: 0,
        }
    }

    /// Get the number of live nodes in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.live
    }

    /// Check if the tree has no live nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns true if `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Store `data` as a new detached node, which is its own root.
    pub fn alloc(&mut self, data: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node {
            data,
            parent: None,
            children: Vec::new(),
        }));
        self.live += 1;
        id
    }

    /// Get a node (payload and links) by its ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Get a node's payload by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|n| &n.data)
    }

    /// Get a mutable reference to a node's payload by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).map(|n| &mut n.data)
    }

    /// Parent of `id`, or `None` for roots and stale ids.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// A child has exactly one parent at a time: if `child` is already
    /// attached somewhere it is first detached from that parent.
    ///
    /// # Errors
    ///
    /// - [`TreeError::Stale`] if either id is not a live node.
    /// - [`TreeError::Cycle`] if `child` is `parent` or one of its ancestors.
    pub fn try_append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::Stale(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::Stale(child));
        }
        if parent == child || self.is_descendant_of(parent, child) {
            return Err(TreeError::Cycle { parent, child });
        }

        let _ = self.detach(child);

        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        Ok(())
    }

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    ///
    /// # Panics
    ///
    /// Panics if the append would create a cycle or either id is stale.
    /// Both are configuration errors in the calling code.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Err(err) = self.try_append_child(parent, child) {
            panic!("invalid tree edit: {err}");
        }
    }

    /// Removes `child` from `parent`'s child list and clears its parent link.
    ///
    /// Returns false (and changes nothing) if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|&c| c != child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
        true
    }

    /// Detaches `child` from its parent, if it has one, returning the old parent.
    pub fn detach(&mut self, child: NodeId) -> Option<NodeId> {
        let parent = self.parent(child)?;
        let _ = self.remove_child(parent, child);
        Some(parent)
    }

    /// Check if `descendant` is a strict descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// The topmost ancestor of `id` (or `id` itself if it is detached).
    #[must_use]
    pub fn root_of(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Walk upward from the parent of `id` to its root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_, T> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over `id` and all of its descendants in pre-order (tree order).
    #[must_use]
    pub fn subtree(&self, id: NodeId) -> SubtreeIterator<'_, T> {
        let stack = if self.contains(id) { vec![id] } else { Vec::new() };
        SubtreeIterator { tree: self, stack }
    }

    /// Detach `id` and destroy it together with all of its descendants.
    ///
    /// Returns the number of nodes removed. Ids of removed nodes become stale.
    pub fn remove_subtree(&mut self, id: NodeId) -> usize {
        let _ = self.detach(id);
        let doomed: Vec<NodeId> = self.subtree(id).collect();
        for &dead in &doomed {
            if let Some(slot) = self.nodes.get_mut(dead.0) {
                *slot = None;
            }
        }
        self.live -= doomed.len();
        doomed.len()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(data) => data,
            None => panic!("{}", TreeError::Stale(id)),
        }
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(data) => data,
            None => panic!("{}", TreeError::Stale(id)),
        }
    }
}

/// Upward walk returned by [`Tree::ancestors`].
pub struct AncestorIterator<'a, T> {
    tree: &'a Tree<T>,
    current: Option<NodeId>,
}

impl<T> Iterator for AncestorIterator<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over a subtree.
pub struct SubtreeIterator<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<T> Iterator for SubtreeIterator<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
