use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::event::handler::SharedHandler;
use crate::event::path::EventPath;

/// A handler registered by one plugin at one exact event path
#[derive(Clone)]
pub struct HandlerRecord {
    owner_id: String,
    handler: SharedHandler,
}

impl HandlerRecord {
    pub fn new(owner_id: impl Into<String>, handler: SharedHandler) -> Self {
        Self {
            owner_id: owner_id.into(),
            handler,
        }
    }

    /// Name of the plugin that registered this handler
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn handler(&self) -> &SharedHandler {
        &self.handler
    }
}

impl fmt::Debug for HandlerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRecord")
            .field("owner_id", &self.owner_id)
            .finish_non_exhaustive()
    }
}

/// One node of the event trie.
///
/// Handlers stored here match only the exact path leading to this node;
/// nothing is inherited from ancestors or descendants.
#[derive(Default)]
pub struct TrieNode {
    children: HashMap<String, TrieNode>,
    handlers: Vec<HandlerRecord>,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers registered exactly at this node, in insertion order
    pub fn handlers(&self) -> &[HandlerRecord] {
        &self.handlers
    }

    /// Append a handler record
    pub fn push_handler(&mut self, record: HandlerRecord) {
        self.handlers.push(record);
    }

    /// Get a direct child by segment
    pub fn child(&self, segment: &str) -> Option<&TrieNode> {
        self.children.get(segment)
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Drop every handler owned by `owner_id` here and below, returning how
    /// many were removed. Nodes themselves are kept.
    fn remove_owned(&mut self, owner_id: &str) -> usize {
        let before = self.handlers.len();
        self.handlers.retain(|record| record.owner_id != owner_id);
        let mut removed = before - self.handlers.len();
        for child in self.children.values_mut() {
            removed += child.remove_owned(owner_id);
        }
        removed
    }

    fn count_handlers(&self) -> usize {
        self.handlers.len()
            + self
                .children
                .values()
                .map(TrieNode::count_handlers)
                .sum::<usize>()
    }

    fn count_descendants(&self) -> usize {
        self.children.len()
            + self
                .children
                .values()
                .map(TrieNode::count_descendants)
                .sum::<usize>()
    }
}

// Manual Debug implementation for TrieNode
impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("handlers", &self.handlers)
            .field("children", &self.children)
            .finish()
    }
}

/// Prefix tree mapping event paths to handler records, one segment per level
#[derive(Debug, Default)]
pub struct TrieIndex {
    root: TrieNode,
}

impl TrieIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `path` from the root, creating any missing nodes, and return the
    /// terminal node.
    pub fn resolve_or_create(&mut self, path: &EventPath) -> &mut TrieNode {
        debug!("Resolving (or creating) trie node for {}", path);
        let mut node = &mut self.root;
        for segment in path.segments() {
            node = node.children.entry(segment.clone()).or_default();
        }
        node
    }

    /// Read-only walk of `path`; `None` as soon as a segment is missing.
    /// Exact path equality is the only match rule.
    pub fn resolve_existing(&self, path: &EventPath) -> Option<&TrieNode> {
        path.segments()
            .iter()
            .try_fold(&self.root, |node, segment| node.children.get(segment))
    }

    /// Handlers registered exactly at `path`; empty when the path is unknown
    pub fn handlers_at(&self, path: &EventPath) -> &[HandlerRecord] {
        self.resolve_existing(path)
            .map(TrieNode::handlers)
            .unwrap_or(&[])
    }

    /// Remove every handler owned by `owner_id` anywhere in the trie.
    /// Structural nodes are retained even when left without handlers.
    pub fn remove_by_owner(&mut self, owner_id: &str) -> usize {
        let removed = self.root.remove_owned(owner_id);
        debug!("Removed {} handler record(s) owned by {}", removed, owner_id);
        removed
    }

    /// Total number of handler records in the trie
    pub fn handler_count(&self) -> usize {
        self.root.count_handlers()
    }

    /// Number of nodes below the root
    pub fn node_count(&self) -> usize {
        self.root.count_descendants()
    }

    /// True when no handler is registered anywhere
    pub fn is_empty(&self) -> bool {
        self.handler_count() == 0
    }
}
