// src/model/mod.rs
//! The city model: a rooted containment tree of packages, files and types,
//! measured and laid out for rendering.
//!
//! Nodes live in an arena owned by [`CityModel`] and refer to their children
//! by [`NodeId`]. The pipeline runs once per project:
//! build → layout → aggregate, then the model is flattened for output.

pub mod aggregate;
pub mod builder;
pub mod export;
pub mod flatten;
pub mod layout;
pub mod pack;

use std::borrow::Borrow;
use std::collections::HashMap;

use crate::types::{Metrics, MetricsRecord, NodeKind, Position, Size};

pub use self::flatten::ReportRow;

/// Index of a node inside its [`CityModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub full_path: String,
    pub kind: NodeKind,
    /// Metrics contributed directly to this node by the feed.
    pub own: Metrics,
    /// Own metrics plus every descendant's, filled by the aggregator.
    pub total: Metrics,
    pub footprint: Size,
    /// Size the parent packs this node with.
    pub child_area: Size,
    /// Center offset relative to the parent's center. Unused on the root.
    pub position: Position,
    pub decl_line: usize,
    pub children: Vec<NodeId>,
    lookup: HashMap<String, NodeId>,
}

impl Node {
    fn new(name: &str, full_path: String, kind: NodeKind) -> Self {
        Self {
            name: name.to_string(),
            full_path,
            kind,
            own: Metrics::default(),
            total: Metrics::default(),
            footprint: Size::default(),
            child_area: Size::default(),
            position: Position::default(),
            decl_line: 0,
            children: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CityModel {
    nodes: Vec<Node>,
}

impl CityModel {
    /// Runs the whole pipeline: builds the tree, lays it out and sums metrics.
    #[must_use]
    pub fn new<I, K, R>(records: I, root_name: &str) -> Self
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: Borrow<MetricsRecord>,
    {
        let mut model = builder::build(records, root_name);
        layout::layout(&mut model);
        aggregate::accumulate(&mut model);
        model
    }

    /// An unbuilt model holding only the root package.
    fn with_root(root_name: &str) -> Self {
        Self {
            nodes: vec![Node::new(
                root_name,
                root_name.to_string(),
                NodeKind::Package,
            )],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Looks up a direct child by name.
    #[must_use]
    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent).lookup.get(name).copied()
    }

    /// Resolves a `/`-separated path of child names starting below the root.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<NodeId> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self.root(), |id, name| self.child(id, name))
    }

    /// Nodes in depth-first pre-order, root excluded, following `children` order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.node(next).children.iter().rev().copied());
        }
        out
    }

    fn child_or_insert(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: NodeKind,
        full_path: impl FnOnce(&str) -> String,
    ) -> NodeId {
        if let Some(id) = self.child(parent, name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        let path = full_path(&self.node(parent).full_path);
        self.nodes.push(Node::new(name, path, kind));
        self.node_mut(parent).lookup.insert(name.to_string(), id);
        id
    }
}
