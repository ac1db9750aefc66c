//! Tree assembly: flat `{id, parentId}` records into an arena-backed forest.
//!
//! Nodes live in a single `Vec` owned by [`Forest`]. Children are owned
//! through the arena; the parent link is a plain [`NodeId`] handle and is only
//! used for walking upwards.

use crate::config::AssemblyConfig;
use crate::error::{Error, Result};
use crate::ir::NodeRecord;
use crate::validate::validate_records;
use indexmap::IndexMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode<'a, T> {
    pub data: &'a T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    pub x: f32,
    pub y: f32,
    level: usize,
    /// Scratch space for layout algorithms that need a per-node offset.
    pub modifier: f32,
}

impl<'a, T> TreeNode<'a, T> {
    fn new(data: &'a T) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
            x: 0.0,
            y: 0.0,
            level: 0,
            modifier: 0.0,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn level(&self) -> usize {
        self.level
    }
}

#[derive(Debug, Clone)]
pub struct Forest<'a, T> {
    nodes: Vec<TreeNode<'a, T>>,
    roots: Vec<NodeId>,
    detached: Vec<NodeId>,
}

impl<'a, T> Forest<'a, T> {
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &TreeNode<'a, T> {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TreeNode<'a, T> {
        &mut self.nodes[id.0]
    }

    /// All nodes in the arena, including detached ones.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &TreeNode<'a, T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    /// Nodes that were wired to a parent but never reach a root, i.e. members
    /// of a parent cycle and anything hanging below one.
    pub fn detached(&self) -> &[NodeId] {
        &self.detached
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of nodes reachable from the roots.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.detached.len()
    }

    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first pre-order over the subtree rooted at `root`.
    pub fn preorder(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        order
    }

    /// Pre-order over every tree, roots taken left to right.
    pub fn walk(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .flat_map(|&root| self.preorder(root))
            .collect()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.nodes[id.0].parent, |&current| {
            self.nodes[current.0].parent
        })
        .take(self.nodes.len())
    }
}

impl<'a, T: NodeRecord> Forest<'a, T> {
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.data.id() == id)
            .map(NodeId)
    }
}

/// Builds a forest from flat records, tolerating every data problem.
///
/// Duplicate ids resolve last-write-wins while keeping the position of the
/// first occurrence; unknown parents promote the record to a root; cycles are
/// left unreachable and show up in [`Forest::detached`].
pub fn build_forest<T: NodeRecord>(records: &[T]) -> Forest<'_, T> {
    let mut by_id: IndexMap<&str, &T> = IndexMap::with_capacity(records.len());
    for record in records {
        by_id.insert(record.id(), record);
    }

    let mut nodes: Vec<TreeNode<'_, T>> = by_id
        .values()
        .map(|&record| TreeNode::new(record))
        .collect();
    let mut roots = Vec::new();
    for idx in 0..nodes.len() {
        let child = NodeId(idx);
        let data = nodes[idx].data;
        match data.parent_id() {
            None => roots.push(child),
            Some(parent_id) => match by_id.get_index_of(parent_id) {
                Some(parent) => {
                    nodes[parent].children.push(child);
                    nodes[idx].parent = Some(NodeId(parent));
                }
                None => roots.push(child),
            },
        }
    }

    let mut forest = Forest {
        nodes,
        roots,
        detached: Vec::new(),
    };
    let reached = assign_levels(&mut forest);
    forest.detached = reached
        .iter()
        .enumerate()
        .filter(|(_, seen)| !**seen)
        .map(|(idx, _)| NodeId(idx))
        .collect();

    debug!(
        records = records.len(),
        nodes = forest.len(),
        roots = forest.roots.len(),
        detached = forest.detached.len(),
        "assembled forest"
    );
    forest
}

/// Builds a forest according to `config`: lenient mode logs every issue and
/// carries on, strict mode refuses input with any issue.
pub fn build_forest_with<'a, T: NodeRecord>(
    records: &'a [T],
    config: &AssemblyConfig,
) -> Result<Forest<'a, T>> {
    let issues = validate_records(records);
    if !issues.is_empty() {
        if config.strict {
            return Err(Error::InvalidRecords(issues));
        }
        for issue in &issues {
            warn!(id = issue.id(), "{issue}");
        }
    }
    Ok(build_forest(records))
}

// Iterative pre-order so deep chains don't exhaust the stack.
fn assign_levels<T>(forest: &mut Forest<'_, T>) -> Vec<bool> {
    let mut reached = vec![false; forest.nodes.len()];
    let mut stack: Vec<(NodeId, usize)> =
        forest.roots.iter().rev().map(|&root| (root, 0)).collect();
    while let Some((id, level)) = stack.pop() {
        reached[id.0] = true;
        let node = &mut forest.nodes[id.0];
        node.level = level;
        stack.extend(node.children.iter().rev().map(|&child| (child, level + 1)));
    }
    reached
}
