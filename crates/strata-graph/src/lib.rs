#![forbid(unsafe_code)]

//! Directed graph store used by `strata`.
//!
//! Nodes live in an arena and are addressed by [`NodeIx`]. Adjacency is kept in parallel,
//! index-addressed sets (`outgoing[ix]` / `incoming[ix]`) so cycle breaking can edit it without
//! touching the node records. The edge list is append-only and keeps insertion order, including
//! duplicate edges between the same pair.

pub mod error;

pub use error::{GraphError, Result};

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type AdjSet = IndexSet<NodeIx, FxBuildHasher>;

/// Stable handle of a node inside one [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIx(u32);

impl NodeIx {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(ix: usize) -> Self {
        Self(u32::try_from(ix).expect("graph node count exceeds u32::MAX"))
    }
}

/// Position of an edge in the graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIx(usize);

impl EdgeIx {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    size: Size,
}

impl Node {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeIx,
    pub to: NodeIx,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: HashMap<String, NodeIx>,

    outgoing: Vec<AdjSet>,
    incoming: Vec<AdjSet>,

    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            node_index: HashMap::with_capacity_and_hasher(nodes, FxBuildHasher),
            outgoing: Vec::with_capacity(nodes),
            incoming: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Adds a node, or returns the handle of the existing node with the same id.
    ///
    /// The first insertion wins: re-adding an id never resizes it, and the size of a repeated
    /// insertion is not validated.
    pub fn add_node(&mut self, id: impl Into<String>, size: Size) -> Result<NodeIx> {
        let id = id.into();
        if let Some(&ix) = self.node_index.get(&id) {
            return Ok(ix);
        }
        if !size.is_valid() {
            return Err(GraphError::InvalidSize {
                id,
                width: size.width,
                height: size.height,
            });
        }

        let ix = NodeIx::from_index(self.nodes.len());
        self.nodes.push(Node {
            id: id.clone(),
            size,
        });
        self.outgoing.push(AdjSet::default());
        self.incoming.push(AdjSet::default());
        self.node_index.insert(id, ix);
        Ok(ix)
    }

    /// Appends an edge between two existing nodes.
    ///
    /// Both endpoints must already exist; otherwise nothing is recorded and
    /// [`GraphError::MissingEndpoint`] names the first unknown id.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<EdgeIx> {
        let missing = |id: &str| GraphError::MissingEndpoint {
            from: from.to_string(),
            to: to.to_string(),
            missing: id.to_string(),
        };
        let from_ix = self.node_ix(from).ok_or_else(|| missing(from))?;
        let to_ix = self.node_ix(to).ok_or_else(|| missing(to))?;
        Ok(self.add_edge_ix(from_ix, to_ix))
    }

    /// Appends an edge between two node handles of this graph.
    ///
    /// # Panics
    ///
    /// Panics if either handle was not issued by this graph (a handle from another graph, or one kept
    /// across [`Graph::clear`]). Use [`Graph::node_by_ix`] to check a handle first.
    pub fn add_edge_ix(&mut self, from: NodeIx, to: NodeIx) -> EdgeIx {
        let ix = EdgeIx(self.edges.len());
        self.edges.push(Edge { from, to });
        self.outgoing[from.index()].insert(to);
        self.incoming[to.index()].insert(from);
        ix
    }

    /// Drops the adjacency `from -> to` in both directions. Edge records are left untouched.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn remove_adjacency(&mut self, from: NodeIx, to: NodeIx) -> bool {
        let Some(out) = self.outgoing.get_mut(from.index()) else {
            return false;
        };
        let removed = out.shift_remove(&to);
        if let Some(inc) = self.incoming.get_mut(to.index()) {
            inc.shift_remove(&from);
        }
        removed
    }

    pub fn has_adjacency(&self, from: NodeIx, to: NodeIx) -> bool {
        self.outgoing
            .get(from.index())
            .is_some_and(|out| out.contains(&to))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node_ix(&self, id: &str) -> Option<NodeIx> {
        self.node_index.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_ix(id).map(|ix| &self.nodes[ix.index()])
    }

    pub fn node_by_ix(&self, ix: NodeIx) -> Option<&Node> {
        self.nodes.get(ix.index())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes with their handles, in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeIx, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeIx::from_index(i), n))
    }

    pub fn node_ixs(&self) -> impl ExactSizeIterator<Item = NodeIx> + use<> {
        (0..self.nodes.len()).map(NodeIx::from_index)
    }

    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, ix: EdgeIx) -> Option<Edge> {
        self.edges.get(ix.index()).copied()
    }

    /// Id of the node behind `ix`.
    ///
    /// # Panics
    ///
    /// Panics if `ix` was not issued by this graph (a handle from another graph, or one kept
    /// across [`Graph::clear`]). Use [`Graph::node_by_ix`] to check a handle first.
    pub fn id(&self, ix: NodeIx) -> &str {
        &self.nodes[ix.index()].id
    }

    /// Targets of `ix`'s outgoing adjacency, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `ix` was not issued by this graph (a handle from another graph, or one kept
    /// across [`Graph::clear`]). Use [`Graph::node_by_ix`] to check a handle first.
    pub fn successors(&self, ix: NodeIx) -> impl ExactSizeIterator<Item = NodeIx> + '_ {
        self.outgoing[ix.index()].iter().copied()
    }

    /// Sources of `ix`'s incoming adjacency, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `ix` was not issued by this graph (a handle from another graph, or one kept
    /// across [`Graph::clear`]). Use [`Graph::node_by_ix`] to check a handle first.
    pub fn predecessors(&self, ix: NodeIx) -> impl ExactSizeIterator<Item = NodeIx> + '_ {
        self.incoming[ix.index()].iter().copied()
    }

    /// # Panics
    ///
    /// Panics if `ix` was not issued by this graph (a handle from another graph, or one kept
    /// across [`Graph::clear`]). Use [`Graph::node_by_ix`] to check a handle first.
    pub fn out_degree(&self, ix: NodeIx) -> usize {
        self.outgoing[ix.index()].len()
    }

    /// # Panics
    ///
    /// Panics if `ix` was not issued by this graph (a handle from another graph, or one kept
    /// across [`Graph::clear`]). Use [`Graph::node_by_ix`] to check a handle first.
    pub fn in_degree(&self, ix: NodeIx) -> usize {
        self.incoming[ix.index()].len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_index.clear();
        self.outgoing.clear();
        self.incoming.clear();
        self.edges.clear();
    }
}
