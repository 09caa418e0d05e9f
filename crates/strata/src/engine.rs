//! Layout orchestration.
//!
//! [`LayoutEngine`] owns a graph and its options and runs the fixed pipeline:
//! break cycles, rank, order, place, route, measure. The pipeline works on a snapshot of the
//! graph taken when [`LayoutEngine::layout`] is called, so cycle breaking never leaks into the
//! engine's own graph and repeated calls return the same result.

use crate::error::Result;
use crate::graph::{EdgeIx, Graph, NodeIx, Size};
use crate::options::LayoutOptions;
use crate::{Bounds, EdgePaths, Positions, acyclic, order, position, rank, route};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Positions,
    pub edges: EdgePaths,
    pub bounds: Bounds,
}

impl LayoutResult {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    graph: Graph,
    options: LayoutOptions,
}

impl LayoutEngine {
    pub fn new(options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            graph: Graph::new(),
            options,
        })
    }

    /// Wraps an already populated graph.
    pub fn with_graph(graph: Graph, options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { graph, options })
    }

    pub fn add_node(&mut self, id: impl Into<String>, size: Size) -> Result<NodeIx> {
        Ok(self.graph.add_node(id, size)?)
    }

    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<EdgeIx> {
        Ok(self.graph.add_edge(from, to)?)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn layout(&self) -> Result<LayoutResult> {
        layout_graph(&self.graph, &self.options)
    }
}

/// Lays out `g` without modifying it.
pub fn layout_graph(g: &Graph, opts: &LayoutOptions) -> Result<LayoutResult> {
    opts.validate()?;
    if g.is_empty() {
        return Ok(LayoutResult::default());
    }

    let span = tracing::debug_span!("layout", nodes = g.node_count(), edges = g.edge_count());
    let _enter = span.enter();

    let mut work = g.clone();
    let removed = acyclic::make_acyclic(&mut work);
    if removed > 0 {
        tracing::warn!(removed, "removed feedback edges to break cycles");
    }

    let ranks = rank::assign_ranks(&work);
    tracing::debug!(ranks = rank::rank_count(&ranks), "assigned ranks");

    let ordering = order::order_nodes_with(&work, &ranks, opts.ordering);
    tracing::debug!(strategy = ?opts.ordering, "ordered ranks");

    let nodes = position::assign_coordinates(&work, &ordering, opts)?;
    let edges = route::route_edges(&work, &nodes, opts)?;
    let bounds = Bounds::of(&nodes, opts);
    tracing::debug!(width = bounds.width, height = bounds.height, "layout complete");

    Ok(LayoutResult {
        nodes,
        edges,
        bounds,
    })
}
