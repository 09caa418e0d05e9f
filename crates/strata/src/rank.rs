//! Rank assignment (longest path over a topological order).
//!
//! Ranks are the minimum that satisfies `rank(v) >= rank(u) + 1` for every adjacency `u -> v`,
//! which keeps the number of ranks as small as possible. Density and edge length are not
//! balanced.

use crate::RankMap;
use crate::graph::{Graph, NodeIx};
use std::collections::VecDeque;

/// Kahn's algorithm. Sources are seeded in insertion order and neighbours are released in
/// adjacency order, so the result is deterministic.
///
/// Nodes on (or only reachable through) a cycle are missing from the result.
pub fn topological_order(g: &Graph) -> Vec<NodeIx> {
    let mut indegree: Vec<usize> = g.node_ixs().map(|ix| g.in_degree(ix)).collect();
    let mut queue: VecDeque<NodeIx> = g.node_ixs().filter(|ix| indegree[ix.index()] == 0).collect();

    let mut order: Vec<NodeIx> = Vec::with_capacity(g.node_count());
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for w in g.successors(v) {
            let d = &mut indegree[w.index()];
            *d = d.saturating_sub(1);
            if *d == 0 {
                queue.push_back(w);
            }
        }
    }
    order
}

/// Assigns every node of `g` a rank. Expects an acyclic adjacency (see
/// [`crate::acyclic::make_acyclic`]).
///
/// Every known node is present in the result, in insertion order. Nodes that never appear in the
/// topological order stay at rank 0 unless a ranked predecessor pushes them down.
pub fn assign_ranks(g: &Graph) -> RankMap {
    let mut rank: Vec<usize> = vec![0; g.node_count()];
    for v in topological_order(g) {
        let next = rank[v.index()] + 1;
        for w in g.successors(v) {
            let r = &mut rank[w.index()];
            *r = (*r).max(next);
        }
    }

    g.nodes()
        .map(|(ix, n)| (n.id().to_string(), rank[ix.index()]))
        .collect()
}

/// Number of ranks in use (`max rank + 1`), or 0 for an empty map.
pub fn rank_count(ranks: &RankMap) -> usize {
    ranks.values().max().map_or(0, |&max| max + 1)
}
