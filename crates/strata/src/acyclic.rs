//! Cycle detection and feedback-edge removal.
//!
//! Cycles are found with a DFS that tracks the nodes currently on the stack. Each back edge
//! closes one reported cycle; removing the last hop of every reported cycle drops exactly those
//! back edges, which leaves the adjacency acyclic.

use crate::graph::{Graph, NodeIx};

/// Node ids along a cycle, closed by repeating the first id (`["a", "b", "a"]`).
pub type Cycle = Vec<String>;

/// Reports one cycle per DFS back edge.
///
/// Nodes are visited in insertion order and neighbours in adjacency order. Overlapping cycles can
/// all be reported; this is not a minimal cycle cover.
pub fn detect_cycles(g: &Graph) -> Vec<Cycle> {
    let mut dfs = CycleDfs {
        g,
        visited: vec![false; g.node_count()],
        on_stack: vec![false; g.node_count()],
        path: Vec::new(),
        cycles: Vec::new(),
    };
    for v in g.node_ixs() {
        dfs.visit(v);
    }
    dfs.cycles
}

struct CycleDfs<'a> {
    g: &'a Graph,
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    path: Vec<NodeIx>,
    cycles: Vec<Cycle>,
}

impl CycleDfs<'_> {
    /// Depth-first walk from `root` with an explicit stack of successor iterators, so long chains
    /// cannot exhaust the thread stack.
    fn visit(&mut self, root: NodeIx) {
        if self.visited[root.index()] {
            return;
        }

        let g = self.g;
        self.enter(root);
        let mut frames = vec![g.successors(root)];
        while let Some(next) = frames.last_mut().map(|succ| succ.next()) {
            match next {
                Some(w) if self.on_stack[w.index()] => self.record_cycle(w),
                Some(w) if self.visited[w.index()] => {}
                Some(w) => {
                    self.enter(w);
                    frames.push(g.successors(w));
                }
                None => {
                    frames.pop();
                    if let Some(v) = self.path.pop() {
                        self.on_stack[v.index()] = false;
                    }
                }
            }
        }
    }

    fn enter(&mut self, v: NodeIx) {
        self.visited[v.index()] = true;
        self.on_stack[v.index()] = true;
        self.path.push(v);
    }

    fn record_cycle(&mut self, v: NodeIx) {
        let start = self.path.iter().position(|&p| p == v).unwrap_or(0);
        let mut cycle: Cycle = self.path[start..]
            .iter()
            .map(|&ix| self.g.id(ix).to_string())
            .collect();
        cycle.push(self.g.id(v).to_string());
        self.cycles.push(cycle);
    }
}

/// Removes the closing hop (second-to-last -> last id) of every cycle from the adjacency.
///
/// The edge list is left as is, so removed edges are still routed later. Returns the number of
/// adjacencies actually removed; cycles that are too short or name unknown nodes are skipped.
pub fn break_cycles(g: &mut Graph, cycles: &[Cycle]) -> usize {
    let mut removed = 0;
    for cycle in cycles {
        let [.., from, to] = cycle.as_slice() else {
            continue;
        };
        let (Some(u), Some(v)) = (g.node_ix(from), g.node_ix(to)) else {
            continue;
        };
        if g.remove_adjacency(u, v) {
            removed += 1;
        }
    }
    removed
}

/// Detects and breaks cycles until none remain. Returns the total number of removed adjacencies.
pub fn make_acyclic(g: &mut Graph) -> usize {
    let mut removed = 0;
    loop {
        let cycles = detect_cycles(g);
        if cycles.is_empty() {
            return removed;
        }
        let n = break_cycles(g, &cycles);
        if n == 0 {
            // Nothing left to remove; stop rather than loop on the same cycles.
            return removed;
        }
        removed += n;
    }
}
