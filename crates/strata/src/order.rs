//! Ordering of nodes within each rank.
//!
//! The default ordering is lexical by node id, which is stable and cheap but does nothing about
//! crossings. [`OrderStrategy::Barycenter`] refines that starting point with alternating
//! barycenter sweeps and keeps the ordering with the fewest crossings.

use crate::graph::{Graph, NodeIx};
use crate::{OrderingMap, RankMap};
use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

/// Number of barycenter sweeps, alternating down and up.
const SWEEPS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStrategy {
    #[default]
    Lexical,
    Barycenter,
}

/// Buckets nodes by rank and orders each bucket lexically by id.
pub fn order_nodes(g: &Graph, ranks: &RankMap) -> OrderingMap {
    order_nodes_with(g, ranks, OrderStrategy::Lexical)
}

pub fn order_nodes_with(g: &Graph, ranks: &RankMap, strategy: OrderStrategy) -> OrderingMap {
    let mut ordering = OrderingMap::new();
    for (id, &r) in ranks {
        ordering.entry(r).or_default().push(id.clone());
    }
    for layer in ordering.values_mut() {
        layer.sort();
    }

    match strategy {
        OrderStrategy::Lexical => ordering,
        OrderStrategy::Barycenter => barycenter_sweeps(g, ranks, ordering),
    }
}

fn barycenter_sweeps(g: &Graph, ranks: &RankMap, initial: OrderingMap) -> OrderingMap {
    let layers: Vec<usize> = initial.keys().copied().collect();
    if layers.len() < 2 {
        return initial;
    }

    let mut best_cc = cross_count(g, ranks, &initial);
    let mut best = initial.clone();
    let mut current = initial;
    for i in 0..SWEEPS {
        if best_cc == 0 {
            break;
        }
        let downward = i % 2 == 0;
        if downward {
            for pair in layers.windows(2) {
                reorder_layer(g, &mut current, pair[0], pair[1], Side::Predecessors);
            }
        } else {
            for pair in layers.windows(2).rev() {
                reorder_layer(g, &mut current, pair[1], pair[0], Side::Successors);
            }
        }

        let cc = cross_count(g, ranks, &current);
        if cc < best_cc {
            best_cc = cc;
            best = current.clone();
        }
    }
    tracing::trace!(crossings = best_cc, "barycenter ordering");
    best
}

#[derive(Clone, Copy)]
enum Side {
    Predecessors,
    Successors,
}

/// Sorts the `free` rank by the mean position of each node's neighbours in the `fixed` rank.
///
/// Nodes without neighbours in `fixed` keep their slot; the others are stably sorted into the
/// remaining slots.
fn reorder_layer(g: &Graph, ordering: &mut OrderingMap, fixed: usize, free: usize, side: Side) {
    let Some(fixed_layer) = ordering.get(&fixed) else {
        return;
    };
    let pos: HashMap<NodeIx, usize> = fixed_layer
        .iter()
        .enumerate()
        .filter_map(|(i, id)| Some((g.node_ix(id)?, i)))
        .collect();

    let Some(layer) = ordering.get_mut(&free) else {
        return;
    };

    let barycenters: Vec<Option<f64>> = layer
        .iter()
        .map(|id| {
            let v = g.node_ix(id)?;
            let neighbours: Vec<usize> = match side {
                Side::Predecessors => g.predecessors(v).filter_map(|u| pos.get(&u).copied()).collect(),
                Side::Successors => g.successors(v).filter_map(|u| pos.get(&u).copied()).collect(),
            };
            if neighbours.is_empty() {
                return None;
            }
            Some(neighbours.iter().sum::<usize>() as f64 / neighbours.len() as f64)
        })
        .collect();

    let mut movable: Vec<(f64, usize)> = barycenters
        .iter()
        .enumerate()
        .filter_map(|(i, bc)| bc.map(|bc| (bc, i)))
        .collect();
    movable.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut sorted = movable.into_iter();
    let reordered: Vec<String> = barycenters
        .iter()
        .enumerate()
        .map(|(i, bc)| match bc {
            None => layer[i].clone(),
            Some(_) => sorted
                .next()
                .map(|(_, src)| layer[src].clone())
                .unwrap_or_else(|| layer[i].clone()),
        })
        .collect();
    *layer = reordered;
}

/// Counts crossings between edges that connect consecutive ranks.
///
/// Only adjacencies whose endpoints sit exactly one rank apart contribute. Uses the accumulator
/// tree from Barth, Jünger and Mutzel, "Simple and Efficient Bilayer Cross Counting".
pub fn cross_count(g: &Graph, ranks: &RankMap, ordering: &OrderingMap) -> usize {
    let mut cc = 0;
    for (&r, north) in ordering {
        let Some(south) = ordering.get(&(r + 1)) else {
            continue;
        };
        cc += two_layer_cross_count(g, ranks, north, south, r + 1);
    }
    cc
}

fn two_layer_cross_count(
    g: &Graph,
    ranks: &RankMap,
    north: &[String],
    south: &[String],
    south_rank: usize,
) -> usize {
    if south.is_empty() {
        return 0;
    }

    let south_pos: HashMap<&str, usize> = south
        .iter()
        .enumerate()
        .map(|(i, v)| (v.as_str(), i))
        .collect();

    let mut south_entries: Vec<usize> = Vec::new();
    for v in north {
        let Some(v_ix) = g.node_ix(v) else {
            continue;
        };
        let mut entries: Vec<usize> = g
            .successors(v_ix)
            .filter_map(|w| {
                let id = g.id(w);
                if ranks.get(id) != Some(&south_rank) {
                    return None;
                }
                south_pos.get(id).copied()
            })
            .collect();
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }
    cc
}
