//! Orthogonal edge routes.
//!
//! Each edge gets a 4-point polyline: out of the middle of the source's forward face, across at
//! the main-axis midpoint between the two boxes, and into the middle of the target's facing side.
//! Routes are purely geometric; other nodes are not avoided.

use crate::error::{LayoutError, Result};
use crate::graph::{Graph, NodeIx};
use crate::options::{LayoutOptions, RankDir};
use crate::{EdgePath, EdgePaths, Point, PositionedNode, Positions};

/// Routes every edge of `g` in insertion order, keyed `e0`, `e1`, ...
///
/// Edges removed from the adjacency while breaking cycles are still routed.
pub fn route_edges(g: &Graph, positions: &Positions, opts: &LayoutOptions) -> Result<EdgePaths> {
    let mut paths = EdgePaths::with_capacity(g.edge_count());

    for (i, edge) in g.edges().iter().enumerate() {
        let key = format!("e{i}");
        let lookup = |ix: NodeIx| {
            let id = g.id(ix);
            positions
                .get(id)
                .ok_or_else(|| LayoutError::UnpositionedNode {
                    edge: key.clone(),
                    id: id.to_string(),
                })
        };
        let from = lookup(edge.from)?;
        let to = lookup(edge.to)?;

        let points = route(from, to, opts.rankdir);
        paths.insert(key, EdgePath { points });
    }

    Ok(paths)
}

/// Computes the 4-point route between two placed boxes.
pub fn route(from: &PositionedNode, to: &PositionedNode, rankdir: RankDir) -> Vec<Point> {
    match rankdir {
        RankDir::TB => {
            let mid_y = (from.y + to.y) / 2.0;
            let from_cx = from.x + from.width / 2.0;
            let to_cx = to.x + to.width / 2.0;
            vec![
                Point::new(from_cx, from.bottom()),
                Point::new(from_cx, mid_y),
                Point::new(to_cx, mid_y),
                Point::new(to_cx, to.y),
            ]
        }
        RankDir::LR => {
            let mid_x = (from.x + to.x) / 2.0;
            let from_cy = from.y + from.height / 2.0;
            let to_cy = to.y + to.height / 2.0;
            vec![
                Point::new(from.right(), from_cy),
                Point::new(mid_x, from_cy),
                Point::new(mid_x, to_cy),
                Point::new(to.x, to_cy),
            ]
        }
    }
}
