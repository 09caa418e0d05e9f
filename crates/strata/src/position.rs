//! Coordinate assignment and diagram bounds.
//!
//! Ranks are laid out along the main axis (y for `TB`, x for `LR`) at a fixed pitch of
//! `ranksep`; nodes inside a rank are packed along the cross axis, separated by `nodesep`.

use crate::error::{LayoutError, Result};
use crate::graph::Graph;
use crate::options::{LayoutOptions, RankDir};
use crate::{Bounds, OrderingMap, PositionedNode, Positions};

/// Places every node of `ordering`, rank by rank in ascending order.
///
/// Output coordinates are the top-left corners of the node boxes and are never smaller than the
/// configured margins.
pub fn assign_coordinates(
    g: &Graph,
    ordering: &OrderingMap,
    opts: &LayoutOptions,
) -> Result<Positions> {
    let mut positions = Positions::with_capacity(g.node_count());

    for (&rank, ids) in ordering {
        let main = rank as f64 * opts.ranksep + opts.main_margin();
        let mut cross = opts.cross_margin();

        for id in ids {
            let node = g
                .node(id)
                .ok_or_else(|| LayoutError::UnknownNode { id: id.clone() })?;
            let (width, height) = (node.width(), node.height());
            let (x, y, advance) = match opts.rankdir {
                RankDir::TB => (cross, main, width),
                RankDir::LR => (main, cross, height),
            };
            positions.insert(
                id.clone(),
                PositionedNode {
                    x,
                    y,
                    width,
                    height,
                },
            );
            cross += advance + opts.nodesep;
        }
    }

    Ok(positions)
}

impl Bounds {
    /// Far corner of all placed boxes plus the trailing margins. Empty input yields a zero box.
    pub fn of(positions: &Positions, opts: &LayoutOptions) -> Self {
        if positions.is_empty() {
            return Self::default();
        }

        let (max_x, max_y) = positions.values().fold((0.0_f64, 0.0_f64), |(mx, my), n| {
            (mx.max(n.right()), my.max(n.bottom()))
        });
        Self {
            width: max_x + opts.marginx,
            height: max_y + opts.marginy,
        }
    }
}
