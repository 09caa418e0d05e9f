#![forbid(unsafe_code)]

//! Layered (Sugiyama-style) graph layout.
//!
//! Given a directed graph of sized nodes, `strata` breaks cycles, assigns every node to a rank,
//! orders nodes within each rank, places them on a grid of ranks and routes every edge as an
//! orthogonal polyline between the facing node borders.
//!
//! The usual entry point is [`LayoutEngine`]. The individual stages are public as well, so they
//! can be driven (and tested) one at a time:
//!
//! ```
//! use strata::{LayoutEngine, LayoutOptions};
//! use strata::graph::Size;
//!
//! let mut engine = LayoutEngine::new(LayoutOptions::default())?;
//! engine.add_node("api", Size::new(120.0, 40.0))?;
//! engine.add_node("db", Size::new(80.0, 40.0))?;
//! engine.add_edge("api", "db")?;
//!
//! let result = engine.layout()?;
//! assert_eq!(result.nodes["api"].y, 20.0);
//! assert_eq!(result.nodes["db"].y, 70.0);
//! assert_eq!(result.edges["e0"].points.len(), 4);
//! # Ok::<(), strata::LayoutError>(())
//! ```

pub use strata_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod acyclic;
pub mod engine;
pub mod error;
pub mod options;
pub mod order;
pub mod position;
pub mod rank;
pub mod route;

pub use engine::{LayoutEngine, LayoutResult, layout_graph};
pub use error::{LayoutError, Result};
pub use options::{LayoutOptions, RankDir};
pub use order::OrderStrategy;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Node id -> 0-based rank.
pub type RankMap = IndexMap<String, usize>;

/// Rank -> node ids in placement order. Every ranked node appears exactly once.
pub type OrderingMap = BTreeMap<usize, Vec<String>>;

/// Node id -> placed box.
pub type Positions = IndexMap<String, PositionedNode>;

/// Synthetic edge id (`e<index>`) -> route.
pub type EdgePaths = IndexMap<String, EdgePath>;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node box with its top-left corner at (`x`, `y`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PositionedNode {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgePath {
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}
