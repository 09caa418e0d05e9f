use crate::graph::GraphError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid layout option `{name}`: {value} (expected a finite, non-negative number)")]
    InvalidOption { name: &'static str, value: f64 },

    #[error("ordering references unknown node: {id}")]
    UnknownNode { id: String },

    #[error("edge {edge} references node without a position: {id}")]
    UnpositionedNode { edge: String, id: String },

    #[error("failed to parse layout options: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
