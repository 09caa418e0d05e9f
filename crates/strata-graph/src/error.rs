#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("edge {from} -> {to} references unknown node: {missing}")]
    MissingEndpoint {
        from: String,
        to: String,
        missing: String,
    },
    #[error("node {id} has an invalid size {width}x{height} (expected finite, positive dimensions)")]
    InvalidSize { id: String, width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;
