use thiserror::Error;

/// Problems with the graph or the engine configuration.
///
/// These are caller errors: the engine reports them and never tries to repair
/// the input (no auto-expansion of the color budget, no graph symmetrization).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("graph must have at least one node")]
    EmptyGraph,
    #[error("adjacency matrix is not square: {rows} rows but row {row} has {len} entries")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[error("node {node} has a self-loop")]
    SelfLoop { node: usize },
    #[error("adjacency matrix is not symmetric at ({a}, {b})")]
    Asymmetric { a: usize, b: usize },
    #[error("edge ({a}, {b}) references a node outside 0..{num_nodes}")]
    EdgeOutOfRange {
        a: usize,
        b: usize,
        num_nodes: usize,
    },
    #[error("max_colors must be at least 1")]
    ZeroColors,
    #[error("percent_connected must be in (0, 1), got {0}")]
    InvalidConnectivity(f64),
    #[error("no legal color left for node {node} with max_colors = {max_colors}")]
    ColorsExhausted { node: usize, max_colors: usize },
    #[error("graph with {num_nodes} nodes exceeds the dense matrix limit")]
    TooLarge { num_nodes: usize },
}

/// Why an action was rejected by the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The action is not a color index in `0..max_colors`.
    OutOfRange { max_colors: usize },
    /// An already-colored neighbour uses this color.
    ColorTaken { neighbour: usize },
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::OutOfRange { max_colors } => {
                write!(f, "color must be in 0..{max_colors}")
            }
            InvalidReason::ColorTaken { neighbour } => {
                write!(f, "color already used by neighbour {neighbour}")
            }
        }
    }
}

/// Errors surfaced by [`crate::GraphColoring::step`].
///
/// On any error the input state is left exactly as it was, so the caller may
/// retry with another action.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error("invalid action {action} for node {node}: {reason}")]
    InvalidAction {
        action: usize,
        node: usize,
        reason: InvalidReason,
    },
    #[error("step called after the episode terminated (all {num_nodes} nodes colored)")]
    PostTerminalCall { num_nodes: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
