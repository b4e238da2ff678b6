use crate::color::{self, Color};
use crate::graph::Graph;
use std::sync::Arc;

/// Authoritative data of one episode.
///
/// A `State` is only created by [`crate::GraphColoring::reset`] and only
/// replaced by [`crate::GraphColoring::step`], which returns a fresh value and
/// never touches its input. The graph is shared between the states of an
/// episode since it never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    graph: Arc<Graph>,
    colors: Vec<Color>,
    current_node: usize,
}

impl State {
    pub(crate) fn initial(graph: Arc<Graph>) -> Self {
        let colors = vec![Color::Unassigned; graph.num_nodes()];
        Self {
            graph,
            colors,
            current_node: 0,
        }
    }

    /// Colors the current node and moves on to the next one.
    pub(crate) fn advance(&self, color: usize) -> Self {
        let mut colors = self.colors.clone();
        colors[self.current_node] = Color::Assigned(color);
        Self {
            graph: Arc::clone(&self.graph),
            colors,
            current_node: self.current_node + 1,
        }
    }

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub(crate) fn shared_graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Index of the node to be colored next; equals `num_nodes` once every
    /// node has a color.
    #[must_use]
    pub fn current_node_index(&self) -> usize {
        self.current_node
    }

    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.current_node == self.num_nodes()
    }

    /// Number of distinct colors present in the assignment.
    #[must_use]
    pub fn num_colors_used(&self) -> usize {
        color::count_distinct(&self.colors)
    }

    /// `true` when no edge joins two nodes with the same assigned color.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        (0..self.num_nodes()).all(|a| {
            let Some(color) = self.colors[a].index() else {
                return true;
            };
            self.graph
                .neighbours(a)
                .all(|b| self.colors[b] != Color::Assigned(color))
        })
    }
}
