use dagkit_core::config::LayoutConfig;
use dagkit_core::{Direction, LayoutAdapter, LayoutError, LayoutInput, Position, Positions};
use dagkit_layout::graphlib::GraphOptions;
use dagkit_layout::{EdgeLabel, LayoutGraph, LayoutOptions, NodeLabel, RankDir};

/// Layered layout with fixed-size node boxes.
///
/// The engine reports node centres; positions handed back to the store are top-left corners.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredLayout {
    config: LayoutConfig,
}

impl LayeredLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    fn options(&self, direction: Direction) -> LayoutOptions {
        LayoutOptions {
            rankdir: match direction {
                Direction::TopToBottom => RankDir::TB,
                Direction::LeftToRight => RankDir::LR,
            },
            nodesep: self.config.nodesep,
            ranksep: self.config.ranksep,
            order_iterations: self.config.order_iterations,
        }
    }
}

impl LayoutAdapter for LayeredLayout {
    fn layout(&self, input: &LayoutInput<'_>) -> Result<Positions, LayoutError> {
        let mut g = LayoutGraph::new(GraphOptions {
            multigraph: true,
            self_loops: true,
        });
        for node in &input.nodes {
            g.set_node(
                node.id.clone(),
                NodeLabel::sized(self.config.node_width, self.config.node_height),
            );
        }
        for edge in &input.edges {
            g.set_edge(
                edge.id.clone(),
                edge.source.clone(),
                edge.target.clone(),
                EdgeLabel::default(),
            )
            .map_err(|err| LayoutError::new(err.to_string()))?;
        }

        dagkit_layout::layout(&mut g, &self.options(input.direction))
            .map_err(|err| LayoutError::new(err.to_string()))?;

        let mut positions = Positions::with_capacity(g.node_count());
        for (id, n) in g.nodes() {
            let (Some(x), Some(y)) = (n.x, n.y) else {
                return Err(LayoutError::new(format!("no coordinates assigned to {id}")));
            };
            positions.insert(
                id.to_string(),
                Position::new(x - n.width / 2.0, y - n.height / 2.0),
            );
        }
        tracing::trace!(nodes = positions.len(), "layered layout finished");
        Ok(positions)
    }
}
