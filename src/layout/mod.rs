mod measure;
mod place;
mod routing;
mod types;

use measure::*;
use place::*;

pub use routing::{connector_for, layout_bounds, route_connectors};
pub use types::{Bounds, Connector};

use crate::config::LayoutConfig;
use crate::forest::{Forest, NodeId};
use tracing::debug;

/// Assigns `x`/`y` to every node reachable from the forest's roots.
///
/// Roots are laid out left to right. Each tree is placed at the running
/// cursor, then the cursor moves past the tree's measured width plus
/// `horizontal_spacing`. Detached nodes keep their coordinates.
pub fn compute_layout<T>(forest: &mut Forest<'_, T>, config: &LayoutConfig) {
    let mut widths = vec![0.0_f32; forest.arena_len()];
    let mut current_x = 0.0_f32;
    let roots = forest.roots().to_vec();
    for root in roots {
        let order = forest.preorder(root);
        measure_subtree(forest, &order, config, &mut widths);
        place_subtree(forest, &order, current_x, 0.0, config, &widths);
        current_x += widths[root.index()] + config.horizontal_spacing;
    }
    debug!(
        roots = forest.roots().len(),
        nodes = forest.len(),
        extent = current_x,
        "computed layout"
    );
}

/// Horizontal span needed by `node` and all of its descendants.
pub fn subtree_width<T>(forest: &Forest<'_, T>, node: NodeId, config: &LayoutConfig) -> f32 {
    let order = forest.preorder(node);
    let mut widths = vec![0.0_f32; forest.arena_len()];
    measure_subtree(forest, &order, config, &mut widths);
    widths[node.index()]
}
