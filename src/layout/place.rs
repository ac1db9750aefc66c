use super::*;
use crate::config::ChildSpacing;

/// Positions the subtree whose pre-order is `order`, with its root at
/// `(x, y)`.
///
/// The first pass walks top-down and drops every child at the parent's
/// provisional `x` plus the running cursor. The second pass walks bottom-up
/// and recentres each internal node between its first and last child.
pub(super) fn place_subtree<T>(
    forest: &mut Forest<'_, T>,
    order: &[NodeId],
    x: f32,
    y: f32,
    config: &LayoutConfig,
    widths: &[f32],
) {
    let Some(&root) = order.first() else {
        return;
    };
    let node = forest.node_mut(root);
    node.x = x;
    node.y = y;

    for &id in order {
        let (cursor_start, parent_y) = {
            let node = forest.node(id);
            (node.x, node.y)
        };
        let child_y = parent_y + config.vertical_spacing;
        let mut cursor = cursor_start;
        for idx in 0..forest.node(id).children().len() {
            let child = forest.node(id).children()[idx];
            let child_node = forest.node_mut(child);
            child_node.x = cursor;
            child_node.y = child_y;
            cursor += match config.child_spacing {
                ChildSpacing::Slot => config.slot_width(),
                ChildSpacing::Measured => widths[child.index()] + config.horizontal_spacing,
            };
        }
    }

    for &id in order.iter().rev() {
        let node = forest.node(id);
        let (Some(&first), Some(&last)) = (node.children().first(), node.children().last()) else {
            continue;
        };
        let midpoint = (forest.node(first).x + forest.node(last).x) / 2.0;
        forest.node_mut(id).x = midpoint;
    }
}
