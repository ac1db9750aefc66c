use super::*;

/// Fills `widths` (indexed by arena slot) for every node in `order`, which
/// must be a pre-order so that walking it backwards visits children first.
pub(super) fn measure_subtree<T>(
    forest: &Forest<'_, T>,
    order: &[NodeId],
    config: &LayoutConfig,
    widths: &mut [f32],
) {
    for &id in order.iter().rev() {
        let node = forest.node(id);
        widths[id.index()] = if node.is_leaf() {
            config.node_width
        } else {
            let total: f32 = node
                .children()
                .iter()
                .map(|child| widths[child.index()] + config.horizontal_spacing)
                .sum();
            if total == 0.0 {
                0.0
            } else {
                total - config.horizontal_spacing
            }
        };
    }
}
