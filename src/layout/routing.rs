use super::*;

/// Box extent of every node reachable from the roots, or `None` for an empty
/// forest.
pub fn layout_bounds<T>(forest: &Forest<'_, T>, config: &LayoutConfig) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;
    for id in forest.walk() {
        let node = forest.node(id);
        let current = bounds.get_or_insert(Bounds {
            min_x: node.x,
            min_y: node.y,
            max_x: node.x,
            max_y: node.y,
        });
        current.include_box(node.x, node.y, config.node_width, config.node_height);
    }
    bounds
}

pub fn connector_for<T>(
    forest: &Forest<'_, T>,
    parent: NodeId,
    child: NodeId,
    config: &LayoutConfig,
) -> Connector {
    let from = forest.node(parent);
    let to = forest.node(child);
    let half = config.node_width / 2.0;
    let start = (from.x + half, from.y + config.node_height);
    let end = (to.x + half, to.y);
    let mid_y = (start.1 + end.1) / 2.0;
    Connector {
        from: parent,
        to: child,
        points: vec![start, (start.0, mid_y), (end.0, mid_y), end],
    }
}

/// One connector per parent/child edge, in pre-order of the child.
pub fn route_connectors<T>(forest: &Forest<'_, T>, config: &LayoutConfig) -> Vec<Connector> {
    forest
        .walk()
        .into_iter()
        .filter_map(|child| {
            forest
                .node(child)
                .parent()
                .map(|parent| connector_for(forest, parent, child, config))
        })
        .collect()
}
