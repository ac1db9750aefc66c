use crate::forest::NodeId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub(super) fn include_box(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x + width);
        self.max_y = self.max_y.max(y + height);
    }
}

/// Orthogonal parent-to-child line: down from the parent's bottom centre,
/// across at the midpoint, down into the child's top centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub from: NodeId,
    pub to: NodeId,
    pub points: Vec<(f32, f32)>,
}
