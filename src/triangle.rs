use super::*;

type Position = Point3;

/// Vertex order defines the winding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub positions: [Position; 3],
}

impl Triangle {
    pub fn new(v0: Position, v1: Position, v2: Position) -> Self {
        Self {
            positions: [v0, v1, v2],
        }
    }

    /// Edges `v0v1` and `v0v2`.
    pub fn edges(&self) -> (Vec3, Vec3) {
        (
            self.positions[1] - self.positions[0],
            self.positions[2] - self.positions[0],
        )
    }
}
