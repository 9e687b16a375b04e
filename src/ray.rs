use super::*;

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Point3,
    pub dir: Normal,
}

impl Ray {
    /// Ray starting at `origin` and pointing at `target`.
    pub fn between(origin: &Point3, target: &Point3) -> Self {
        Self {
            origin: *origin,
            dir: na::Unit::new_normalize(target - origin),
        }
    }
}
