use super::*;

//
// Linear algebra
//

pub use na::vector;

pub type Vec3 = na::Vector3<f64>;

pub type Point3 = na::Point3<f64>;

pub type Normal = na::UnitVector3<f64>;

#[macro_export]
macro_rules! normal {
    ($v:expr) => {
        na::Unit::new_normalize($v)
    };

    ($x:expr, $y:expr, $z:expr) => {
        na::Unit::new_normalize(na::Vector3::<f64>::new($x, $y, $z))
    };
}

//
// Conversions
//

// Fixture files store plain `[x, y, z]` sequences.

pub fn point_to_array(p: &Point3) -> [f64; 3] {
    [p.x, p.y, p.z]
}

pub fn normal_to_array(n: &Normal) -> [f64; 3] {
    [n.x, n.y, n.z]
}

pub fn point_from_array([x, y, z]: [f64; 3]) -> Point3 {
    Point3::new(x, y, z)
}

/// Directions read back from disk were normalized before they were written,
/// renormalizing would perturb the last bits.
pub fn normal_from_array([x, y, z]: [f64; 3]) -> Normal {
    Normal::new_unchecked(vector![x, y, z])
}

//
// Tests
//
