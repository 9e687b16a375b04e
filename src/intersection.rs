use super::*;

/// Determinants smaller than this are treated as parallel.
pub const EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub dist: f64,
    pub u: f64,
    pub v: f64,
}

// Implementation based on "Fast, Minimum Storage Ray/Triangle Intersection".
// https://doi.org/10.1080/10867651.1997.10487468
//
// Both windings are accepted.
pub fn ray_triangle_hit(ray: &Ray, triangle: &Triangle) -> Option<Hit> {
    // Unpack triangle.
    let v0 = triangle.positions[0];
    let (v0v1, v0v2) = triangle.edges();

    // Calculate determinant.
    let pvec = ray.dir.cross(&v0v2);
    let det = v0v1.dot(&pvec);
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    // Calculate first barycentric coordinate.
    let tvec = ray.origin - v0;
    let u = tvec.dot(&pvec) * inv_det;
    if u < 0.0 || u > 1.0 {
        return None;
    }

    // Calculate second barycentric coordinate.
    let qvec = tvec.cross(&v0v1);
    let v = ray.dir.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    // Calculate hit distance, reject hits behind the origin.
    let dist = v0v2.dot(&qvec) * inv_det;
    if dist < 0.0 {
        return None;
    }

    Some(Hit { dist, u, v })
}

//
// Tests
//
