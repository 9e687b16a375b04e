use super::*;

pub struct UniformSampler {
    state: rand_pcg::Pcg64Mcg,
    distribution: rand::distributions::Uniform<f64>,
}

impl UniformSampler {
    pub fn new() -> Self {
        Self::from_state(rand_pcg::Pcg64Mcg::from_entropy())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_state(rand_pcg::Pcg64Mcg::seed_from_u64(seed))
    }

    fn from_state(state: rand_pcg::Pcg64Mcg) -> Self {
        Self {
            state,
            distribution: rand::distributions::Uniform::new(0.0, 1.0),
        }
    }

    /// Uniform sample in `[0, 1)`.
    pub fn sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.state)
    }
}

//
// Cube
//

fn cube_uniform(s: f64, t: f64, u: f64) -> Point3 {
    Point3::new(2.0 * s - 1.0, 2.0 * t - 1.0, 2.0 * u - 1.0)
}

pub fn random_triangle(uniform: &mut UniformSampler) -> Triangle {
    let mut vertex = || cube_uniform(uniform.sample(), uniform.sample(), uniform.sample());
    Triangle::new(vertex(), vertex(), vertex())
}

//
// Sphere
//

// Inverting the latitude CDF keeps the samples uniform over the surface,
// sampling latitude directly would cluster them at the poles.
pub fn sphere_uniform(s: f64, t: f64) -> Point3 {
    let lat = f64::acos(2.0 * s - 1.0) - PI / 2.0;
    let lon = TAU * t;
    Point3::new(
        f64::cos(lat) * f64::cos(lon),
        f64::cos(lat) * f64::sin(lon),
        f64::sin(lat),
    )
}

pub fn random_ray(uniform: &mut UniformSampler) -> Ray {
    let origin = sphere_uniform(uniform.sample(), uniform.sample());
    let target = sphere_uniform(uniform.sample(), uniform.sample());
    Ray::between(&origin, &target)
}

//
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_range() {
        let mut uniform = UniformSampler::new_with_seed(0);
        for _ in 0..10_000 {
            let s = uniform.sample();
            assert!((0.0..1.0).contains(&s), "s={s}");
        }
    }

    #[test]
    fn uniform_seeded() {
        let mut a = UniformSampler::new_with_seed(42);
        let mut b = UniformSampler::new_with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.sample().to_bits(), b.sample().to_bits());
        }
    }

    #[test]
    fn sphere_unit_length() {
        let samples = 64;
        for i in 0..=samples {
            for j in 0..=samples {
                let s = f64::from(i) / f64::from(samples);
                let t = f64::from(j) / f64::from(samples);
                let p = sphere_uniform(s, t);
                assert_abs_diff_eq!(p.coords.norm(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn sphere_poles() {
        let north = sphere_uniform(0.0, 0.25);
        assert_abs_diff_eq!(north.z, 1.0, epsilon = 1e-12);
        let equator = sphere_uniform(0.5, 0.0);
        assert_abs_diff_eq!(equator, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        let south = sphere_uniform(1.0, 0.75);
        assert_abs_diff_eq!(south.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn sphere_is_uniform_in_z() {
        // Uniform on the sphere means z is uniform in [-1, 1].
        let mut uniform = UniformSampler::new_with_seed(3);
        let sample_count = 100_000;
        let mut bins = [0_u32; 4];
        for _ in 0..sample_count {
            let p = sphere_uniform(uniform.sample(), uniform.sample());
            let bin = (((p.z + 1.0) / 2.0) * 4.0).clamp(0.0, 3.0) as usize;
            bins[bin] += 1;
        }
        for count in bins {
            let fraction = f64::from(count) / f64::from(sample_count);
            assert_abs_diff_eq!(fraction, 0.25, epsilon = 0.01);
        }
    }

    #[test]
    fn triangle_in_cube() {
        let mut uniform = UniformSampler::new_with_seed(1);
        for _ in 0..1000 {
            let triangle = random_triangle(&mut uniform);
            for p in triangle.positions {
                for c in p.iter() {
                    assert!((-1.0..1.0).contains(c), "c={c}");
                }
            }
        }
    }

    #[test]
    fn ray_unit_direction() {
        let mut uniform = UniformSampler::new_with_seed(2);
        for _ in 0..1000 {
            let ray = random_ray(&mut uniform);
            assert_abs_diff_eq!(ray.origin.coords.norm(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(ray.dir.norm(), 1.0, epsilon = 1e-12);
        }
    }
}
