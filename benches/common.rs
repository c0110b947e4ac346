use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};
use spherast::{Rgb8, Sphere};

pub const SPHERE_COUNT: usize = 2000;

/// Deterministic sphere field matching the demo's distribution, so bench
/// numbers stay comparable across runs.
pub fn make_spheres() -> Vec<Sphere> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..SPHERE_COUNT)
        .map(|_| {
            Sphere::new(
                Vec3::new(
                    rng.random_range(-600.0..600.0),
                    rng.random_range(-400.0..400.0),
                    rng.random_range(800.0..1600.0),
                ),
                8.0,
                Rgb8::new(
                    rng.random_range(150..200),
                    rng.random_range(150..200),
                    rng.random_range(150..200),
                ),
            )
        })
        .collect()
}
