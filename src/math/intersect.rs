use glam::DVec3;

/// A ray `origin + t * direction`. The direction must be normalized; the
/// intersection routines rely on it to keep the quadratic coefficient at 1.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
}

/// Solves `a*x^2 + b*x + c = 0` over the reals.
///
/// Uses the quadrature form: `q` takes the sign of `b` so that the large
/// root never comes from subtracting nearly equal values, then the second
/// root is recovered as `c / q`. Returns two roots for a positive
/// discriminant, one root at exactly zero, none otherwise.
pub fn solve_quadratic_equation(a: f64, b: f64, c: f64) -> Vec<f64> {
    let delta = b * b - 4.0 * a * c;
    if delta > 0.0 {
        let q = if b > 0.0 {
            -0.5 * (b + delta.sqrt())
        } else {
            -0.5 * (b - delta.sqrt())
        };
        vec![q / a, c / q]
    } else if delta == 0.0 {
        vec![-b / (2.0 * a)]
    } else {
        Vec::new()
    }
}

/// Returns the world-space points where a ray hits a sphere.
///
/// Intersection parameters behind the ray origin (`t < 0`) are discarded;
/// this intersects a ray, not a line.
pub fn ray_intersect_sphere(ray: &Ray, sphere: &Sphere) -> Vec<DVec3> {
    let to_origin = ray.origin - sphere.center;
    let a = 1.0;
    let b = 2.0 * ray.direction.dot(to_origin);
    let c = to_origin.dot(to_origin) - sphere.radius * sphere.radius;

    solve_quadratic_equation(a, b, c)
        .into_iter()
        .filter(|&t| t >= 0.0)
        .map(|t| ray.origin + ray.direction * t)
        .collect()
}
