use nalgebra::{Vector2, Vector3};

/// Signed distance to a sphere.
/// Negative inside, zero on surface, positive outside.
pub fn sdf_sphere(point: Vector3<f64>, center: Vector3<f64>, radius: f64) -> f64 {
    (point - center).norm() - radius
}

/// Signed distance to an axis-aligned box.
/// `half_extents` is the half-size in each dimension.
/// Exact outside, bounded by the nearest face inside.
pub fn sdf_box(point: Vector3<f64>, center: Vector3<f64>, half_extents: Vector3<f64>) -> f64 {
    let d = (point - center).abs() - half_extents;
    let outside = d.map(|c| c.max(0.0)).norm();
    let inside = d.max().min(0.0);
    outside + inside
}

/// Signed distance to a capped cylinder whose axis is Y.
/// `half_height` is measured from `center` to each cap.
pub fn sdf_cylinder(
    point: Vector3<f64>,
    center: Vector3<f64>,
    radius: f64,
    half_height: f64,
) -> f64 {
    let p = point - center;
    let d = Vector2::new(p.xz().norm() - radius, p.y.abs() - half_height);
    d.max().min(0.0) + d.map(|c| c.max(0.0)).norm()
}

/// Signed distance to a torus centered at `center`, lying in the XZ plane.
/// `major_radius` is the distance from center to the tube center.
/// `minor_radius` is the tube radius.
pub fn sdf_torus(
    point: Vector3<f64>,
    center: Vector3<f64>,
    major_radius: f64,
    minor_radius: f64,
) -> f64 {
    let p = point - center;
    let q = Vector2::new(p.xz().norm() - major_radius, p.y);
    q.norm() - minor_radius
}
