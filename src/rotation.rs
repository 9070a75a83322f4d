use nalgebra::{Rotation3, Vector3};

/// Build a rotation from Euler angles in degrees.
///
/// The angles are intrinsic: rotate about X, then about the new Y, then about
/// the new Z. As a matrix that is `Rx * Ry * Rz`.
pub fn euler_degrees(angles: Vector3<f64>) -> Rotation3<f64> {
    let r = angles.map(f64::to_radians);
    Rotation3::from_axis_angle(&Vector3::x_axis(), r.x)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), r.y)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), r.z)
}

/// Inverse of [`euler_degrees`], used to carry world points into a rotated frame.
pub fn inverse_euler_degrees(angles: Vector3<f64>) -> Rotation3<f64> {
    euler_degrees(angles).inverse()
}
