use nalgebra::Vector3;

/// Trait for any object that can evaluate a signed distance.
///
/// The marcher, normal estimator and shadow/AO estimators are written
/// against this trait so they work on the scene field as well as on
/// ad-hoc fields in tests.
pub trait Sdf: Send + Sync {
    fn evaluate(&self, point: Vector3<f64>) -> f64;
}

impl<S: Sdf + ?Sized> Sdf for &S {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        (**self).evaluate(point)
    }
}

// ---------------------------------------------------------------------------
// Closure-based SDF (for dynamic/user-defined shapes)
// ---------------------------------------------------------------------------

/// An SDF defined by a closure. Useful for custom/dynamic shapes.
pub struct FnSdf<F: Fn(Vector3<f64>) -> f64 + Send + Sync> {
    pub func: F,
}

impl<F: Fn(Vector3<f64>) -> f64 + Send + Sync> FnSdf<F> {
    pub fn new(func: F) -> Self { Self { func } }
}

impl<F: Fn(Vector3<f64>) -> f64 + Send + Sync> Sdf for FnSdf<F> {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        (self.func)(point)
    }
}
