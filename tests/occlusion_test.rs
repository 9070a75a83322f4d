use approx::assert_relative_eq;
use nalgebra::Vector3;
use smoothmarch::config::demo_scene;
use smoothmarch::shape::FnSdf;
use smoothmarch::{
    ambient_occlusion, soft_shadow, LightingConfig, RayMarchSettings, SceneField,
};

fn slab_overhead() -> FnSdf<impl Fn(Vector3<f64>) -> f64 + Send + Sync> {
    // Solid slab occupying 1 <= y <= 2.
    FnSdf::new(|p: Vector3<f64>| (p.y - 1.5).abs() - 0.5)
}

#[test]
fn occluded_point_bottoms_out_at_shadow_floor() {
    let lighting = LightingConfig { shadow_intensity: 0.8, ..LightingConfig::default() };
    let s = soft_shadow(
        Vector3::zeros(),
        Vector3::new(0.0, 1.0, 0.0),
        0.02,
        10.0,
        &slab_overhead(),
        &RayMarchSettings::default(),
        &lighting,
    );
    assert_relative_eq!(s, 0.2, epsilon = 1e-9);
}

#[test]
fn zero_intensity_disables_darkening() {
    let lighting = LightingConfig { shadow_intensity: 0.0, ..LightingConfig::default() };
    let s = soft_shadow(
        Vector3::zeros(),
        Vector3::new(0.0, 1.0, 0.0),
        0.02,
        10.0,
        &slab_overhead(),
        &RayMarchSettings::default(),
        &lighting,
    );
    assert_eq!(s, 1.0);
}

#[test]
fn light_before_occluder_is_unshadowed() {
    let lighting = LightingConfig::default();
    // The light sits below the slab, so the march stops before reaching it.
    let s = soft_shadow(
        Vector3::zeros(),
        Vector3::new(0.0, 1.0, 0.0),
        0.02,
        0.3,
        &slab_overhead(),
        &RayMarchSettings::default(),
        &lighting,
    );
    assert_eq!(s, 1.0);
}

#[test]
fn penumbra_is_partial() {
    // A ray skimming past a sphere edge is neither lit nor fully shadowed.
    let lighting = LightingConfig { shadow_intensity: 1.0, shadow_softness: 4.0, ..LightingConfig::default() };
    let sphere = FnSdf::new(|p: Vector3<f64>| (p - Vector3::new(0.0, 1.0, 0.1)).norm() - 0.08);
    let s = soft_shadow(
        Vector3::zeros(),
        Vector3::new(0.0, 1.0, 0.0),
        0.02,
        3.0,
        &sphere,
        &RayMarchSettings::default(),
        &lighting,
    );
    assert!(s > 0.0 && s < 1.0, "shadow {s}");
}

#[test]
fn shadow_and_ao_stay_in_range_over_demo_scene() {
    let settings = RayMarchSettings::default();
    let lighting = LightingConfig { shadow_intensity: 0.65, ..LightingConfig::default() };
    let field = SceneField::new(&demo_scene(), &settings).unwrap();
    let floor = 1.0 - lighting.shadow_intensity;
    let dirs = [
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0).normalize(),
        Vector3::new(-0.3, 0.4, 0.8).normalize(),
        Vector3::new(0.0, -1.0, 0.0),
    ];
    for i in -4..=4 {
        for j in -3..=3 {
            let p = Vector3::new(i as f64 * 0.6, j as f64 * 0.5, 0.25);
            for d in dirs {
                let s = soft_shadow(p, d, 0.02, 20.0, &field, &settings, &lighting);
                assert!(s >= floor - 1e-12 && s <= 1.0, "shadow {s} at {p:?}");
                let ao = ambient_occlusion(p, d, &field, &lighting);
                assert!(ao <= 1.0 && ao >= 0.0, "ao {ao} at {p:?}");
            }
        }
    }
}

#[test]
fn open_floor_is_unoccluded() {
    let floor = FnSdf::new(|p: Vector3<f64>| p.y);
    let ao = ambient_occlusion(Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0), &floor, &LightingConfig::default());
    assert_relative_eq!(ao, 1.0, epsilon = 1e-12);
}

#[test]
fn inside_corner_is_darker() {
    let corner = FnSdf::new(|p: Vector3<f64>| p.y.min(p.x));
    let lighting = LightingConfig::default();
    let up = Vector3::new(0.0, 1.0, 0.0);
    let open = ambient_occlusion(Vector3::new(5.0, 0.0, 0.0), up, &corner, &lighting);
    let tucked = ambient_occlusion(Vector3::new(0.05, 0.0, 0.0), up, &corner, &lighting);
    assert!(tucked < open);
}

fn constant_field_shadow(h: f64, softness: f64, intensity: f64) -> f64 {
    let lighting = LightingConfig {
        shadow_softness: softness,
        shadow_intensity: intensity,
        ..LightingConfig::default()
    };
    soft_shadow(
        Vector3::zeros(),
        Vector3::new(0.0, 1.0, 0.0),
        0.02,
        10.0,
        &FnSdf::new(move |_| h),
        &RayMarchSettings::default(),
        &lighting,
    )
}

#[test]
fn penumbra_follows_step_sequence() {
    // Constant field: all 16 steps run and the last sample, at the largest t,
    // sets the penumbra.
    // Unclamped step of 0.1: last t = 0.02 + 15 * 0.1.
    assert_relative_eq!(constant_field_shadow(0.1, 8.0, 1.0), 0.8 / 1.52, epsilon = 1e-9);
    // Step capped at 0.2: last t = 0.02 + 15 * 0.2.
    assert_relative_eq!(constant_field_shadow(0.5, 1.0, 1.0), 0.5 / 3.02, epsilon = 1e-9);
    // Step raised to 0.02: last t = 0.02 + 15 * 0.02.
    assert_relative_eq!(constant_field_shadow(0.015, 8.0, 1.0), 0.12 / 0.32, epsilon = 1e-9);
}

#[test]
fn shadow_intensity_clamps_penumbra() {
    // Below the floor the result is the floor itself.
    assert_relative_eq!(constant_field_shadow(0.5, 1.0, 0.5), 0.5, epsilon = 1e-12);
    // Above the floor the penumbra passes through untouched.
    assert_relative_eq!(constant_field_shadow(0.1, 8.0, 0.5), 0.8 / 1.52, epsilon = 1e-9);
}

#[test]
fn grazing_occluder_penumbra_is_clamped_to_floor() {
    let sphere = FnSdf::new(|p: Vector3<f64>| (p - Vector3::new(0.0, 1.0, 0.1)).norm() - 0.08);
    let shadow_with = |shadow_intensity: f64| {
        let lighting = LightingConfig {
            shadow_intensity,
            shadow_softness: 4.0,
            ..LightingConfig::default()
        };
        soft_shadow(
            Vector3::zeros(),
            Vector3::new(0.0, 1.0, 0.0),
            0.02,
            3.0,
            &sphere,
            &RayMarchSettings::default(),
            &lighting,
        )
    };
    let raw = shadow_with(1.0);
    assert!(raw > 0.0 && raw < 0.5, "raw penumbra {raw}");
    assert_relative_eq!(shadow_with(0.5), 0.5, epsilon = 1e-12);
    assert_relative_eq!(shadow_with(0.9), raw.max(0.1), epsilon = 1e-12);
}
