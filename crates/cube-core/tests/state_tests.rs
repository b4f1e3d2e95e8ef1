// Host-side tests for constants, camera and scene configuration.

use cube_core::*;
use glam::Vec3;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SCALE > 0.0);
    assert!(LIGHT_RADIUS_FACTOR > 0.0);
    assert!(LIGHT_ORBIT_STEP_DEG > 0.0 && LIGHT_ORBIT_STEP_DEG < 360.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(DRAW_SLOTS >= 2);
    assert_eq!(BOX_INDICES.len(), BOX_INDEX_COUNT);
    assert_eq!(GROUND_PLANE, [0.0, 0.0, 1.0, -0.1]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_box_stays_below_the_light() {
    assert!(DEFAULT_BOX_SIZE[2] * SCALE < SCALE);
    assert!(SceneConfig::default().validate().is_ok());
}

#[test]
fn shader_exposes_expected_interface() {
    assert!(CUBE_WGSL.contains("@location(0) position: vec3<f32>"));
    assert!(CUBE_WGSL.contains("@location(1) color: vec4<f32>"));
    assert!(CUBE_WGSL.contains("mvp: mat4x4<f32>"));
    assert!(CUBE_WGSL.contains("fn vs_main"));
    assert!(CUBE_WGSL.contains("fn fs_main"));
    assert_eq!(CUBE_SHADER_VERSION, 1);
}

#[test]
fn camera_centers_its_target() {
    let camera = Camera::looking_at_box(4.0 / 3.0);
    let ndc = camera.mvp().project_point3(camera.target);
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn camera_sees_the_whole_default_box() {
    let camera = Camera::looking_at_box(16.0 / 9.0);
    let geometry = build_box(
        DEFAULT_BOX_SIZE[0],
        DEFAULT_BOX_SIZE[1],
        DEFAULT_BOX_SIZE[2],
    );
    for v in geometry.vertices {
        let ndc = camera.mvp().project_point3(Vec3::from_array(v));
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "{v:?} -> {ndc:?}");
        assert!((0.0..=1.0).contains(&ndc.z));
    }
}

#[test]
fn validate_rejects_bad_dimensions() {
    for (i, name) in ["width", "height", "depth"].into_iter().enumerate() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mut config = SceneConfig::default();
            config.box_size[i] = bad;
            match config.validate() {
                Err(SceneError::InvalidDimension { name: n, .. }) => assert_eq!(n, name),
                other => panic!("{name}={bad}: expected InvalidDimension, got {other:?}"),
            }
        }
    }
}

#[test]
fn validate_rejects_box_taller_than_light() {
    let config = SceneConfig {
        box_size: [1.0, 1.0, 1.0],
        ..SceneConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(SceneError::LightBelowBoxTop {
            light_height: SCALE,
            box_top: SCALE,
        })
    );
}

#[test]
fn config_orbit_uses_radius_factor_and_wraps_initial_angle() {
    let config = SceneConfig {
        light_radius_factor: 3.0,
        orbit_step_deg: 2.0,
        initial_angle_deg: 370.0,
        ..SceneConfig::default()
    };
    let orbit = config.orbit();
    assert_eq!(orbit.radius, 3.0 * SCALE);
    assert_eq!(orbit.step_deg, 2.0);
    assert!((orbit.angle_deg - 10.0).abs() < 1e-4);
    assert_eq!(orbit.height, SCALE);
}

#[test]
fn validate_rejects_bad_orbit_settings() {
    let cases: [(&str, fn(&mut SceneConfig, f32), &[f32]); 3] = [
        (
            "orbit_step_deg",
            |c, v| c.orbit_step_deg = v,
            &[f32::NAN, f32::INFINITY, 0.0, -1.0, 360.0, 720.0],
        ),
        (
            "light_radius_factor",
            |c, v| c.light_radius_factor = v,
            &[f32::NAN, f32::NEG_INFINITY, 0.0, -2.0],
        ),
        (
            "initial_angle_deg",
            |c, v| c.initial_angle_deg = v,
            &[f32::NAN, f32::INFINITY],
        ),
    ];
    for (name, set, values) in cases {
        for &bad in values {
            let mut config = SceneConfig::default();
            set(&mut config, bad);
            match config.validate() {
                Err(SceneError::InvalidOrbit { name: n, .. }) => assert_eq!(n, name),
                other => panic!("{name}={bad}: expected InvalidOrbit, got {other:?}"),
            }
        }
    }
}

#[test]
fn negative_start_angle_wraps_into_first_turn() {
    let config = SceneConfig {
        initial_angle_deg: -30.0,
        ..SceneConfig::default()
    };
    assert!(config.validate().is_ok());
    assert_eq!(config.orbit().angle_deg, 330.0);
    let (next, _) = advance_light_orbit(config.orbit());
    assert_eq!(next.angle_deg, 331.0);
}

#[test]
fn validated_config_yields_finite_shadow_matrix() {
    let config = SceneConfig {
        orbit_step_deg: 5.0,
        light_radius_factor: 1.5,
        ..SceneConfig::default()
    };
    assert!(config.validate().is_ok());
    let (_, light) = advance_light_orbit(config.orbit());
    let m = shadow_matrix(config.ground, light);
    assert!(m.is_finite());
}
