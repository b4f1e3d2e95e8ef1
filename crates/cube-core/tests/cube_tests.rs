// Integration tests for per-frame draw orchestration, using the recording
// `Vec<DrawCall>` target in place of a GPU.

use cube_core::*;
use glam::{Mat4, Vec3};

fn test_mvp() -> Mat4 {
    Camera::looking_at_box(16.0 / 9.0).mvp()
}

#[test]
fn object_draw_uses_full_palette_with_depth_writes() {
    let cube = ShadowedCube::new(1.0, 1.0, 0.5);
    let mvp = test_mvp();
    let mut calls: Vec<DrawCall> = Vec::new();
    cube.draw_object(&mut calls, &mvp);
    assert_eq!(
        calls,
        vec![DrawCall {
            matrix: mvp,
            palette: PaletteKind::Full,
            depth_write: true,
        }]
    );
    // drawing the object never moves the light
    assert_eq!(cube.orbit().angle_deg, 0.0);
}

#[test]
fn shadow_draw_advances_light_before_projecting() {
    let mut cube = ShadowedCube::new(1.0, 1.0, 0.5);
    let mvp = test_mvp();
    let mut calls: Vec<DrawCall> = Vec::new();
    cube.draw_shadow(&mut calls, &mvp);

    let (_, advanced) = advance_light_orbit(OrbitState::default());
    let expected = mvp * shadow_matrix(Plane::from(GROUND_PLANE), advanced);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].palette, PaletteKind::Black);
    assert!(!calls[0].depth_write);
    assert!(calls[0].matrix.abs_diff_eq(expected, 1e-6));
    assert_eq!(cube.light_position(), advanced);
}

#[test]
fn consecutive_frames_use_fresh_light_positions() {
    let mut cube = ShadowedCube::new(1.0, 1.0, 0.5);
    let mvp = test_mvp();
    let mut calls: Vec<DrawCall> = Vec::new();
    for _ in 0..3 {
        cube.draw_object(&mut calls, &mvp);
        cube.draw_shadow(&mut calls, &mvp);
    }
    assert_eq!(calls.len(), 6);
    assert!((cube.orbit().angle_deg - 3.0).abs() < 1e-5);
    let shadows: Vec<&DrawCall> = calls.iter().filter(|c| !c.depth_write).collect();
    assert_eq!(shadows.len(), 3);
    assert_ne!(shadows[0].matrix, shadows[1].matrix);
    assert_ne!(shadows[1].matrix, shadows[2].matrix);
    // object draws are stable frame to frame
    assert!(calls.iter().filter(|c| c.depth_write).all(|c| c.matrix == mvp));
}

#[test]
fn shadow_of_box_lies_on_ground_in_world_space() {
    let mut cube = ShadowedCube::new(1.0, 1.0, 0.5);
    let mut calls: Vec<DrawCall> = Vec::new();
    cube.draw_shadow(&mut calls, &Mat4::IDENTITY);
    let m = calls[0].matrix;
    for v in cube.geometry().vertices {
        let q = m.project_point3(Vec3::from_array(v));
        assert!((q.z - 0.1).abs() < 1e-2, "{v:?} -> {q:?}");
    }
}

#[test]
fn from_config_takes_ground_and_orbit() {
    let config = SceneConfig {
        box_size: [2.0, 1.0, 0.25],
        initial_angle_deg: 90.0,
        ..SceneConfig::default()
    };
    let cube = ShadowedCube::from_config(&config);
    assert_eq!(cube.ground(), Plane::from(GROUND_PLANE));
    assert_eq!(cube.orbit().angle_deg, 90.0);
    assert_eq!(cube.geometry().vertices[6], [10000.0, 5000.0, 2500.0]);
}
