//! Orbiting 3D camera around the cube.
//! Rotates with arrow keys/WASD or a secondary-button mouse drag, zooms
//! with W/S or the scroll wheel. The camera always looks at the origin.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::utils::config::GameConfig;
use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_MAX_PITCH, CAMERA_3D_WHEEL_LINE_ZOOM, CAMERA_3D_WHEEL_PIXEL_ZOOM,
};

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (orbit_keyboard_inputs, orbit_mouse_drag, zoom_scroll_wheel),
        );
    }
}

/// Apply yaw/pitch deltas, keeping the camera on its orbit sphere.
pub fn apply_orbit(transform: &mut Transform, yaw_delta: f32, pitch_delta: f32) {
    let radius = transform.translation.length().max(f32::EPSILON);
    let mut yaw = transform.translation.x.atan2(transform.translation.z);
    let mut pitch = (transform.translation.y / radius).clamp(-1.0, 1.0).asin();

    yaw += yaw_delta;
    pitch = (pitch + pitch_delta).clamp(-CAMERA_3D_MAX_PITCH, CAMERA_3D_MAX_PITCH);

    transform.translation = Vec3::new(
        radius * pitch.cos() * yaw.sin(),
        radius * pitch.sin(),
        radius * pitch.cos() * yaw.cos(),
    );
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

/// Move the camera along its view ray, clamping the orbit radius.
/// Positive delta zooms out, negative zooms in.
pub fn apply_zoom(transform: &mut Transform, delta: f32, min_radius: f32, max_radius: f32) {
    let direction = transform.translation.normalize_or_zero();
    let radius = (transform.translation.length() + delta).clamp(min_radius, max_radius);

    transform.translation = direction * radius;
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

/// Keyboard orbit: A/D and arrows rotate, W/S and arrows zoom.
pub fn orbit_keyboard_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let orbit_step = config.camera.orbit_speed * time.delta_secs();
    let zoom_step = config.camera.zoom_speed * time.delta_secs();

    let left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    let right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);
    let up = keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW);
    let down = keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS);

    if left {
        apply_orbit(&mut transform, orbit_step, 0.0);
    }
    if right {
        apply_orbit(&mut transform, -orbit_step, 0.0);
    }
    if up {
        apply_zoom(
            &mut transform,
            -zoom_step,
            config.camera.min_radius,
            config.camera.max_radius,
        );
    }
    if down {
        apply_zoom(
            &mut transform,
            zoom_step,
            config.camera.min_radius,
            config.camera.max_radius,
        );
    }
}

/// Orbit while the secondary mouse button is held. The primary button is
/// reserved for turning layers.
pub fn orbit_mouse_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    mut motions: MessageReader<MouseMotion>,
    config: Res<GameConfig>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    if !mouse.pressed(MouseButton::Right) {
        motions.clear();
        return;
    }

    let delta = motions
        .read()
        .fold(Vec2::ZERO, |acc, motion| acc + motion.delta);
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    apply_orbit(
        &mut transform,
        -delta.x * config.camera.drag_sensitivity,
        delta.y * config.camera.drag_sensitivity,
    );
}

/// Scroll wheel zoom. Scrolling up zooms in.
pub fn zoom_scroll_wheel(
    mut wheels: MessageReader<MouseWheel>,
    config: Res<GameConfig>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let mut delta = 0.0;
    for wheel in wheels.read() {
        delta -= match wheel.unit {
            MouseScrollUnit::Line => wheel.y * CAMERA_3D_WHEEL_LINE_ZOOM,
            MouseScrollUnit::Pixel => wheel.y * CAMERA_3D_WHEEL_PIXEL_ZOOM,
        };
    }
    if delta.abs() < f32::EPSILON {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    apply_zoom(
        &mut transform,
        delta,
        config.camera.min_radius,
        config.camera.max_radius,
    );
}
