//! Touch input handling for mobile/touchscreen support.
//! Single-finger swipe orbits the camera, two-finger pinch zooms.

use bevy::input::touch::Touch;
use bevy::prelude::*;

use crate::utils::camera::{apply_orbit, apply_zoom};
use crate::utils::config::GameConfig;
use crate::utils::constants::touch_constants::{PINCH_SENSITIVITY, SWIPE_SENSITIVITY};

/// Resource tracking touch positions between frames for gesture deltas.
#[derive(Resource, Default)]
pub struct TouchState {
    pub last_position: Option<Vec2>,
    pub last_pinch_distance: Option<f32>,
}

/// Plugin for touch input handling.
pub struct TouchInputPlugin;

impl Plugin for TouchInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchState>()
            .add_systems(Update, handle_touch_gestures);
    }
}

/// Turn raw touch positions into orbit/zoom deltas.
pub fn handle_touch_gestures(
    touches: Res<Touches>,
    mut touch_state: ResMut<TouchState>,
    config: Res<GameConfig>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let active: Vec<&Touch> = touches.iter().collect();
    match active.len() {
        // Swipe: orbit by the finger's movement since last frame.
        1 => {
            touch_state.last_pinch_distance = None;
            let position = active[0].position();
            if let Some(last) = touch_state.last_position {
                let delta = position - last;
                apply_orbit(
                    &mut transform,
                    -delta.x * SWIPE_SENSITIVITY,
                    delta.y * SWIPE_SENSITIVITY,
                );
            }
            touch_state.last_position = Some(position);
        }
        // Pinch: zoom by the change in finger spread.
        2 => {
            touch_state.last_position = None;
            let distance = active[0].position().distance(active[1].position());
            if let Some(last) = touch_state.last_pinch_distance {
                apply_zoom(
                    &mut transform,
                    (last - distance) * PINCH_SENSITIVITY,
                    config.camera.min_radius,
                    config.camera.max_radius,
                );
            }
            touch_state.last_pinch_distance = Some(distance);
        }
        _ => {
            touch_state.last_position = None;
            touch_state.last_pinch_distance = None;
        }
    }
}
