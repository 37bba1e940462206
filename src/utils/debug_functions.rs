//! Debug functions for the game.
use bevy::{prelude::*, window::*};

use crate::utils::constants::cube_constants::CUBE_SPACING;
use crate::utils::objects::{Cubelet, RotationState};

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_vsync, visualize_lattice));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(input: Res<ButtonInput<KeyCode>>, mut window: Query<&mut Window>) {
    if input.just_pressed(KeyCode::KeyV) {
        let Ok(mut window) = window.single_mut() else {
            return;
        };

        window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
            PresentMode::AutoNoVsync
        } else {
            PresentMode::AutoVsync
        };

        info!("PRESENT_MODE: {:?}", window.present_mode);
    }
}

/// Visualizes the remembered lattice when the 'L' key is pressed:
/// a wireframe cell per cubelet plus the axis of the turn in flight.
fn visualize_lattice(
    mut gizmos: Gizmos,
    cubelets: Query<&Cubelet>,
    rotation: Res<RotationState>,
    input: Res<ButtonInput<KeyCode>>,
    mut show_lattice: Local<bool>,
) {
    if input.just_pressed(KeyCode::KeyL) {
        *show_lattice = !*show_lattice;
        info!("Lattice visualization: {}", *show_lattice);
    }

    if *show_lattice {
        for cubelet in &cubelets {
            gizmos.cuboid(
                Transform::from_translation(cubelet.lattice.as_vec3() * CUBE_SPACING)
                    .with_scale(Vec3::splat(CUBE_SPACING)),
                Color::srgb(0.3, 0.9, 0.3),
            );
        }

        if let Some(active) = &rotation.active {
            let axis = active.axis.unit() * CUBE_SPACING * 3.0;
            gizmos.line(-axis, axis, Color::srgb(1.0, 0.3, 0.3));
        }
    }
}
