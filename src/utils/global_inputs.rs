//! Always-on window inputs.
use bevy::prelude::*;

use bevy::window::PrimaryWindow;

pub struct InputsPlugin;

impl Plugin for InputsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_keyboard_input);
    }
}

/// Handles ESC to toggle between windowed and fullscreen.
/// The cursor stays visible and ungrabbed; picking needs it.
/// Fullscreen toggling is left to the browser on wasm builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    use bevy::window::{MonitorSelection, VideoModeSelection, WindowMode};

    if keyboard.just_pressed(KeyCode::Escape) {
        let Ok(mut window) = windows.single_mut() else {
            return;
        };

        window.mode = match window.mode {
            WindowMode::Windowed => {
                WindowMode::Fullscreen(MonitorSelection::Current, VideoModeSelection::Current)
            }
            _ => WindowMode::Windowed,
        };
        info!("window mode is now {:?}", window.mode);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn handle_keyboard_input(
    _keyboard: Res<ButtonInput<KeyCode>>,
    _windows: Query<&mut Window, With<PrimaryWindow>>,
) {
}
