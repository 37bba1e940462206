//! Start-up for rubiks_3d_game, with window, plugins, and resources.

use bevy::{prelude::*, window::*};

use rubiks_3d_game::plugins::game_plugin::GamePlugin;
use rubiks_3d_game::utils::config::GameConfig;

/// Main application function
fn main() {
    let window = Some(Window {
        title: "Rubik's Cube".into(),
        #[cfg(target_arch = "wasm32")]
        canvas: Some("#cube-canvas".into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    });

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: window,
            ..default()
        }))
        .insert_resource(GameConfig::load())
        .add_plugins(GamePlugin)
        .run();
}
