use bevy::prelude::*;

use crate::utils::camera::OrbitCameraPlugin;
use crate::utils::debug_functions::DebugFunctionsPlugin;
use crate::utils::global_inputs::InputsPlugin;
use crate::utils::picking::CubePickingPlugin;
use crate::utils::rotation::RotationPlugin;
use crate::utils::setup::SetupPlugin;
use crate::utils::solve::SolvePlugin;
use crate::utils::touch_inputs::TouchInputPlugin;

/// Top-level plugin wiring every game concern into the app.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SetupPlugin,
            OrbitCameraPlugin,
            TouchInputPlugin,
            CubePickingPlugin,
            RotationPlugin,
            SolvePlugin,
            InputsPlugin,
            DebugFunctionsPlugin,
        ));
    }
}
