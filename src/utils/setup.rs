use bevy::prelude::*;

use crate::log;
use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z,
};
use crate::utils::cube::spawn_rubiks_cube;
use crate::utils::objects::{SolutionOutput, SolveButton};

/// Plugin for handling setup
pub struct SetupPlugin;

impl Plugin for SetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup);
    }
}

/// Spawn the camera, lights, the cube, and the screen UI.
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera
    commands.spawn((
        Camera3d::default(),
        // Start on the diagonal looking at the cube's center
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Light
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(4.0, 6.0, 4.0),
    ));

    // Ambient light keeps the shadowed faces readable
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0,
        affects_lightmapped_meshes: true,
    });

    spawn_rubiks_cube(&mut commands, &mut meshes, &mut materials);

    spawn_screen_ui(&mut commands);

    log!("🧊 Rubik's Cube ready");
    log!("🖱  Click a face to turn its layer | Right-drag or WASD to orbit");
}

/// Instructions overlay, the solve button, and the solution output node.
fn spawn_screen_ui(commands: &mut Commands) {
    // Instructions
    commands.spawn((
        Text::new("Click a face: turn layer | Right-drag/WASD: orbit | Wheel: zoom"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.8, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));

    // Solve button
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(10.0),
                bottom: Val::Px(10.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Button,
            BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
            SolveButton,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Solve"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });

    // Solution output, filled by the solve button handler
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        SolutionOutput,
    ));
}
