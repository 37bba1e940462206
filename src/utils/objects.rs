// This file defines the various objects, resources, and components used in the game.
use bevy::prelude::*;
use std::time::Duration;

/// One of the three rotation axes of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector of the positive axis direction.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The lattice coordinate of `v` along this axis.
    pub fn component(self, v: IVec3) -> i32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// A component that marks an entity as one of the 27 sub-cubes.
/// `lattice` is the remembered position on the 3x3x3 integer lattice,
/// updated whenever a layer turn completes.
#[derive(Component, Debug)]
pub struct Cubelet {
    pub lattice: IVec3,
}

/// A component that marks a sticker quad (child of a cubelet).
#[derive(Component)]
pub struct Sticker {
    /// Outward normal in the cubelet's local space.
    pub normal: Vec3,
    pub base_color: Color,
}

/// A component that marks an entity as part of the Rubik's cube.
#[derive(Component)]
pub struct RubiksCube;

/// A component that marks the "Solve" button.
#[derive(Component)]
pub struct SolveButton;

/// A component that marks the text node showing the solver's output.
#[derive(Component)]
pub struct SolutionOutput;

/// The sticker currently under the pointer, refreshed on every pointer move.
#[derive(Clone, Copy, Debug)]
pub struct FaceSelection {
    pub cubelet: Entity,
    pub sticker: Entity,
    /// Surface normal of the hovered sticker in world space.
    pub world_normal: Vec3,
}

/// Resource holding the current pointer selection (or none).
#[derive(Resource, Default)]
pub struct SelectedFace {
    pub current: Option<FaceSelection>,
}

/// Resource remembering the hovered sticker's original material so the
/// hover highlight can be undone.
#[derive(Resource, Default)]
pub struct HoverHighlight {
    pub sticker: Option<Entity>,
    pub saved: Option<Handle<StandardMaterial>>,
}

/// A layer turn in flight.
#[derive(Debug)]
pub struct ActiveRotation {
    pub axis: Axis,
    /// +1 clockwise, -1 counterclockwise (looking down the positive axis).
    pub direction: i8,
    pub layer: i32,
    pub start_time: Duration,
    /// Participating cubelets with their transforms at turn start.
    pub participants: Vec<(Entity, Transform)>,
}

/// Resource holding the single in-flight rotation, if any.
/// At most one layer turn animates at a time; requests arriving while
/// one is active are dropped.
#[derive(Resource, Default)]
pub struct RotationState {
    pub active: Option<ActiveRotation>,
}

impl RotationState {
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }
}

/// Request to turn one layer by a quarter turn.
/// Written by the click handler and the stub solver, consumed by the
/// rotation systems behind the single-rotation guard.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct RotateLayerRequest {
    pub axis: Axis,
    pub layer: i32,
    pub direction: i8,
}
