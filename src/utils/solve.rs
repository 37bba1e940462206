//! The stub "solve" flow: a button that reads the placeholder state, runs
//! a hardcoded move list, and prints its description.
//!
//! This is not a solver. The move list is fixed, ignores the cube entirely,
//! and the single-rotation guard drops every requested move but the first.

use bevy::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::log;
use crate::utils::cube_state::{read_current_state, CubeState};
use crate::utils::objects::{Axis, RotateLayerRequest, SolutionOutput, SolveButton};

/// Plugin for the solve button.
pub struct SolvePlugin;

impl Plugin for SolvePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_solve_button);
    }
}

/// One move emitted by the stub solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveMove {
    pub axis: Axis,
    pub layer: i32,
    pub direction: i8,
}

/// The stub solver. Not state-aware: it returns the same three moves for
/// any input.
pub fn solve(_state: &CubeState) -> Vec<SolveMove> {
    vec![
        SolveMove {
            axis: Axis::X,
            layer: 1,
            direction: 1,
        },
        SolveMove {
            axis: Axis::Y,
            layer: 1,
            direction: -1,
        },
        SolveMove {
            axis: Axis::Z,
            layer: 1,
            direction: 1,
        },
    ]
}

/// One description line per move.
pub fn describe_moves(moves: &[SolveMove]) -> String {
    moves
        .iter()
        .map(|step| {
            format!(
                "Rotate {} layer {} {}",
                step.axis.letter(),
                step.layer,
                if step.direction >= 0 {
                    "clockwise"
                } else {
                    "counterclockwise"
                }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Button handler: refresh the placeholder state, request the stub moves,
/// and show their description in the solution text node.
pub fn handle_solve_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<SolveButton>)>,
    mut requests: MessageWriter<RotateLayerRequest>,
    mut outputs: Query<&mut Text, With<SolutionOutput>>,
) {
    for interaction in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }

        let mut state = read_current_state();
        state.refresh_from_screen();
        let moves = solve(&state);

        for step in &moves {
            requests.write(RotateLayerRequest {
                axis: step.axis,
                layer: step.layer,
                direction: step.direction,
            });
        }

        let description = describe_moves(&moves);
        if let Ok(mut text) = outputs.single_mut() {
            text.0 = description.clone();
        }

        #[cfg(not(target_arch = "wasm32"))]
        println!("{}", console::style(&description).cyan());
        #[cfg(target_arch = "wasm32")]
        log!("{description}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::cube_state::Face;

    #[test]
    fn stub_solver_always_returns_three_moves() {
        let state = read_current_state();
        assert_eq!(solve(&state).len(), 3);
    }

    #[test]
    fn stub_solver_is_state_blind() {
        let pristine = CubeState::default();
        let mut scrambled = CubeState::default();
        scrambled.update_face_colors(Face::Up, [0x123456; 9]);

        assert_eq!(solve(&pristine), solve(&scrambled));
    }

    #[test]
    fn description_has_one_line_per_move() {
        let description = describe_moves(&solve(&CubeState::default()));
        let lines: Vec<&str> = description.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Rotate x layer 1 clockwise");
        assert_eq!(lines[1], "Rotate y layer 1 counterclockwise");
        assert_eq!(lines[2], "Rotate z layer 1 clockwise");
    }
}
