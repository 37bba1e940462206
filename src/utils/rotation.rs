//! Layer rotation: click-to-turn requests, the single-rotation guard, and
//! the quarter-turn animation that re-bakes cubelet transforms on completion.

use bevy::prelude::*;

use crate::utils::config::GameConfig;
use crate::utils::constants::cube_constants::CUBE_SPACING;
use crate::utils::constants::game_constants::{NORMAL_AXIS_THRESHOLD, QUARTER_TURN_RAD};
use crate::utils::objects::{
    ActiveRotation, Axis, Cubelet, RotateLayerRequest, RotationState, SelectedFace,
};

/// Plugin for handling layer turns.
pub struct RotationPlugin;

impl Plugin for RotationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RotateLayerRequest>()
            .init_resource::<RotationState>()
            .init_resource::<SelectedFace>()
            .add_systems(
                Update,
                (
                    request_rotation_on_click,
                    start_requested_rotation,
                    animate_layer_rotation,
                )
                    .chain(),
            );
    }
}

/// The axis whose component of `normal` exceeds the threshold, with the
/// component's sign as turn direction. Diagonal normals select nothing.
pub fn dominant_axis(normal: Vec3) -> Option<(Axis, i8)> {
    if normal.x.abs() > NORMAL_AXIS_THRESHOLD {
        Some((Axis::X, if normal.x > 0.0 { 1 } else { -1 }))
    } else if normal.y.abs() > NORMAL_AXIS_THRESHOLD {
        Some((Axis::Y, if normal.y > 0.0 { 1 } else { -1 }))
    } else if normal.z.abs() > NORMAL_AXIS_THRESHOLD {
        Some((Axis::Z, if normal.z > 0.0 { 1 } else { -1 }))
    } else {
        None
    }
}

/// Quarter-turn of a lattice coordinate about an axis.
/// `direction` follows the right-hand rule around the positive axis.
pub fn rotate_lattice(axis: Axis, direction: i8, v: IVec3) -> IVec3 {
    let IVec3 { x, y, z } = v;
    match (axis, direction >= 0) {
        (Axis::X, true) => IVec3::new(x, -z, y),
        (Axis::X, false) => IVec3::new(x, z, -y),
        (Axis::Y, true) => IVec3::new(z, y, -x),
        (Axis::Y, false) => IVec3::new(-z, y, x),
        (Axis::Z, true) => IVec3::new(-y, x, z),
        (Axis::Z, false) => IVec3::new(y, -x, z),
    }
}

/// Whether a cubelet's remembered coordinate puts it in the turning layer.
pub fn in_layer(lattice: IVec3, axis: Axis, layer: i32) -> bool {
    axis.component(lattice) == layer
}

/// Animation progress in [0, 1].
pub fn rotation_progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= f32::EPSILON {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// A snapshot transform rotated by `angle` about `axis` through the origin.
pub fn rotated_transform(start: &Transform, axis: Vec3, angle: f32) -> Transform {
    let q = Quat::from_axis_angle(axis, angle);
    Transform {
        translation: q * start.translation,
        rotation: q * start.rotation,
        scale: start.scale,
    }
}

/// Nearest lattice coordinate for a world translation.
pub fn snap_to_lattice(translation: Vec3) -> IVec3 {
    (translation / CUBE_SPACING).round().as_ivec3()
}

/// On a primary click with a hovered face, derive the turn axis from the
/// face normal and the layer from the cubelet's remembered coordinate.
/// Clicks while a turn is in flight are dropped.
pub fn request_rotation_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    selected: Res<SelectedFace>,
    rotation: Res<RotationState>,
    cubelets: Query<&Cubelet>,
    mut requests: MessageWriter<RotateLayerRequest>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if rotation.is_animating() {
        return;
    }
    let Some(selection) = selected.current else {
        return;
    };
    let Some((axis, direction)) = dominant_axis(selection.world_normal) else {
        return;
    };
    let Ok(cubelet) = cubelets.get(selection.cubelet) else {
        return;
    };

    requests.write(RotateLayerRequest {
        axis,
        layer: axis.component(cubelet.lattice),
        direction,
    });
}

/// Start the next requested turn, snapshotting the participating cubelets.
/// Requests arriving while a turn is active are silently dropped.
pub fn start_requested_rotation(
    mut requests: MessageReader<RotateLayerRequest>,
    mut rotation: ResMut<RotationState>,
    time: Res<Time>,
    cubelets: Query<(Entity, &Transform, &Cubelet)>,
) {
    for request in requests.read() {
        if rotation.is_animating() {
            continue;
        }

        let participants: Vec<(Entity, Transform)> = cubelets
            .iter()
            .filter(|(_, _, cubelet)| in_layer(cubelet.lattice, request.axis, request.layer))
            .map(|(entity, transform, _)| (entity, *transform))
            .collect();

        info!(
            "turning {} layer {} ({} cubelets)",
            request.axis.letter(),
            request.layer,
            participants.len()
        );

        rotation.active = Some(ActiveRotation {
            axis: request.axis,
            direction: request.direction,
            layer: request.layer,
            start_time: time.elapsed(),
            participants,
        });
    }
}

/// Advance the in-flight turn. On the final frame the exact quarter turn is
/// baked into each participant and its remembered coordinate is updated.
pub fn animate_layer_rotation(
    mut rotation: ResMut<RotationState>,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut cubelets: Query<(&mut Transform, &mut Cubelet)>,
) {
    let Some(active) = rotation.active.take() else {
        return;
    };

    let elapsed = (time.elapsed() - active.start_time).as_secs_f32();
    let progress = rotation_progress(elapsed, config.rotation_duration_secs);
    let axis_vec = active.axis.unit();
    let angle = QUARTER_TURN_RAD * active.direction as f32 * progress;
    let done = progress >= 1.0;

    for (entity, start) in &active.participants {
        let Ok((mut transform, mut cubelet)) = cubelets.get_mut(*entity) else {
            continue;
        };

        *transform = rotated_transform(start, axis_vec, angle);

        if done {
            cubelet.lattice = rotate_lattice(active.axis, active.direction, cubelet.lattice);
            // Remove interpolation error: land exactly on the lattice.
            transform.translation = cubelet.lattice.as_vec3() * CUBE_SPACING;
        }
    }

    if !done {
        rotation.active = Some(active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    #[test]
    fn dominant_axis_picks_threshold_axis() {
        assert_eq!(dominant_axis(Vec3::new(0.98, 0.1, 0.05)), Some((Axis::X, 1)));
        assert_eq!(dominant_axis(Vec3::new(0.0, -1.0, 0.0)), Some((Axis::Y, -1)));
        assert_eq!(dominant_axis(Vec3::new(0.02, 0.0, 0.97)), Some((Axis::Z, 1)));
    }

    #[test]
    fn dominant_axis_rejects_diagonals() {
        let diagonal = Vec3::new(0.577, 0.577, 0.577);
        assert_eq!(dominant_axis(diagonal), None);
    }

    fn all_lattice_coords() -> Vec<IVec3> {
        let mut coords = Vec::new();
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    coords.push(IVec3::new(x, y, z));
                }
            }
        }
        coords
    }

    #[test]
    fn rotate_lattice_matches_quaternion() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for direction in [-1i8, 1] {
                let q = Quat::from_axis_angle(axis.unit(), QUARTER_TURN_RAD * direction as f32);
                for v in all_lattice_coords() {
                    let expected = (q * v.as_vec3()).round().as_ivec3();
                    assert_eq!(rotate_lattice(axis, direction, v), expected);
                }
            }
        }
    }

    #[test]
    fn four_quarter_turns_restore_lattice() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for v in all_lattice_coords() {
                let mut rotated = v;
                for _ in 0..4 {
                    rotated = rotate_lattice(axis, 1, rotated);
                }
                assert_eq!(rotated, v);
            }
        }
    }

    #[test]
    fn layer_membership_is_exactly_nine() {
        let members: Vec<IVec3> = all_lattice_coords()
            .into_iter()
            .filter(|v| in_layer(*v, Axis::X, 1))
            .collect();
        assert_eq!(members.len(), 9);
        assert!(members.iter().all(|v| v.x == 1));
    }

    #[test]
    fn snap_to_lattice_rounds_interpolation_error() {
        let translation = Vec3::new(1.0004, -0.9996, 0.0002) * CUBE_SPACING;
        assert_eq!(snap_to_lattice(translation), IVec3::new(1, -1, 0));
    }

    #[test]
    fn rotated_transform_moves_translation_on_circle() {
        let start = Transform::from_translation(Vec3::new(CUBE_SPACING, 0.0, 0.0));
        let rotated = rotated_transform(&start, Vec3::Z, QUARTER_TURN_RAD);
        assert!((rotated.translation - Vec3::new(0.0, CUBE_SPACING, 0.0)).length() < 1e-5);
        assert!((rotated.translation.length() - start.translation.length()).abs() < 1e-5);
    }

    fn test_app(rotation_duration_secs: f32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<MouseButton>>();
        app.insert_resource(GameConfig {
            rotation_duration_secs,
            ..Default::default()
        });
        app.add_plugins(RotationPlugin);

        for lattice in all_lattice_coords() {
            app.world_mut().spawn((
                Transform::from_translation(lattice.as_vec3() * CUBE_SPACING),
                Cubelet { lattice },
            ));
        }
        app
    }

    fn send_request(app: &mut App, request: RotateLayerRequest) {
        app.world_mut()
            .resource_mut::<Messages<RotateLayerRequest>>()
            .write(request);
    }

    #[test]
    fn second_request_is_dropped_while_animating() {
        // A very long turn so the first request is still in flight.
        let mut app = test_app(1_000_000.0);

        send_request(
            &mut app,
            RotateLayerRequest {
                axis: Axis::X,
                layer: 1,
                direction: 1,
            },
        );
        app.update();

        {
            let state = app.world().resource::<RotationState>();
            let active = state.active.as_ref().expect("first request should start");
            assert_eq!(active.axis, Axis::X);
            assert_eq!(active.participants.len(), 9);
        }

        send_request(
            &mut app,
            RotateLayerRequest {
                axis: Axis::Y,
                layer: -1,
                direction: -1,
            },
        );
        app.update();

        let state = app.world().resource::<RotationState>();
        let active = state.active.as_ref().expect("turn still in flight");
        assert_eq!(active.axis, Axis::X);
        assert_eq!(active.layer, 1);
    }

    #[test]
    fn completed_turn_bakes_rotated_lattice() {
        // Zero duration completes the turn on the first frame.
        let mut app = test_app(0.0);

        let before: Vec<(Entity, IVec3)> = {
            let mut query = app.world_mut().query::<(Entity, &Cubelet)>();
            query
                .iter(app.world())
                .map(|(entity, cubelet)| (entity, cubelet.lattice))
                .collect()
        };

        send_request(
            &mut app,
            RotateLayerRequest {
                axis: Axis::Y,
                layer: 1,
                direction: 1,
            },
        );
        app.update();

        assert!(!app.world().resource::<RotationState>().is_animating());

        for (entity, old_lattice) in before {
            let cubelet = app.world().get::<Cubelet>(entity).unwrap();
            let transform = app.world().get::<Transform>(entity).unwrap();

            // Participants land on the mathematically rotated coordinate,
            // everything else keeps its old one.
            let expected_lattice = if old_lattice.y == 1 {
                rotate_lattice(Axis::Y, 1, old_lattice)
            } else {
                old_lattice
            };
            assert_eq!(cubelet.lattice, expected_lattice);

            // Remembered coordinate and baked translation must agree.
            let expected = cubelet.lattice.as_vec3() * CUBE_SPACING;
            assert!((transform.translation - expected).length() < 1e-4);
        }
    }

    #[test]
    fn non_participants_stay_in_place() {
        let mut app = test_app(0.0);

        send_request(
            &mut app,
            RotateLayerRequest {
                axis: Axis::Z,
                layer: 1,
                direction: -1,
            },
        );
        app.update();

        let mut query = app.world_mut().query::<(&Transform, &Cubelet)>();
        for (transform, cubelet) in query.iter(app.world()) {
            if cubelet.lattice.z != 1 {
                // Untouched cubelets keep identity rotation and lattice position.
                assert!(transform.rotation.angle_between(Quat::IDENTITY) < 1e-6);
                let expected = cubelet.lattice.as_vec3() * CUBE_SPACING;
                assert!((transform.translation - expected).length() < 1e-6);
            }
        }
    }

    #[test]
    fn guard_releases_after_completion() {
        let mut app = test_app(0.0);

        send_request(
            &mut app,
            RotateLayerRequest {
                axis: Axis::X,
                layer: 0,
                direction: 1,
            },
        );
        app.update();
        assert!(!app.world().resource::<RotationState>().is_animating());

        send_request(
            &mut app,
            RotateLayerRequest {
                axis: Axis::Y,
                layer: 0,
                direction: 1,
            },
        );
        app.update();
        // The second request ran now that the first finished.
        assert!(!app.world().resource::<RotationState>().is_animating());
    }
}
