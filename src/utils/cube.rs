//! Construction of the 3x3x3 cube: 27 cubelets on an integer lattice,
//! each with six sticker quads as children.

use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::utils::constants::cube_constants::{
    CUBE_SPACING, FACE_COLORS, INTERIOR_COLOR, STICKER_SIZE,
};
use crate::utils::objects::{Cubelet, RubiksCube, Sticker};

/// Sticker orientations: outward normal plus the two in-plane tangents,
/// ordered so that `u x v = normal` (front faces wind counterclockwise).
/// Face order matches `FACE_COLORS`: +X, -X, +Y, -Y, +Z, -Z.
const STICKER_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Spawn the 27 cubelets. Only outward-facing stickers get a face color;
/// everything pointing inward is neutral.
pub fn spawn_rubiks_cube(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    // One quad mesh per orientation, shared by all 27 cubelets.
    let face_meshes: [Handle<Mesh>; 6] =
        STICKER_FACES.map(|(normal, u, v)| meshes.add(sticker_quad(normal, u, v)));

    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let lattice = IVec3::new(x, y, z);

                commands
                    .spawn((
                        Transform::from_translation(lattice.as_vec3() * CUBE_SPACING),
                        Visibility::default(),
                        Cubelet { lattice },
                        RubiksCube,
                    ))
                    .with_children(|parent| {
                        for (face_index, (normal, _, _)) in STICKER_FACES.iter().enumerate() {
                            let color = sticker_color(lattice, face_index);
                            parent.spawn((
                                Mesh3d(face_meshes[face_index].clone()),
                                MeshMaterial3d(materials.add(StandardMaterial {
                                    base_color: color,
                                    ..default()
                                })),
                                Transform::default(),
                                Sticker {
                                    normal: *normal,
                                    base_color: color,
                                },
                            ));
                        }
                    });
            }
        }
    }
}

/// Color of one sticker: the face color when the cubelet sits on the
/// matching outer layer, the interior color otherwise.
pub fn sticker_color(lattice: IVec3, face_index: usize) -> Color {
    let outward = match face_index {
        0 => lattice.x == 1,
        1 => lattice.x == -1,
        2 => lattice.y == 1,
        3 => lattice.y == -1,
        4 => lattice.z == 1,
        5 => lattice.z == -1,
        _ => false,
    };

    if outward {
        FACE_COLORS[face_index]
    } else {
        INTERIOR_COLOR
    }
}

/// Build one sticker quad, offset from the cubelet center along its normal.
fn sticker_quad(normal: Vec3, u: Vec3, v: Vec3) -> Mesh {
    let half = STICKER_SIZE / 2.0;
    let center = normal * half;

    let positions = vec![
        (center - u * half - v * half).to_array(),
        (center + u * half - v * half).to_array(),
        (center + u * half + v * half).to_array(),
        (center - u * half + v * half).to_array(),
    ];
    let normals = vec![normal.to_array(); 4];
    let uvs = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, Default::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(vec![0, 1, 2, 0, 2, 3]));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cubelet_shows_three_face_colors() {
        let lattice = IVec3::new(1, 1, 1);
        let colored = (0..6)
            .filter(|&face| sticker_color(lattice, face) != INTERIOR_COLOR)
            .count();
        assert_eq!(colored, 3);
    }

    #[test]
    fn center_cubelet_is_all_interior() {
        let lattice = IVec3::ZERO;
        for face in 0..6 {
            assert_eq!(sticker_color(lattice, face), INTERIOR_COLOR);
        }
    }

    #[test]
    fn edge_cubelet_shows_two_face_colors() {
        let lattice = IVec3::new(1, 0, -1);
        let colored = (0..6)
            .filter(|&face| sticker_color(lattice, face) != INTERIOR_COLOR)
            .count();
        assert_eq!(colored, 2);
        assert_eq!(sticker_color(lattice, 0), FACE_COLORS[0]);
        assert_eq!(sticker_color(lattice, 5), FACE_COLORS[5]);
    }

    #[test]
    fn sticker_tangents_wind_outward() {
        for (normal, u, v) in STICKER_FACES {
            assert!((u.cross(v) - normal).length() < 1e-6);
        }
    }
}
