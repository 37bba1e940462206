//! Pointer picking: tracks the sticker under the cursor and highlights it.
//!
//! The nearest hit reported by the mesh-picking backend wins. Selection is
//! refreshed on every pointer move and cleared when the pointer leaves the
//! cube; absence of a hit is not an error.

use bevy::color::Mix;
use bevy::picking::events::{Move, Out, Over, Pointer};
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

use crate::utils::constants::cube_constants::HOVER_LIGHTEN;
use crate::utils::objects::{
    Cubelet, FaceSelection, HoverHighlight, RubiksCube, SelectedFace, Sticker,
};

/// Plugin for pointer picking over the cube's stickers.
pub struct CubePickingPlugin;

impl Plugin for CubePickingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MeshPickingPlugin)
            .init_resource::<SelectedFace>()
            .init_resource::<HoverHighlight>()
            .add_observer(on_sticker_over)
            .add_observer(on_sticker_move)
            .add_observer(on_sticker_out);
    }
}

/// Pointer entered a sticker: record the selection and highlight it.
fn on_sticker_over(
    trigger: On<Pointer<Over>>,
    child_of: Query<&ChildOf>,
    stickers: Query<&Sticker>,
    cubelets: Query<(&Transform, &Cubelet), With<RubiksCube>>,
    mut selected: ResMut<SelectedFace>,
    mut highlight: ResMut<HoverHighlight>,
    mut material_handles: Query<&mut MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let target = trigger.event().event_target();
    let hit_normal = trigger.event().hit.normal;

    select_sticker(
        target,
        hit_normal,
        &child_of,
        &stickers,
        &cubelets,
        &mut selected,
    );
    apply_hover_highlight(
        target,
        &stickers,
        &mut highlight,
        &mut material_handles,
        &mut materials,
    );
}

/// Pointer moved within a sticker: keep the recorded normal current.
fn on_sticker_move(
    trigger: On<Pointer<Move>>,
    child_of: Query<&ChildOf>,
    stickers: Query<&Sticker>,
    cubelets: Query<(&Transform, &Cubelet), With<RubiksCube>>,
    mut selected: ResMut<SelectedFace>,
) {
    let target = trigger.event().event_target();
    let hit_normal = trigger.event().hit.normal;

    select_sticker(
        target,
        hit_normal,
        &child_of,
        &stickers,
        &cubelets,
        &mut selected,
    );
}

/// Pointer left a sticker: clear selection and undo the highlight.
fn on_sticker_out(
    trigger: On<Pointer<Out>>,
    mut selected: ResMut<SelectedFace>,
    mut highlight: ResMut<HoverHighlight>,
    mut material_handles: Query<&mut MeshMaterial3d<StandardMaterial>>,
) {
    let target = trigger.event().event_target();

    if selected
        .current
        .map_or(false, |selection| selection.sticker == target)
    {
        selected.current = None;
    }

    if highlight.sticker == Some(target) {
        restore_hover_highlight(&mut highlight, &mut material_handles);
    }
}

/// Resolve a picked sticker quad to its cubelet and world-space normal.
fn select_sticker(
    target: Entity,
    hit_normal: Option<Vec3>,
    child_of: &Query<&ChildOf>,
    stickers: &Query<&Sticker>,
    cubelets: &Query<(&Transform, &Cubelet), With<RubiksCube>>,
    selected: &mut SelectedFace,
) {
    // Hits on non-sticker meshes are ignored.
    let Ok(sticker) = stickers.get(target) else {
        return;
    };
    let Ok(parent) = child_of.get(target) else {
        return;
    };
    let cubelet_entity = parent.parent();
    let Ok((cubelet_transform, _)) = cubelets.get(cubelet_entity) else {
        return;
    };

    // The backend reports the world normal; fall back to rotating the
    // sticker's local normal by the cubelet's transform.
    let world_normal =
        hit_normal.unwrap_or_else(|| cubelet_transform.rotation * sticker.normal);

    selected.current = Some(FaceSelection {
        cubelet: cubelet_entity,
        sticker: target,
        world_normal,
    });
}

/// Swap the hovered sticker's material for a lightened copy.
fn apply_hover_highlight(
    target: Entity,
    stickers: &Query<&Sticker>,
    highlight: &mut HoverHighlight,
    material_handles: &mut Query<&mut MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
) {
    if highlight.sticker == Some(target) {
        return;
    }
    restore_hover_highlight(highlight, material_handles);

    let Ok(sticker) = stickers.get(target) else {
        return;
    };
    let Ok(mut handle) = material_handles.get_mut(target) else {
        return;
    };

    highlight.sticker = Some(target);
    highlight.saved = Some(handle.0.clone());
    handle.0 = materials.add(StandardMaterial {
        base_color: sticker.base_color.mix(&Color::WHITE, HOVER_LIGHTEN),
        ..default()
    });
}

/// Put the previously hovered sticker's material back.
fn restore_hover_highlight(
    highlight: &mut HoverHighlight,
    material_handles: &mut Query<&mut MeshMaterial3d<StandardMaterial>>,
) {
    if let (Some(entity), Some(saved)) = (highlight.sticker.take(), highlight.saved.take()) {
        if let Ok(mut handle) = material_handles.get_mut(entity) {
            handle.0 = saved;
        }
    }
}
