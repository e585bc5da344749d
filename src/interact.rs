//! Interaction controller: routes control activations and pointer clicks
//! into scene mutations according to the current input mode.

use crate::geometry::is_inside_tree;
use crate::scene::TreeScene;
use crate::scene::sparkles::spawn_burst;
use crate::scene::store::{Mode, Ornament, OrnamentKind};
use rand::Rng;
use rand::RngExt;
use std::f32::consts::TAU;

const DELETE_BURST: usize = 20;
const PLACE_BURST: usize = 20;
const TAP_BURST: usize = 25;

/// The named control activations the host can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    ToggleSnow,
    ToggleLights,
    ClearOrnaments,
    ResetScene,
    ToggleDeleteMode,
    SelectOrnament(OrnamentKind),
}

pub fn handle_action(scene: &mut TreeScene, action: ControlAction, rng: &mut impl Rng) {
    match action {
        ControlAction::ToggleSnow => scene.store.toggle_snow(),
        ControlAction::ToggleLights => scene.store.toggle_lights(),
        ControlAction::ClearOrnaments => {
            scene.store.ornaments.clear();
            scene.store.mode = Mode::Normal;
        }
        ControlAction::ResetScene => {
            scene.regenerate(rng);
            scene.store.mode = Mode::Normal;
        }
        ControlAction::ToggleDeleteMode => {
            // Entering delete mode drops any placement selection.
            scene.store.mode = if scene.store.mode.is_delete() {
                Mode::Normal
            } else {
                Mode::Delete
            };
        }
        ControlAction::SelectOrnament(kind) => {
            // Re-selecting the active kind deselects it; selecting a new
            // kind leaves delete mode.
            scene.store.mode = if scene.store.mode == Mode::Place(kind) {
                Mode::Normal
            } else {
                Mode::Place(kind)
            };
        }
    }
}

/// Route a pointer click at device coordinates. `modifier` is the
/// shift-click shortcut for a one-off delete.
pub fn handle_click(
    scene: &mut TreeScene,
    device_x: u16,
    device_y: u16,
    modifier: bool,
    rng: &mut impl Rng,
) {
    let p = scene
        .transform()
        .to_design(device_x as f32, device_y as f32);
    let store = &mut scene.store;

    if store.mode.is_delete() || modifier {
        // Newest-first, so overlapping ornaments delete in reverse
        // placement order; at most one per click.
        for i in (0..store.ornaments.len()).rev() {
            let ornament = &store.ornaments[i];
            if ornament.pos.distance_to(p) < ornament.size {
                let removed = store.ornaments.remove(i);
                spawn_burst(&mut store.sparks, removed.pos, DELETE_BURST, rng);
                return;
            }
        }
        return;
    }

    if let Mode::Place(kind) = store.mode {
        if is_inside_tree(p) {
            store.ornaments.push(Ornament {
                pos: p,
                size: 30.0 + rng.random::<f32>() * 10.0,
                kind,
                rotation: (rng.random::<f32>() - 0.5) * 0.3,
                swing_phase: rng.random::<f32>() * TAU,
            });
            spawn_burst(&mut store.sparks, p, PLACE_BURST, rng);
        }
        return;
    }

    // Normal mode: every hit ornament sheds a burst, nothing changes.
    let hits: Vec<_> = store
        .ornaments
        .iter()
        .filter(|o| o.pos.distance_to(p) < o.size)
        .map(|o| o.pos)
        .collect();
    for pos in hits {
        spawn_burst(&mut store.sparks, pos, TAP_BURST, rng);
    }
}
