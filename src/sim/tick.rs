//! Fixed timestep simulation tick
//!
//! Applies buffered intents, moves the player and recasts the ray.

use super::grid::OutOfBounds;
use super::input::{Intent, TickInput};
use super::raycast::cast;
use super::state::{PaintMode, Scene};

/// Advance the scene by one fixed timestep
pub fn tick(scene: &mut Scene, input: &TickInput) {
    for &intent in &input.intents {
        apply_intent(scene, intent);
    }

    scene.player.advance();
    scene.time_ticks += 1;

    // Highlights are derived from this tick's cast only
    scene.grid.clear_highlights();
    if scene.flags.ray_active {
        update_ray(scene);
    }
}

fn apply_intent(scene: &mut Scene, intent: Intent) {
    match intent {
        Intent::PointerMoved(at) => {
            scene.pointer = at;
            scene.target.track(at);
            if let Some(mode) = scene.flags.paint {
                // Dragging off the grid is harmless
                let _ = paint_at(scene, mode);
            }
        }
        Intent::RayPressed => {
            scene.flags.ray_active = true;
        }
        Intent::RayReleased => {
            scene.flags.ray_active = false;
            scene.ray.hit = None;
        }
        Intent::PaintPressed(at) => {
            scene.pointer = at;
            match scene.grid.index_of(at.as_vec2()) {
                Ok(index) => {
                    let mode = PaintMode::flipping(scene.grid.is_wall(index));
                    scene.flags.paint = Some(mode);
                    let _ = scene.grid.set_wall(index, mode.wall());
                    log::debug!("Paint started at cell {index} ({mode:?})");
                }
                Err(OutOfBounds) => {
                    log::debug!("Paint press outside grid at {at}, ignored");
                }
            }
        }
        Intent::PaintReleased => {
            scene.flags.paint = None;
        }
        Intent::Key { dir, pressed } => {
            scene.player.apply_key(dir, pressed, scene.player_speed);
        }
    }
}

/// Set the cell under the pointer to the gesture's mode
fn paint_at(scene: &mut Scene, mode: PaintMode) -> Result<usize, OutOfBounds> {
    let index = scene.grid.index_of(scene.pointer.as_vec2())?;
    scene.grid.set_wall(index, mode.wall())?;
    Ok(index)
}

fn update_ray(scene: &mut Scene) {
    let origin = scene.player.center();
    let target = scene.target.center();
    let hit = cast(&scene.grid, origin, target);

    if let Some(hit) = hit {
        if let Err(err) = scene.grid.highlight(hit.cell) {
            log::warn!("Ray hit cell {} could not be highlighted: {err}", hit.cell);
        }
    }
    if hit.map(|h| h.cell) != scene.ray.hit.map(|h| h.cell) {
        log::debug!("Ray hit changed: {:?}", hit.map(|h| h.cell));
    }

    scene.ray.origin = origin;
    scene.ray.target = target;
    scene.ray.hit = hit;
}
