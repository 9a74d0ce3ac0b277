//! Per-tick stepping
//!
//! One tick: every actor acts in insertion order, then the player's contacts
//! are resolved, then the finish delay runs down if the outcome is decided.

use serde::{Deserialize, Serialize};

use super::grid::Obstacle;
use super::level::{Level, LevelStatus, Touch};
use crate::consts::{MAX_STEP, MAX_SUBSTEPS};

/// Advance the level by one timestep
pub fn tick(level: &mut Level, dt: f32) {
    let (grid, actors) = level.grid_and_actors_mut();
    for actor in actors {
        actor.act(dt, grid);
    }

    resolve_player_contacts(level);

    if level.status().is_terminal() {
        level.finish_delay -= dt;
    }
}

/// Check what the player currently overlaps and report it to the level
fn resolve_player_contacts(level: &mut Level) {
    let Some(player) = level.player().cloned() else {
        return;
    };

    if level.obstacle_at(player.pos, player.size) == Some(Obstacle::Lava) {
        level.player_touched(Touch::Obstacle(Obstacle::Lava), None);
    }

    if let Some((tag, id)) = level.actor_at(&player).map(|other| (other.tag(), other.id)) {
        level.player_touched(Touch::Actor(tag), Some(id));
    }
}

/// Advance by an arbitrary frame time, split into steps of at most `MAX_STEP`
///
/// At most `MAX_SUBSTEPS` ticks run; any time left over is dropped. A
/// non-finite `elapsed` advances nothing. Returns the number of ticks taken.
pub fn advance(level: &mut Level, elapsed: f32) -> u32 {
    if !elapsed.is_finite() {
        log::warn!("Ignoring non-finite frame time {}", elapsed);
        return 0;
    }

    let mut remaining = elapsed;
    let mut ticks = 0;
    while remaining > 0.0 && ticks < MAX_SUBSTEPS {
        let step = remaining.min(MAX_STEP);
        tick(level, step);
        remaining -= step;
        ticks += 1;
    }
    if remaining > 0.0 {
        log::debug!("Dropped {:.3}s of frame time", remaining);
    }
    ticks
}

/// Result of a headless run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub status: LevelStatus,
    pub ticks: u64,
    /// Whether `is_finished` was reached before the tick cap
    pub finished: bool,
}

/// Tick with a fixed `dt` until the level is finished or `max_ticks` pass
pub fn run_until_finished(level: &mut Level, dt: f32, max_ticks: u64) -> RunReport {
    let mut ticks = 0;
    while !level.is_finished() && ticks < max_ticks {
        tick(level, dt);
        ticks += 1;
    }
    let finished = level.is_finished();
    if !finished {
        log::debug!("Stopped after {} ticks without an outcome", ticks);
    }
    RunReport {
        status: level.status(),
        ticks,
        finished,
    }
}
