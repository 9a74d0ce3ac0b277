//! Level state: static grid, live actors, and the win/lose state machine
//!
//! All state that must be persisted for snapshots lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorTag};
use super::grid::{Grid, Obstacle};
use crate::consts::FINISH_DELAY;

/// Outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelStatus {
    /// Outcome not decided yet
    #[default]
    Playing,
    Won,
    Lost,
}

impl LevelStatus {
    pub fn is_terminal(&self) -> bool {
        *self != LevelStatus::Playing
    }
}

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Touch {
    Obstacle(Obstacle),
    Actor(ActorTag),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub grid: Grid,
    /// Live actors, in insertion order
    actors: Vec<Actor>,
    /// First actor tagged `player` at construction
    player: Option<ActorId>,
    status: LevelStatus,
    /// Counts down once the outcome is decided
    pub finish_delay: f32,
}

impl Level {
    /// Build a level from actors in the order given
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        let mut level = Self {
            grid,
            actors: Vec::with_capacity(actors.len()),
            player: None,
            status: LevelStatus::Playing,
            finish_delay: FINISH_DELAY,
        };
        for actor in actors {
            level.add_actor(actor);
        }
        level.player = level
            .actors
            .iter()
            .find(|a| a.tag() == ActorTag::Player)
            .map(|a| a.id);
        if level.player.is_none() {
            log::warn!("Level has no player");
        }
        level
    }

    /// Insert an actor, returning its ID
    ///
    /// An actor whose ID is already live here (a clone) gets a fresh one.
    pub fn add_actor(&mut self, mut actor: Actor) -> ActorId {
        if self.actor(actor.id).is_some() {
            actor.id = ActorId::fresh();
        }
        let id = actor.id;
        self.actors.push(actor);
        id
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn status(&self) -> LevelStatus {
        self.status
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Split borrow for stepping: actors move against the static grid
    pub(crate) fn grid_and_actors_mut(&mut self) -> (&Grid, &mut [Actor]) {
        (&self.grid, &mut self.actors)
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn player_id(&self) -> Option<ActorId> {
        self.player
    }

    pub fn player(&self) -> Option<&Actor> {
        self.player.and_then(|id| self.actor(id))
    }

    /// Mutable player access for input/movement code outside the simulation
    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        let id = self.player?;
        self.actors.iter_mut().find(|a| a.id == id)
    }

    /// Outcome decided and the grace period has run out
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal() && self.finish_delay < 0.0
    }

    /// First live actor overlapping `moving` (never `moving` itself)
    pub fn actor_at(&self, moving: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|a| a.is_intersect(moving))
    }

    /// What the grid says about a box of `size` at `pos`
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove an actor by identity; unknown IDs are ignored
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        let idx = self.actors.iter().position(|a| a.id == id)?;
        let removed = self.actors.remove(idx);
        log::debug!("Removed {} #{}", removed.tag().as_str(), id.0);
        Some(removed)
    }

    /// No live actor carries `tag`
    pub fn no_more_actors(&self, tag: ActorTag) -> bool {
        !self.actors.iter().any(|a| a.tag() == tag)
    }

    /// The player touched something
    ///
    /// Lava and fireballs lose the level. Touching an actor whose tag matches
    /// `touch` consumes it, and taking the last coin wins. Once the outcome is
    /// decided, further touches are ignored.
    ///
    /// A non-fireball actor touch with `actor` set to `None` is a no-op: it
    /// neither consumes anything nor re-checks the remaining coins.
    pub fn player_touched(&mut self, touch: Touch, actor: Option<ActorId>) {
        if self.status.is_terminal() {
            return;
        }

        match touch {
            Touch::Obstacle(Obstacle::Lava) | Touch::Actor(ActorTag::Fireball) => {
                self.set_status(LevelStatus::Lost);
            }
            Touch::Actor(tag) => {
                let Some(id) = actor else {
                    return;
                };
                if self.actor(id).map(Actor::tag) != Some(tag) {
                    return;
                }
                self.remove_actor(id);
                if self.no_more_actors(ActorTag::Coin) {
                    self.set_status(LevelStatus::Won);
                }
            }
            Touch::Obstacle(Obstacle::Wall) => {}
        }
    }

    fn set_status(&mut self, status: LevelStatus) {
        log::info!("Level {:?}", status);
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn open_grid(width: usize, height: usize) -> Grid {
        Grid::new(vec![vec![None; width]; height])
    }

    /// Player at (1,1), coin at (3,1)
    fn player_and_coin() -> (Level, ActorId) {
        let mut rng = Pcg32::seed_from_u64(3);
        let level = Level::new(
            open_grid(5, 3),
            vec![
                Actor::player(Vec2::new(1.0, 1.0)),
                Actor::coin(Vec2::new(3.0, 1.0), &mut rng),
            ],
        );
        let coin = level.actors()[1].id;
        (level, coin)
    }

    #[test]
    fn test_construction() {
        let (level, _) = player_and_coin();
        assert_eq!(level.width(), 5);
        assert_eq!(level.height(), 3);
        assert_eq!(level.status(), LevelStatus::Playing);
        assert_eq!(level.finish_delay, FINISH_DELAY);
        assert!(!level.is_finished());
        assert_eq!(level.player().map(Actor::tag), Some(ActorTag::Player));

        // Insertion order is kept and IDs are distinct
        assert_eq!(level.actors()[0].tag(), ActorTag::Player);
        assert_ne!(level.actors()[0].id, level.actors()[1].id);
    }

    #[test]
    fn test_player_is_first_tagged_actor() {
        let level = Level::new(
            open_grid(3, 3),
            vec![
                Actor::horizontal_fireball(Vec2::ZERO),
                Actor::player(Vec2::new(1.0, 1.0)),
                Actor::player(Vec2::new(2.0, 1.0)),
            ],
        );
        assert_eq!(level.player_id(), Some(level.actors()[1].id));
    }

    #[test]
    fn test_no_player() {
        let mut level = Level::new(open_grid(2, 2), Vec::new());
        assert!(level.player().is_none());
        assert!(level.player_mut().is_none());
        assert_eq!(level.width(), 2);
    }

    #[test]
    fn test_actor_at() {
        let level = Level::new(
            open_grid(5, 5),
            vec![
                Actor::horizontal_fireball(Vec2::new(0.0, 0.0)),
                Actor::vertical_fireball(Vec2::new(0.5, 0.0)),
                Actor::fire_rain(Vec2::new(3.0, 3.0)),
            ],
        );
        let ids: Vec<_> = level.actors().iter().map(|a| a.id).collect();
        let first = &level.actors()[0];
        // Overlaps the second; self is skipped
        let hit = level.actor_at(first).map(|a| a.id);
        assert_eq!(hit, Some(ids[1]));

        // A box outside the level overlapping the first two; insertion order wins
        let mut probe = Actor::default();
        probe.pos = Vec2::new(0.2, 0.2);
        assert_eq!(level.actor_at(&probe).map(|a| a.id), Some(ids[0]));

        probe.pos = Vec2::new(2.0, 2.0);
        assert!(level.actor_at(&probe).is_none());
    }

    #[test]
    fn test_remove_actor_is_by_identity() {
        // Two coins with equal positions are still distinct actors
        let mut rng = Pcg32::seed_from_u64(9);
        let mut level = Level::new(
            open_grid(3, 3),
            vec![
                Actor::coin(Vec2::ONE, &mut rng),
                Actor::coin(Vec2::ONE, &mut rng),
            ],
        );
        let (first, second) = (level.actors()[0].id, level.actors()[1].id);
        let removed = level.remove_actor(first);
        assert_eq!(removed.map(|a| a.id), Some(first));
        assert_eq!(level.actors().len(), 1);
        assert_eq!(level.actors()[0].id, second);

        assert!(level.remove_actor(first).is_none());
        assert_eq!(level.actors().len(), 1);
    }

    #[test]
    fn test_no_more_actors() {
        let (mut level, coin) = player_and_coin();
        assert!(!level.no_more_actors(ActorTag::Coin));
        assert!(level.no_more_actors(ActorTag::Fireball));
        level.remove_actor(coin);
        assert!(level.no_more_actors(ActorTag::Coin));
    }

    #[test]
    fn test_last_coin_wins() {
        let (mut level, coin) = player_and_coin();
        level.player_touched(Touch::Actor(ActorTag::Coin), Some(coin));
        assert!(level.actor(coin).is_none());
        assert_eq!(level.status(), LevelStatus::Won);
    }

    #[test]
    fn test_coin_with_others_remaining() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut level = Level::new(
            open_grid(5, 3),
            vec![
                Actor::player(Vec2::ONE),
                Actor::coin(Vec2::new(2.0, 1.0), &mut rng),
                Actor::coin(Vec2::new(3.0, 1.0), &mut rng),
            ],
        );
        let (a, b) = (level.actors()[1].id, level.actors()[2].id);
        level.player_touched(Touch::Actor(ActorTag::Coin), Some(a));
        assert_eq!(level.status(), LevelStatus::Playing);
        assert_eq!(level.actors().len(), 2);

        level.player_touched(Touch::Actor(ActorTag::Coin), Some(b));
        assert_eq!(level.status(), LevelStatus::Won);
    }

    #[test]
    fn test_lava_loses_with_coins_left() {
        let (mut level, _) = player_and_coin();
        level.player_touched(Touch::Obstacle(Obstacle::Lava), None);
        assert_eq!(level.status(), LevelStatus::Lost);
        assert_eq!(level.actors().len(), 2);
    }

    #[test]
    fn test_fireball_loses() {
        let (mut level, _) = player_and_coin();
        level.player_touched(Touch::Actor(ActorTag::Fireball), None);
        assert_eq!(level.status(), LevelStatus::Lost);
    }

    #[test]
    fn test_status_is_terminal_once_set() {
        let (mut level, coin) = player_and_coin();
        level.player_touched(Touch::Obstacle(Obstacle::Lava), None);
        level.player_touched(Touch::Actor(ActorTag::Coin), Some(coin));
        assert_eq!(level.status(), LevelStatus::Lost);
        assert!(level.actor(coin).is_some());

        let (mut level, coin) = player_and_coin();
        level.player_touched(Touch::Actor(ActorTag::Coin), Some(coin));
        level.player_touched(Touch::Obstacle(Obstacle::Lava), None);
        assert_eq!(level.status(), LevelStatus::Won);
    }

    #[test]
    fn test_mismatched_or_inert_touches() {
        let (mut level, coin) = player_and_coin();
        // Tag doesn't match the actor
        level.player_touched(Touch::Actor(ActorTag::Player), Some(coin));
        // Walls are harmless
        level.player_touched(Touch::Obstacle(Obstacle::Wall), None);
        // Coin tag without an actor
        level.player_touched(Touch::Actor(ActorTag::Coin), None);
        assert_eq!(level.status(), LevelStatus::Playing);
        assert_eq!(level.actors().len(), 2);
    }

    #[test]
    fn test_actorless_touch_does_not_win() {
        // No coins at all, yet a bare coin touch still decides nothing
        let mut level = Level::new(open_grid(3, 3), vec![Actor::player(Vec2::ONE)]);
        level.player_touched(Touch::Actor(ActorTag::Coin), None);
        assert_eq!(level.status(), LevelStatus::Playing);
    }

    #[test]
    fn test_clone_gets_fresh_id_on_insert() {
        let (mut level, coin) = player_and_coin();
        let copy = level.actor(coin).cloned().unwrap();
        let copy_id = level.add_actor(copy);
        assert_ne!(copy_id, coin);
        assert_eq!(level.actors().len(), 3);

        level.remove_actor(coin);
        assert!(level.actor(copy_id).is_some());
    }

    #[test]
    fn test_levels_do_not_share_actor_ids() {
        let (a, _) = player_and_coin();
        let (b, _) = player_and_coin();
        let player_a = a.player().unwrap();
        let mut player_b = b.player().cloned().unwrap();
        player_b.pos = player_a.pos;
        assert!(player_a.is_intersect(&player_b));
    }

    #[test]
    fn test_is_finished_needs_expired_delay() {
        let (mut level, coin) = player_and_coin();
        level.player_touched(Touch::Actor(ActorTag::Coin), Some(coin));
        assert!(!level.is_finished());
        level.finish_delay = 0.0;
        assert!(!level.is_finished());
        level.finish_delay = -0.01;
        assert!(level.is_finished());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let (level, _) = player_and_coin();
        let json = serde_json::to_string(&level).unwrap();
        let restored: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.actors(), level.actors());
        assert_eq!(restored.player_id(), level.player_id());
        assert_eq!(restored.grid, level.grid);
    }
}
