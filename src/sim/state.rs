//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives here, owned by the frame loop.

use serde::{Deserialize, Serialize};

use super::projectile::Projectile;
use super::target::Target;
use crate::config::GameConfig;
use crate::consts::BALL_COUNT;

/// Something worth reporting that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ball struck the target; `hits` is the counter after this strike
    Hit { slot: usize, hits: u32 },
    /// A ball was sent home and aimed again
    Relaunch { slot: usize },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub target: Target,
    /// Fixed roster, iterated in slot order
    pub balls: [Projectile; BALL_COUNT],
    /// Strikes scored so far
    pub hits: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let target = Target::new(&config);
        let balls = std::array::from_fn(|slot| Projectile::new(slot, &config));

        Self {
            config,
            target,
            balls,
            hits: 0,
            time_ticks: 0,
            events: Vec::with_capacity(BALL_COUNT * 2),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
