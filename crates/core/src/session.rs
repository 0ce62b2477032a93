//! Level/session state machine.
//!
//! Wraps the per-attempt [`SessionState`] with everything that outlives
//! it: the validated level catalog, persistent progression, the status
//! machine (title → intro → playing ↔ paused → victory/game-over, with
//! the upgrade interstitial between levels), and the event buffer the
//! presentation layer drains.
//!
//! Only the Playing status simulates. The frame loop is expected to stop
//! scheduling ticks whenever the session leaves Playing and resume when
//! it re-enters; a tick called in any other status is a no-op apart from
//! the pause/mute key edges.

use crate::events::{GameEvent, MusicRole};
use crate::input::FrameInput;
use crate::level::{LevelCatalog, LevelData};
use crate::progression::{Progression, UpgradeLevels, UpgradeStat};
use crate::sim::{self, TickOutcome};
use crate::state::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Title,
    /// Level-intro interstitial before play begins.
    Intro,
    Playing,
    Paused,
    /// The level's goal was reached.
    Victory,
    /// Spend experience between levels.
    Upgrade,
    GameOver,
}

/// Per-tick snapshot for the HUD and progression display.
#[derive(Debug, Clone)]
pub struct HudSnapshot {
    pub health: f32,
    pub max_health: f32,
    pub mana: f32,
    pub max_mana: f32,
    pub score: u32,
    pub experience: u32,
    pub level_index: usize,
    pub level_count: usize,
    pub lives: u32,
    pub is_werewolf: bool,
    pub werewolf_timer: u32,
    pub upgrades: UpgradeLevels,
    pub muted: bool,
}

pub struct GameSession {
    catalog: LevelCatalog,
    seed: u32,
    status: GameStatus,
    progression: Progression,
    level_index: usize,
    muted: bool,
    state: Option<SessionState>,
    prev_input: FrameInput,
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(catalog: LevelCatalog, seed: u32) -> Self {
        Self {
            catalog,
            seed,
            status: GameStatus::Title,
            progression: Progression::new(),
            level_index: 0,
            muted: false,
            state: None,
            prev_input: FrameInput::new(),
            events: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Read-only view of the live attempt, for the render contract.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Begin a new run from the title (or game-over) screen: fresh
    /// progression, level zero, intro interstitial.
    pub fn start(&mut self) {
        if !matches!(self.status, GameStatus::Title | GameStatus::GameOver) {
            return;
        }
        self.progression = Progression::new();
        self.load_level(0);
        self.status = GameStatus::Intro;
    }

    /// Leave the intro and enter play. Resumes tick scheduling.
    pub fn begin_level(&mut self) {
        if self.status != GameStatus::Intro {
            return;
        }
        let role = if self
            .catalog
            .get(self.level_index)
            .is_some_and(LevelData::has_boss)
        {
            MusicRole::Boss
        } else {
            MusicRole::Stage
        };
        self.events.push(GameEvent::MusicChange(role));
        self.status = GameStatus::Playing;
    }

    /// Advance one tick with the polled input snapshot.
    pub fn tick(&mut self, input: FrameInput) {
        let pause_edge = input.pause() && !self.prev_input.pause();
        let mute_edge = input.mute() && !self.prev_input.mute();
        self.prev_input = input;

        if mute_edge {
            self.muted = !self.muted;
        }

        match self.status {
            GameStatus::Playing => {
                if pause_edge {
                    self.status = GameStatus::Paused;
                    return;
                }
                let Some(state) = &mut self.state else {
                    return;
                };
                let outcome = sim::tick(state, input);
                self.progression.experience += state.take_experience();
                self.events.extend(state.events.drain(..));

                match outcome {
                    TickOutcome::Continue => {}
                    TickOutcome::GoalReached => {
                        tracing::info!(level = self.level_index, "goal reached");
                        self.status = GameStatus::Victory;
                    }
                    TickOutcome::PlayerDied => self.handle_death(),
                }
            }
            GameStatus::Paused => {
                if pause_edge {
                    self.status = GameStatus::Playing;
                }
            }
            _ => {}
        }
    }

    fn handle_death(&mut self) {
        self.events.push(GameEvent::PlayerDied);
        self.progression.lives = self.progression.lives.saturating_sub(1);
        if self.progression.lives == 0 {
            tracing::info!("out of lives, game over");
            self.events.push(GameEvent::GameOver);
            self.status = GameStatus::GameOver;
            self.state = None;
        } else {
            // Rebuild the level fresh; experience, upgrades and the
            // decremented lives counter carry over.
            tracing::info!(lives = self.progression.lives, "restarting level");
            self.load_level(self.level_index);
        }
    }

    /// Leave the victory screen: into the upgrade interstitial, or back
    /// to the title after the final level.
    pub fn advance(&mut self) {
        if self.status != GameStatus::Victory {
            return;
        }
        if self.catalog.is_last(self.level_index) {
            self.status = GameStatus::Title;
            self.state = None;
        } else {
            self.status = GameStatus::Upgrade;
        }
    }

    /// Spend experience on an upgrade tier. Valid only in the upgrade
    /// interstitial; anything invalid silently no-ops.
    pub fn purchase(&mut self, stat: UpgradeStat) -> bool {
        if self.status != GameStatus::Upgrade {
            return false;
        }
        let bought = self.progression.purchase(stat);
        if bought {
            self.events.push(GameEvent::UpgradePurchased);
        }
        bought
    }

    /// Leave the upgrade interstitial for the next level's intro.
    pub fn finish_upgrades(&mut self) {
        if self.status != GameStatus::Upgrade {
            return;
        }
        self.load_level(self.level_index + 1);
        self.status = GameStatus::Intro;
    }

    fn load_level(&mut self, index: usize) {
        let Some(level) = self.catalog.get(index) else {
            tracing::warn!(index, "level index out of range");
            return;
        };
        tracing::info!(level = index, "loading level");
        self.level_index = index;
        let seed = self.seed.wrapping_add(index as u32);
        self.state = Some(SessionState::from_level(level, &self.progression, index, seed));
    }

    /// Drain the cues emitted since the last call. Fire-and-forget: the
    /// core never waits on the consumer.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Per-tick snapshot for the HUD. None outside a live attempt.
    pub fn hud(&self) -> Option<HudSnapshot> {
        let state = self.state.as_ref()?;
        Some(HudSnapshot {
            health: state.player.health,
            max_health: state.player.max_health,
            mana: state.player.mana,
            max_mana: state.player.max_mana,
            score: state.score,
            experience: self.progression.experience,
            level_index: self.level_index,
            level_count: self.catalog.len(),
            lives: self.progression.lives,
            is_werewolf: state.player.is_werewolf,
            werewolf_timer: state.player.werewolf_timer,
            upgrades: self.progression.upgrades,
            muted: self.muted,
        })
    }
}
