//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs
//! all systems once per frame, and produces `GameSnapshot`s. Completely
//! headless, enabling deterministic testing: the same seed and the same
//! input sequence replay the same game.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invaders_core::commands::{InputState, PlayerCommand};
use invaders_core::components::{Active, Enemy, PlayerShip};
use invaders_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use invaders_core::difficulty::Difficulty;
use invaders_core::enums::GamePhase;
use invaders_core::events::{AudioEvent, GameEvent};
use invaders_core::state::GameSnapshot;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Arena size in pixels.
    pub width: f64,
    pub height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    width: f64,
    height: f64,
    phase: GamePhase,
    frame: u64,
    level: u32,
    score: u32,
    /// Shared horizontal sign of the formation march.
    grid_direction: f64,
    /// Set once the current wave has been cleared, so the completion
    /// event fires exactly once per level.
    level_complete: bool,
    rng: ChaCha8Rng,
    next_enemy_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    audio: Vec<AudioEvent>,
}

impl GameEngine {
    /// Create a new engine with the given config. The world starts in the
    /// menu phase with a ship spawned and ready.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        world_setup::spawn_player(&mut world, config.width, config.height);

        Self {
            world,
            width: config.width,
            height: config.height,
            phase: GamePhase::default(),
            frame: 0,
            level: 1,
            score: 0,
            grid_direction: 1.0,
            level_complete: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            audio: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot. Outside the `Playing` phase the world is frozen and only
    /// commands are processed.
    pub fn step(&mut self, input: &InputState) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems(input);
            self.frame += 1;
        }

        let events = std::mem::take(&mut self.events);
        let audio = std::mem::take(&mut self.audio);
        systems::snapshot::build(
            &self.world,
            self.frame,
            self.phase,
            self.level,
            self.score,
            events,
            audio,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn lives(&self) -> u32 {
        systems::snapshot::lives(&self.world)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that need to stage exact scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(
                    self.phase,
                    GamePhase::Menu | GamePhase::GameOver | GamePhase::Victory
                ) {
                    log::info!("starting new run");
                    self.score = 0;
                    self.frame = 0;
                    world_setup::reset_player(&mut self.world, self.width, self.height);
                    world_setup::clear_particles(&mut self.world);
                    self.begin_level(1);
                    self.events.push(GameEvent::ScoreChanged { score: 0 });
                    self.events.push(GameEvent::LivesChanged {
                        lives: self.lives(),
                    });
                }
            }
            PlayerCommand::StartLevel { level } => {
                log::info!("starting level {level}");
                world_setup::recenter_player(&mut self.world, self.width, self.height);
                self.begin_level(level.max(1));
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.phase = GamePhase::Menu;
            }
        }
    }

    /// Clear the previous wave and spawn the new one.
    fn begin_level(&mut self, level: u32) {
        self.level = level;
        self.level_complete = false;
        self.grid_direction = 1.0;
        world_setup::clear_level_entities(&mut self.world);
        world_setup::start_level(
            &mut self.world,
            &mut self.rng,
            &mut self.next_enemy_id,
            level,
            self.width,
        );
        self.phase = GamePhase::Playing;
    }

    /// Run all systems for one frame, in a fixed order: player, movement
    /// and steering, wave behavior, collisions, cleanup, then phase
    /// transitions.
    fn run_systems(&mut self, input: &InputState) {
        let diff = Difficulty::for_level(self.level);
        let score_before = self.score;
        let lives_before = self.lives();

        systems::player::run(&mut self.world, input, self.width, &mut self.audio);
        systems::projectile::run(&mut self.world, &diff, self.height);
        systems::projectile::run_power_ups(&mut self.world, self.height);

        let mut breached = false;
        if systems::boss::has_boss(&self.world) {
            systems::boss::run(
                &mut self.world,
                &mut self.rng,
                self.frame,
                &diff,
                self.width,
                &mut self.audio,
            );
        } else {
            systems::formation::run(
                &mut self.world,
                &mut self.rng,
                &diff,
                &mut self.grid_direction,
                self.width,
                &mut self.audio,
            );
            systems::flyer::run(&mut self.world, &mut self.rng, self.frame, self.width);
            breached = systems::formation::breached(&self.world);
            systems::formation::ambient_fire(
                &mut self.world,
                &mut self.rng,
                &diff,
                &mut self.audio,
            );
        }

        systems::particle::run(&mut self.world);

        let report = systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.score,
            &mut self.audio,
        );

        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        if breached {
            // The wave reaching the player's line ends the run outright.
            for (_, (ship, active)) in self.world.query_mut::<(&mut PlayerShip, &mut Active)>() {
                ship.lives = 0;
                active.0 = false;
            }
        }

        if self.score != score_before {
            self.events.push(GameEvent::ScoreChanged { score: self.score });
        }
        let lives_now = self.lives();
        if lives_now != lives_before {
            self.events.push(GameEvent::LivesChanged { lives: lives_now });
        }

        if report.player_dead || breached {
            log::info!(
                "game over at level {} with score {}",
                self.level,
                self.score
            );
            self.events.push(GameEvent::GameOver);
            self.phase = GamePhase::GameOver;
            return;
        }
        if report.player_hit {
            self.events.push(GameEvent::PlayerHit);
        }

        if !self.level_complete && !self.any_enemies_left() {
            log::info!("level {} cleared, score {}", self.level, self.score);
            self.level_complete = true;
            self.events.push(GameEvent::LevelComplete);
            self.phase = GamePhase::Victory;
        }
    }

    fn any_enemies_left(&self) -> bool {
        self.world
            .query::<(&Enemy, &Active)>()
            .iter()
            .any(|(_, (_, active))| active.0)
    }
}
