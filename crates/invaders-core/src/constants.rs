//! Simulation constants and tuning parameters.
//!
//! All speeds are in pixels per frame, all durations in frames (one
//! simulation step per frame). The empirically-tuned probability and
//! scaling constants are configuration; changing them changes observed
//! difficulty.

// --- Arena ---

/// Default arena width in pixels.
pub const ARENA_WIDTH: f64 = 800.0;

/// Default arena height in pixels.
pub const ARENA_HEIGHT: f64 = 600.0;

// --- Player ---

pub const PLAYER_WIDTH: f64 = 40.0;
pub const PLAYER_HEIGHT: f64 = 30.0;

/// Horizontal movement per frame while a direction key is held.
pub const PLAYER_SPEED: f64 = 6.0;

/// Starting (and reset) life count.
pub const PLAYER_LIVES: u32 = 3;

/// Gap between the player's underside and the bottom edge at spawn.
pub const PLAYER_BOTTOM_MARGIN: f64 = 10.0;

// --- Bullets ---

/// Upward speed of player bullets.
pub const BULLET_SPEED: f64 = 8.0;

pub const PLAYER_BULLET_WIDTH: f64 = 4.0;
pub const PLAYER_BULLET_HEIGHT: f64 = 12.0;
pub const ENEMY_BULLET_WIDTH: f64 = 4.0;
pub const ENEMY_BULLET_HEIGHT: f64 = 10.0;

/// Base downward speed of enemy bullets, before the tier multiplier.
pub const ENEMY_BULLET_SPEED: f64 = 4.0;

/// Frames between player shots with the default weapon.
pub const FIRE_COOLDOWN: u32 = 25;

/// Frames between player shots with the rapid-fire power-up.
pub const RAPID_FIRE_COOLDOWN: u32 = 8;

/// Default damage applied when a bullet has no explicit value.
pub const DEFAULT_BULLET_DAMAGE: f64 = 10.0;

/// Bullets survive this far above the top edge before despawning, so
/// long-traveling beams can finish crossing the arena.
pub const BULLET_TOP_MARGIN: f64 = 100.0;

/// Horizontal spread of the two outer multi-shot bullets.
pub const MULTI_SHOT_OFFSET: f64 = 10.0;
pub const MULTI_SHOT_DRIFT: f64 = 2.0;

// --- Charge weapon ---

/// Frames of held fire for a full charge.
pub const MAX_CHARGE_FRAMES: u32 = 90;

/// A charge tick audio cue fires every this many charge frames.
pub const CHARGE_TICK_INTERVAL: u32 = 10;

/// Forced cooldown after releasing a beam.
pub const CHARGE_RECOIL_COOLDOWN: u32 = 20;

/// Beam width at zero and full charge.
pub const BEAM_MIN_WIDTH: f64 = 8.0;
pub const BEAM_MAX_WIDTH: f64 = 80.0;

/// Extra damage at full charge, on top of the default bullet damage.
pub const BEAM_CHARGE_DAMAGE: f64 = 100.0;

/// Beam kinematics and spawn geometry.
pub const BEAM_SPEED: f64 = 20.0;
pub const BEAM_HEIGHT: f64 = 60.0;
pub const BEAM_MUZZLE_OFFSET: f64 = 40.0;

// --- Formation grid ---

pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 8;

/// Horizontal distance between grid columns.
pub const GRID_COL_PITCH: f64 = 50.0;

/// Vertical distance between grid rows.
pub const GRID_ROW_PITCH: f64 = 40.0;

/// Y coordinate of the top grid row at level start.
pub const GRID_START_Y: f64 = 60.0;

pub const ENEMY_WIDTH: f64 = 30.0;
pub const ENEMY_HEIGHT: f64 = 24.0;

/// Vertical drop when the formation reaches an arena edge.
pub const ENEMY_DROP_DISTANCE: f64 = 20.0;

/// Point values per grid kind, before the tier bonus.
pub const SQUID_VALUE: u32 = 10;
pub const CRAB_VALUE: u32 = 20;
pub const OCTOPUS_VALUE: u32 = 30;
pub const WORM_VALUE: u32 = 35;
pub const SPIDER_VALUE: u32 = 40;
pub const FLYER_VALUE: u32 = 60;

/// Level gates for the mixed-formation kinds.
pub const SPIDER_MIN_LEVEL: u32 = 2;
pub const WORM_MIN_LEVEL: u32 = 3;
pub const FLYER_MIN_LEVEL: u32 = 4;

/// Nominal full-wave enemy count used by the late-wave fire pressure bonus.
pub const FULL_WAVE_SIZE: f64 = 32.0;

// --- Worm ---

pub const WORM_WIGGLE_AMPLITUDE: f64 = 10.0;
pub const WORM_WIGGLE_WAVELENGTH: f64 = 20.0;

// --- Spider ---

/// How far below the rest line a diving spider travels before firing.
pub const SPIDER_DIVE_DEPTH: f64 = 150.0;

/// Re-arm timer after a dive: base + random span.
pub const SPIDER_REARM_BASE: f64 = 100.0;
pub const SPIDER_REARM_SPAN: f64 = 200.0;

/// Span of the randomized initial timer at spawn.
pub const SPIDER_INITIAL_TIMER_SPAN: f64 = 200.0;

// --- Flyers ---

pub const FLYER_WIDTH: f64 = 30.0;
pub const FLYER_HEIGHT: f64 = 20.0;

/// Vertical band flyers oscillate within.
pub const FLYER_BAND_TOP: f64 = 20.0;
pub const FLYER_BAND_BOTTOM: f64 = 200.0;

/// Spawn band for initial flyer y positions.
pub const FLYER_SPAWN_Y_MIN: f64 = 30.0;
pub const FLYER_SPAWN_Y_SPAN: f64 = 50.0;

/// A trail particle is emitted every this many frames.
pub const FLYER_TRAIL_INTERVAL: u64 = 5;
pub const FLYER_TRAIL_LIFE: u32 = 15;

/// Hard cap on flyers per level.
pub const FLYER_MAX_COUNT: u32 = 5;

// --- Boss ---

/// Every Nth level is a boss level.
pub const BOSS_LEVEL_INTERVAL: u32 = 3;

/// Boss health = level * per-level + tier * per-tier.
pub const BOSS_HEALTH_PER_LEVEL: f64 = 100.0;
pub const BOSS_HEALTH_PER_TIER: f64 = 500.0;

/// Boss point value = base * (tier + 1).
pub const BOSS_VALUE_BASE: u32 = 1000;

/// Y coordinate of the boss at spawn.
pub const BOSS_START_Y: f64 = 80.0;

/// Sway phase advances by frame / period.
pub const BOSS_SWAY_PERIOD: f64 = 50.0;

/// Idle frames before an attack: max(floor, base - tier * step).
pub const BOSS_IDLE_BASE: u32 = 100;
pub const BOSS_IDLE_FLOOR: u32 = 40;
pub const BOSS_IDLE_PER_TIER: u32 = 10;

/// Attack durations in attack-frames.
pub const BOSS_SPREAD_DURATION: u32 = 20;
pub const BOSS_AIMED_DURATION: u32 = 20;
pub const BOSS_HOMING_DURATION: u32 = 60;
pub const BOSS_SWEEP_DURATION: u32 = 80;

/// Homing salvo: one launch every interval within the window.
pub const BOSS_HOMING_INTERVAL: u32 = 15;
pub const BOSS_HOMING_WINDOW: u32 = 45;

/// Sweep: one laser every cadence frames while below the window.
pub const BOSS_SWEEP_CADENCE: u32 = 3;
pub const BOSS_SWEEP_WINDOW: u32 = 60;

/// Muzzle speed of aimed and sweep shots, before the tier multiplier.
pub const BOSS_SHOT_SPEED: f64 = 6.0;

/// Spread shots travel at the enemy bullet speed times this factor.
pub const BOSS_SPREAD_SPEED_FACTOR: f64 = 1.2;

/// Horizontal muzzle jitter of homing launches (plus or minus).
pub const BOSS_HOMING_JITTER: f64 = 30.0;

/// Initial downward speed of a homing bullet; steering takes over later.
pub const BOSS_HOMING_DROP_SPEED: f64 = 3.0;

// --- Homing steering ---

/// Per-frame blend factor toward the intercept vector.
pub const HOMING_BLEND_RATE: f64 = 0.03;

/// Horizontal decay once the bullet has passed the player.
pub const HOMING_DECAY: f64 = 0.8;

// --- Power-ups ---

/// Chance an enemy death drops a power-up.
pub const POWERUP_DROP_RATE: f64 = 0.15;

/// Active power-up duration in frames (~10 seconds at 60fps).
pub const POWERUP_DURATION: u32 = 600;

pub const POWERUP_SIZE: f64 = 20.0;
pub const POWERUP_FALL_SPEED: f64 = 3.0;

/// Cumulative rarity bands for the drop roll:
/// rapid 60%, multi 25%, shield 10%, laser 5%.
pub const POWERUP_BAND_MULTI: f64 = 0.60;
pub const POWERUP_BAND_SHIELD: f64 = 0.85;
pub const POWERUP_BAND_LASER: f64 = 0.95;

// --- Ambient enemy fire ---

/// Per-frame fire chance: base + level and tier increments + a bonus that
/// grows as the wave thins out.
pub const AMBIENT_FIRE_BASE: f64 = 0.008;
pub const AMBIENT_FIRE_PER_LEVEL: f64 = 0.002;
pub const AMBIENT_FIRE_PER_TIER: f64 = 0.005;
pub const AMBIENT_FIRE_SCARCITY_BONUS: f64 = 0.02;

// --- Difficulty scaling ---

/// Grid speed: base + level and tier increments.
pub const GRID_SPEED_BASE: f64 = 1.0;
pub const GRID_SPEED_PER_LEVEL: f64 = 0.1;
pub const GRID_SPEED_PER_TIER: f64 = 0.5;

/// Enemy bullet speed multiplier per tier.
pub const BULLET_SPEED_PER_TIER: f64 = 0.2;

/// Boss sway amplitude: base + tier.
pub const BOSS_SWAY_BASE: f64 = 4.0;

/// Spider dive trigger and speeds.
pub const SPIDER_DROP_CHANCE_BASE: f64 = 0.01;
pub const SPIDER_DROP_CHANCE_PER_TIER: f64 = 0.005;
pub const SPIDER_DIVE_SPEED_BASE: f64 = 4.0;
pub const SPIDER_RETURN_SPEED_BASE: f64 = 3.0;

/// Homing bullet top speed: base + tier increment.
pub const HOMING_SPEED_BASE: f64 = 3.5;
pub const HOMING_SPEED_PER_TIER: f64 = 0.5;

/// Flyer speed: base + tier increment.
pub const FLYER_SPEED_BASE: f64 = 2.0;
pub const FLYER_SPEED_PER_TIER: f64 = 0.5;

// --- Particles ---

/// Explosion spark lifetime in frames.
pub const PARTICLE_LIFE: u32 = 40;

/// Spark counts for the various impact flavors.
pub const EXPLOSION_PARTICLES: u32 = 10;
pub const BOSS_EXPLOSION_PARTICLES: u32 = 50;
pub const IMPACT_PARTICLES: u32 = 3;
pub const SHIELD_POP_PARTICLES: u32 = 5;
pub const BEAM_IMPACT_PARTICLES: u32 = 5;
