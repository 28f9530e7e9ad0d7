//! Spider dive cycle.
//!
//! Idle spiders sit pinned to the formation rest line until their timer
//! expires and a tier-scaled roll succeeds, then dive, fire once at the
//! bottom of the dive, and climb back to re-arm.

use rand::Rng;

use invaders_core::constants::*;
use invaders_core::enums::SpiderState;

/// Input to the dive cycle for one spider, one frame.
pub struct SpiderContext {
    pub state: SpiderState,
    pub timer: f64,
    pub y: f64,
    /// Rest line the spider dives from and returns to.
    pub base_y: f64,
    /// Per-frame dive trigger chance once the timer has expired.
    pub drop_chance: f64,
    pub dive_speed: f64,
    pub return_speed: f64,
}

/// Output of one dive-cycle step.
pub struct SpiderUpdate {
    pub state: SpiderState,
    pub timer: f64,
    pub y: f64,
    /// True exactly on the frame the spider reaches the bottom of its
    /// dive and fires.
    pub fires: bool,
}

/// Advance the dive cycle by one frame.
pub fn advance<R: Rng>(ctx: &SpiderContext, rng: &mut R) -> SpiderUpdate {
    let mut update = SpiderUpdate {
        state: ctx.state,
        timer: ctx.timer,
        y: ctx.y,
        fires: false,
    };

    match ctx.state {
        SpiderState::Idle => {
            update.y = ctx.base_y;
            update.timer = ctx.timer - 1.0;
            if update.timer <= 0.0 && rng.gen_bool(ctx.drop_chance.clamp(0.0, 1.0)) {
                update.state = SpiderState::Attacking;
            }
        }
        SpiderState::Attacking => {
            update.y = ctx.y + ctx.dive_speed;
            if update.y > ctx.base_y + SPIDER_DIVE_DEPTH {
                update.state = SpiderState::Returning;
                update.fires = true;
            }
        }
        SpiderState::Returning => {
            update.y = ctx.y - ctx.return_speed;
            if update.y <= ctx.base_y {
                update.y = ctx.base_y;
                update.state = SpiderState::Idle;
                update.timer = SPIDER_REARM_BASE + rng.gen_range(0.0..SPIDER_REARM_SPAN);
            }
        }
    }

    update
}
