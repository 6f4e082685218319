//! Fixed-period simulation tick
//!
//! One call advances a session by exactly one tick. Components update in a
//! fixed order: player, enemies, food, trail. Enemies test collisions against
//! the player position already advanced this tick, and the trail samples the
//! post-update pose. Once the player is hit, the player and enemies hold still
//! while the food cycle keeps running alongside the explosion.

use super::autopilot;
use super::food::FoodOutcome;
use super::input::TickInput;
use super::state::{GameEvent, GamePhase, GameSession};

/// Advance the session by one tick
pub fn tick(session: &mut GameSession, input: &TickInput) {
    if input.restart {
        session.restart();
    }

    match session.phase {
        GamePhase::GameOver => return,
        GamePhase::Ready => {
            session.begin();
            return;
        }
        GamePhase::Playing | GamePhase::Dying => {}
    }

    // Degenerate arena: hold everything until the host lays out again
    if !session.bounds.is_ready() {
        return;
    }

    session.time_ticks += 1;

    match session.phase {
        GamePhase::Playing => tick_playing(session, input),
        GamePhase::Dying => {
            tick_food(session);
            session.advance_explosion();
        }
        GamePhase::Ready | GamePhase::GameOver => {}
    }
}

fn tick_playing(session: &mut GameSession, input: &TickInput) {
    let offset = if input.idle_mode {
        autopilot::steer(session)
    } else {
        input.effective_offset()
    };

    session.player.update(offset, &session.bounds);

    let player = session.player.coords;
    if let Some(index) = session
        .enemies
        .update(&mut session.rng, &session.bounds, player)
    {
        session.enter_dying(index);
        tick_food(session);
        return;
    }

    tick_food(session);
    session.trail.update(&mut session.rng, &session.player);
}

fn tick_food(session: &mut GameSession) {
    let now = session.time_ticks;
    let player = session.player.coords;
    match session
        .food
        .update(&mut session.rng, &session.bounds, player, now)
    {
        Some(FoodOutcome::Eaten { points }) => {
            session.score += points;
            session.push_event(GameEvent::FoodEaten { points });
            log::debug!("Food eaten for {} points (score {})", points, session.score);
        }
        Some(FoodOutcome::Expired) => {
            session.push_event(GameEvent::FoodExpired);
            log::debug!("Food expired at tick {}", now);
        }
        None => {}
    }
}
