use crate::{Ball, Config, Events, Score, ServeRng, Side};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut dyn ServeRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x <= 0.0 {
            Side::Ai
        } else if ball.pos.x >= config.arena_width {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Player => events.player_scored = true,
            Side::Ai => events.ai_scored = true,
        }
        tracing::debug!(
            %scorer,
            player = score.player,
            ai = score.ai,
            "point scored"
        );

        ball.reset(config.ball_speed_y, rng);
    }
}
