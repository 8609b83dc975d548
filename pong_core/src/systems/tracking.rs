use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Drive the AI paddle towards the ball's current position
pub fn track_ball(world: &mut World, config: &Config) {
    let ball = match world.query::<&Ball>().iter().next().map(|(_e, b)| *b) {
        Some(ball) => ball,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Ai {
            paddle.auto_track(&ball, config.arena_height);
        }
    }
}
