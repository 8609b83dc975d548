use crate::{Ball, Config, Events, InputState, Paddle, Side};
use hecs::World;

/// Apply held keys to the player's paddle
pub fn move_player(world: &mut World, input: InputState, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }
        if input.up {
            paddle.move_by(-config.player_step, config.arena_height);
        }
        if input.down {
            paddle.move_by(config.player_step, config.arena_height);
        }
    }
}

/// Move ball based on velocity, reflecting off top and bottom walls
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(config.arena_height) {
            events.ball_hit_wall = true;
        }
    }
}
