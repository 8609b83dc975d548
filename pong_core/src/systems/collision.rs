use crate::{Ball, Events, Paddle, Side};
use hecs::World;

/// Find the paddle defending `side`
pub(crate) fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}

/// Check ball collisions with both paddles
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Copy paddles out first so the ball can be borrowed mutably
    let (player, ai) = match (
        find_paddle(world, Side::Player),
        find_paddle(world, Side::Ai),
    ) {
        (Some(player), Some(ai)) => (player, ai),
        _ => return, // Paddles not spawned
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let old_vx = ball.vel.x;
        ball.check_collision(&player, &ai);

        // A double bounce in one frame cancels out and counts as no hit
        if ball.vel.x != old_vx {
            events.ball_hit_paddle = true;
        }
    }
}
