pub mod aabb;
pub mod components;
pub mod config;
pub mod engine;
pub mod fsm;
pub mod hooks;
pub mod input;
pub mod params;
pub mod resources;
pub mod systems;

pub use aabb::*;
pub use components::*;
pub use config::*;
pub use engine::*;
pub use fsm::*;
pub use hooks::*;
pub use input::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed frame of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut dyn ServeRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball, reflecting off top/bottom walls
    move_ball(world, config, events);

    // 2. Check collisions (ball vs paddles)
    check_collisions(world, events);

    // 3. Check scoring (ball exited arena) and re-serve
    check_scoring(world, config, score, events, rng);

    // 4. AI paddle reacts to where the ball is now
    track_ball(world, config);
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let size = glam::Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(
        side,
        config.paddle_spawn(side),
        size,
        config.paddle_speed,
    ),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
