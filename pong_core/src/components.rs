use std::fmt;

use glam::Vec2;

use crate::aabb::Aabb;
use crate::resources::ServeRng;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player, // left, human controlled
    Ai,     // right, tracks the ball
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Ai => f.write_str("AI"),
        }
    }
}

/// Paddle component - a rectangle that only moves vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // top-left corner
    pub size: Vec2, // width, height
    pub speed: f32, // tracking step per frame
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Move vertically by `dy`, clamped to `[0, arena_height - height]`
    pub fn move_by(&mut self, dy: f32, arena_height: f32) {
        // max before min: an arena shorter than the paddle pins it to the bottom
        self.pos.y = (self.pos.y + dy).max(0.0).min(arena_height - self.size.y);
    }

    /// Step towards the ball using only its current top edge.
    ///
    /// Deliberately beatable: velocity is ignored and the paddle holds
    /// still while the ball's top edge lies within its span.
    pub fn auto_track(&mut self, ball: &Ball, arena_height: f32) {
        if ball.pos.y < self.pos.y {
            self.move_by(-self.speed, arena_height);
        } else if ball.pos.y > self.bottom() {
            self.move_by(self.speed, arena_height);
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,   // top-left corner
    pub vel: Vec2,   // pixels per frame
    pub size: Vec2,  // width, height
    pub spawn: Vec2, // where every serve starts
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel,
            size,
            spawn: pos,
        }
    }

    /// Create a ball at `spawn` moving with `speed`, each component's sign
    /// picked by a coin flip
    pub fn serve(spawn: Vec2, size: Vec2, speed: Vec2, rng: &mut dyn ServeRng) -> Self {
        let vx = if rng.coin_flip() { speed.x } else { -speed.x };
        let vy = if rng.coin_flip() { speed.y } else { -speed.y };
        Self::new(spawn, Vec2::new(vx, vy), size)
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }

    /// Integrate one frame and reflect off the top/bottom walls.
    ///
    /// Returns true when a wall reflected the ball. Position is not
    /// corrected, so the ball may sit past the wall for a frame.
    pub fn advance(&mut self, arena_height: f32) -> bool {
        self.pos += self.vel;

        if self.pos.y <= 0.0 || self.pos.y + self.size.y >= arena_height {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Resolve overlap with either paddle. Both checks use the ball box
    /// from before any response this frame.
    ///
    /// Returns the number of bounces applied.
    pub fn check_collision(&mut self, player: &Paddle, ai: &Paddle) -> u8 {
        let ball_box = self.aabb();
        let mut bounces = 0;

        // Only bounce off the player paddle while heading left
        if ball_box.overlaps(&player.aabb()) && self.vel.x < 0.0 {
            self.pos.x = player.aabb().right();
            self.deflect(player);
            bounces += 1;
        }

        if ball_box.overlaps(&ai.aabb()) && self.vel.x > 0.0 {
            self.pos.x = ai.aabb().left() - self.size.x;
            self.deflect(ai);
            bounces += 1;
        }

        bounces
    }

    /// Reverse horizontally and add spin from where the paddle was hit:
    /// top half pushes up, bottom half pushes down, dead center adds none.
    /// A ball overhanging the top edge gets slightly more than a top hit.
    /// The spin accumulates until the next serve.
    fn deflect(&mut self, paddle: &Paddle) {
        self.vel.x = -self.vel.x;
        let hit_pos = (self.pos.y - paddle.pos.y) / paddle.height();
        self.vel.y += (hit_pos - 0.5) * 2.0;
    }

    /// Serve again from the spawn point, back the way the ball came from
    pub fn reset(&mut self, speed_y: f32, rng: &mut dyn ServeRng) {
        self.pos = self.spawn;
        self.vel.x = -self.vel.x;
        self.vel.y = if rng.coin_flip() { speed_y } else { -speed_y };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ScriptedRng;

    const HEIGHT: f32 = 600.0;

    fn paddle(side: Side, x: f32, y: f32) -> Paddle {
        Paddle::new(side, Vec2::new(x, y), Vec2::new(10.0, 100.0), 10.0)
    }

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), Vec2::new(7.0, 7.0))
    }

    #[test]
    fn test_paddle_move_within_bounds() {
        let mut p = paddle(Side::Player, 10.0, 250.0);
        p.move_by(-7.0, HEIGHT);
        assert_eq!(p.pos.y, 243.0);
        p.move_by(14.0, HEIGHT);
        assert_eq!(p.pos.y, 257.0);
    }

    #[test]
    fn test_paddle_move_clamps_top_and_bottom() {
        let mut p = paddle(Side::Player, 10.0, 3.0);
        p.move_by(-7.0, HEIGHT);
        assert_eq!(p.pos.y, 0.0, "Paddle should stop at the top edge");

        p.move_by(10_000.0, HEIGHT);
        assert_eq!(p.pos.y, HEIGHT - 100.0, "Paddle should stop at the bottom edge");
    }

    #[test]
    fn test_auto_track_moves_up_when_ball_above() {
        let mut p = paddle(Side::Ai, 780.0, 250.0);
        let b = ball(400.0, 100.0, 5.0, 3.0);
        p.auto_track(&b, HEIGHT);
        assert_eq!(p.pos.y, 240.0);
    }

    #[test]
    fn test_auto_track_moves_down_when_ball_below() {
        let mut p = paddle(Side::Ai, 780.0, 250.0);
        let b = ball(400.0, 351.0, 5.0, 3.0);
        p.auto_track(&b, HEIGHT);
        assert_eq!(p.pos.y, 260.0);
    }

    #[test]
    fn test_auto_track_holds_when_ball_within_span() {
        let mut p = paddle(Side::Ai, 780.0, 250.0);
        for y in [250.0, 300.0, 350.0] {
            let b = ball(400.0, y, 5.0, 3.0);
            p.auto_track(&b, HEIGHT);
            assert_eq!(p.pos.y, 250.0, "Paddle should hold for ball at y={y}");
        }
    }

    #[test]
    fn test_auto_track_clamps_at_top() {
        let mut p = paddle(Side::Ai, 780.0, 4.0);
        let b = ball(400.0, 0.0, 5.0, -3.0);
        p.auto_track(&b, HEIGHT);
        assert_eq!(p.pos.y, 0.0);
    }

    #[test]
    fn test_ball_advance_integrates_velocity() {
        let mut b = ball(400.0, 300.0, 5.0, -3.0);
        assert!(!b.advance(HEIGHT));
        assert_eq!(b.pos, Vec2::new(405.0, 297.0));
        assert_eq!(b.vel, Vec2::new(5.0, -3.0));
    }

    #[test]
    fn test_ball_reflects_off_top_wall() {
        let mut b = ball(400.0, 2.0, 5.0, -3.0);
        assert!(b.advance(HEIGHT));
        assert_eq!(b.vel.y, 3.0, "Y velocity should flip, magnitude unchanged");
        assert_eq!(b.pos.y, -1.0, "Position is not corrected");
    }

    #[test]
    fn test_ball_reflects_off_bottom_wall() {
        let mut b = ball(400.0, HEIGHT - 9.0, -5.0, 3.0);
        assert!(b.advance(HEIGHT));
        assert_eq!(b.vel.y, -3.0);
        assert_eq!(b.vel.x, -5.0, "X velocity should be unchanged");
    }

    #[test]
    fn test_serve_uses_coin_flips_for_signs() {
        let mut rng = ScriptedRng::new(vec![true, false]);
        let b = Ball::serve(
            Vec2::new(400.0, 300.0),
            Vec2::splat(7.0),
            Vec2::new(5.0, 3.0),
            &mut rng,
        );
        assert_eq!(b.vel, Vec2::new(5.0, -3.0));
        assert_eq!(b.spawn, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_player_collision_flips_and_snaps_to_edge() {
        let player = paddle(Side::Player, 10.0, 250.0);
        let ai = paddle(Side::Ai, 780.0, 250.0);
        let mut b = ball(17.0, 275.0, -5.0, 1.0);

        assert_eq!(b.check_collision(&player, &ai), 1);
        assert_eq!(b.vel.x, 5.0);
        assert_eq!(b.pos.x, 20.0, "Ball left edge should sit on paddle right edge");
        // hit_pos = 25 / 100 = 0.25 -> deflection -0.5
        assert_eq!(b.vel.y, 0.5);
        assert!(!b.aabb().overlaps(&player.aabb()));
    }

    #[test]
    fn test_ai_collision_flips_and_snaps_to_edge() {
        let player = paddle(Side::Player, 10.0, 250.0);
        let ai = paddle(Side::Ai, 780.0, 250.0);
        let mut b = ball(776.0, 325.0, 5.0, 0.0);

        assert_eq!(b.check_collision(&player, &ai), 1);
        assert_eq!(b.vel.x, -5.0);
        assert_eq!(b.pos.x, 773.0, "Ball right edge should sit on paddle left edge");
        // hit_pos = 0.75 -> deflection +0.5
        assert_eq!(b.vel.y, 0.5);
        assert!(!b.aabb().overlaps(&ai.aabb()));
    }

    #[test]
    fn test_center_hit_adds_no_deflection() {
        let player = paddle(Side::Player, 10.0, 250.0);
        let ai = paddle(Side::Ai, 780.0, 250.0);
        let mut b = ball(15.0, 300.0, -5.0, 3.0);
        b.check_collision(&player, &ai);
        assert_eq!(b.vel.y, 3.0);
    }

    #[test]
    fn test_overhanging_hit_deflects_past_top_hit() {
        let player = paddle(Side::Player, 10.0, 250.0);
        let ai = paddle(Side::Ai, 780.0, 250.0);
        // Top edge 6px above the paddle: hit_pos = -0.06
        let mut b = ball(15.0, 244.0, -5.0, 0.0);
        assert_eq!(b.check_collision(&player, &ai), 1);
        assert!((b.vel.y - -1.12).abs() < 1e-5, "got {}", b.vel.y);
    }

    #[test]
    fn test_move_by_in_short_arena_pins_to_bottom() {
        let mut p = paddle(Side::Player, 10.0, 0.0);
        p.move_by(5.0, 80.0);
        assert_eq!(p.pos.y, -20.0);
    }

    #[test]
    fn test_ball_moving_away_is_not_rebounced() {
        let player = paddle(Side::Player, 10.0, 250.0);
        let ai = paddle(Side::Ai, 780.0, 250.0);
        let mut b = ball(15.0, 300.0, 5.0, 3.0);

        assert_eq!(b.check_collision(&player, &ai), 0);
        assert_eq!(b.vel, Vec2::new(5.0, 3.0));
        assert_eq!(b.pos.x, 15.0);
    }

    #[test]
    fn test_no_collision_in_open_court() {
        let player = paddle(Side::Player, 10.0, 250.0);
        let ai = paddle(Side::Ai, 780.0, 250.0);
        let mut b = ball(400.0, 300.0, -5.0, 3.0);
        assert_eq!(b.check_collision(&player, &ai), 0);
        assert_eq!(b.vel, Vec2::new(-5.0, 3.0));
    }

    #[test]
    fn test_reset_returns_to_spawn_and_reverses() {
        let mut rng = ScriptedRng::new(vec![false]);
        let mut b = ball(400.0, 300.0, -5.0, 3.0);
        b.pos = Vec2::new(-2.0, 120.0);
        b.vel.y = 7.5;

        b.reset(3.0, &mut rng);

        assert_eq!(b.pos, Vec2::new(400.0, 300.0));
        assert_eq!(b.vel.x, 5.0, "Serve direction should be reversed");
        assert_eq!(b.vel.y, -3.0, "Spin should be replaced by a fresh serve");
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Player.to_string(), "Player");
        assert_eq!(Side::Ai.to_string(), "AI");
    }
}
