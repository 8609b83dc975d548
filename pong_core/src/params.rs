/// Game tuning parameters for Pong
///
/// All lengths are pixels with the origin at the top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side edge
    pub const PADDLE_SPEED: f32 = 10.0; // AI tracking step per frame
    pub const PLAYER_STEP: f32 = 7.0; // manual move per frame

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 3.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // first match, before a format is picked
}
