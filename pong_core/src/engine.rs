use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, info};

use crate::systems::move_player;
use crate::{
    create_ball, create_paddle, step, Aabb, Ball, Config, Events, GameRng, InputState,
    MatchAction, MatchFsm, MatchState, Paddle, ReplayKey, ReplayOutcome, Score, ServeRng, Side,
    SoundHooks,
};

/// Flat view of everything a renderer draws
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball: Aabb,
    pub player_paddle: Aabb,
    pub ai_paddle: Aabb,
    pub player_score: u8,
    pub ai_score: u8,
    pub game_over: bool,
    pub winner: Option<Side>,
}

/// Player-vs-AI match: owns both paddles, the ball and the scoreboard
pub struct GameEngine {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    rng: Box<dyn ServeRng>,
    hooks: Option<Box<dyn SoundHooks>>,
    fsm: MatchFsm,
    player: Entity,
    ai: Entity,
    ball: Entity,
    winning_score: u8,
    winner: Option<Side>,
    show_replay_menu: bool,
}

impl GameEngine {
    pub fn new(config: Config, mut rng: Box<dyn ServeRng>) -> Self {
        let mut world = World::new();

        let player = create_paddle(&mut world, &config, Side::Player);
        let ai = create_paddle(&mut world, &config, Side::Ai);

        let ball = Ball::serve(
            config.ball_spawn(),
            Vec2::splat(config.ball_size),
            Vec2::new(config.ball_speed_x, config.ball_speed_y),
            rng.as_mut(),
        );
        let ball = create_ball(&mut world, ball);

        Self {
            world,
            winning_score: config.win_score,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            hooks: None,
            fsm: MatchFsm::new(),
            player,
            ai,
            ball,
            winner: None,
            show_replay_menu: false,
        }
    }

    pub fn with_hooks(mut self, hooks: Box<dyn SoundHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Apply this frame's held keys to the player paddle
    pub fn handle_input(&mut self, input: InputState) {
        if !self.fsm.is_playing() {
            return;
        }
        move_player(&mut self.world, input, &self.config);
    }

    /// Advance the match by one frame. Frozen once the match is over.
    pub fn update(&mut self) {
        if !self.fsm.is_playing() {
            return;
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            self.rng.as_mut(),
        );

        if self.events.ball_hit_paddle {
            debug!("ball hit paddle");
            if let Some(hooks) = self.hooks.as_mut() {
                hooks.paddle_hit();
            }
        }

        if self.events.scored().is_some() {
            if let Some(hooks) = self.hooks.as_mut() {
                hooks.point_scored();
            }
            self.check_game_over();
        }
    }

    fn check_game_over(&mut self) {
        let Some(winner) = self.score.has_winner(self.winning_score) else {
            return;
        };

        self.fsm.transition(MatchAction::WinningScoreReached);
        self.winner = Some(winner);
        self.show_replay_menu = true;
        self.events.match_over = Some(winner);
        info!(
            %winner,
            player = self.score.player,
            ai = self.score.ai,
            "match over"
        );

        if winner == Side::Ai {
            if let Some(hooks) = self.hooks.as_mut() {
                hooks.match_lost();
            }
        }
    }

    /// Handle a key on the replay menu
    pub fn handle_replay_input(&mut self, key: ReplayKey) -> ReplayOutcome {
        match key {
            ReplayKey::Select(format) => {
                if !self.fsm.transition(MatchAction::Replay).success {
                    return ReplayOutcome::Ignored;
                }
                self.winning_score = format.winning_score();
                self.reset_game();
                info!(
                    games = format.games(),
                    winning_score = self.winning_score,
                    "replay"
                );
                ReplayOutcome::Replayed
            }
            ReplayKey::Exit => {
                if self.fsm.transition(MatchAction::Exit).success {
                    info!("exit requested");
                }
                ReplayOutcome::ExitRequested
            }
            ReplayKey::Other => ReplayOutcome::Ignored,
        }
    }

    /// Reset scores, ball and paddles, keeping the winning score
    fn reset_game(&mut self) {
        self.score = Score::new();
        self.winner = None;
        self.show_replay_menu = false;
        self.events.clear();

        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(self.config.ball_speed_y, self.rng.as_mut());
        }

        let spawn_y = self.config.paddle_spawn_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.pos.y = spawn_y;
        }
    }

    pub fn player_score(&self) -> u8 {
        self.score.player
    }

    pub fn ai_score(&self) -> u8 {
        self.score.ai
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winning_score(&self) -> u8 {
        self.winning_score
    }

    pub fn is_game_over(&self) -> bool {
        self.fsm.is_game_over()
    }

    pub fn is_terminated(&self) -> bool {
        self.fsm.is_terminated()
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn show_replay_menu(&self) -> bool {
        self.show_replay_menu
    }

    /// Events raised by the last `update`
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        };
        self.world.get::<&Paddle>(entity).ok().map(|p| *p)
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Some(Snapshot {
            ball: self.ball()?.aabb(),
            player_paddle: self.paddle(Side::Player)?.aabb(),
            ai_paddle: self.paddle(Side::Ai)?.aabb(),
            player_score: self.score.player,
            ai_score: self.score.ai,
            game_over: self.is_game_over(),
            winner: self.winner,
        })
    }

    /// Overwrite ball position and velocity, e.g. to script a rally
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Config::default(), Box::new(GameRng::default()))
    }
}
