use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    /// Player is checked first, so it wins a (theoretical) tie
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.ai >= win_score {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Source of serve directions
pub trait ServeRng {
    fn coin_flip(&mut self) -> bool;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl ServeRng for GameRng {
    fn coin_flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

/// Replays a fixed cycle of coin flips
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    flips: Vec<bool>,
    next: usize,
}

impl ScriptedRng {
    /// An empty script always answers `true`
    pub fn new(flips: Vec<bool>) -> Self {
        Self { flips, next: 0 }
    }
}

impl ServeRng for ScriptedRng {
    fn coin_flip(&mut self) -> bool {
        if self.flips.is_empty() {
            return true;
        }
        let flip = self.flips[self.next % self.flips.len()];
        self.next = self.next.wrapping_add(1);
        flip
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub player_scored: bool,
    pub ai_scored: bool,
    pub match_over: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.player_scored = false;
        self.ai_scored = false;
        self.match_over = None;
    }

    pub fn scored(&self) -> Option<Side> {
        if self.player_scored {
            Some(Side::Player)
        } else if self.ai_scored {
            Some(Side::Ai)
        } else {
            None
        }
    }
}
