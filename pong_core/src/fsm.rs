//! Match State Machine
//!
//! Tracks whether a match is running, finished, or the session is over.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Playing,
    /// Replay menu is shown while in this state
    GameOver,
    Terminated,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    WinningScoreReached,
    Replay,
    Exit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::Playing,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::Playing, MatchAction::WinningScoreReached) => Some(MatchState::GameOver),

            // Replay restarts from anywhere but a closed session
            (MatchState::Playing, MatchAction::Replay) => Some(MatchState::Playing),
            (MatchState::GameOver, MatchAction::Replay) => Some(MatchState::Playing),

            (MatchState::Playing, MatchAction::Exit) => Some(MatchState::Terminated),
            (MatchState::GameOver, MatchAction::Exit) => Some(MatchState::Terminated),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == MatchState::GameOver
    }

    pub fn is_terminated(&self) -> bool {
        self.state == MatchState::Terminated
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
