//! Keyboard input mapping
//!
//! Hosts poll their own event source and translate key names through
//! these helpers before handing them to the engine.

/// Directional keys held during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Best-of-N match formats offered on the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFormat {
    BestOf3,
    BestOf5,
    BestOf7,
}

impl MatchFormat {
    pub fn games(&self) -> u8 {
        match self {
            MatchFormat::BestOf3 => 3,
            MatchFormat::BestOf5 => 5,
            MatchFormat::BestOf7 => 7,
        }
    }

    /// First to ceil(N/2)
    pub fn winning_score(&self) -> u8 {
        self.games().div_ceil(2)
    }
}

/// Key events understood by the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayKey {
    Select(MatchFormat),
    Exit,
    Other,
}

/// What a replay key did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayOutcome {
    Replayed,
    Ignored,
    ExitRequested,
}

/// Map a host key name to a replay key
pub fn replay_key_from_str(key: &str) -> ReplayKey {
    match key {
        "3" => ReplayKey::Select(MatchFormat::BestOf3),
        "5" => ReplayKey::Select(MatchFormat::BestOf5),
        "7" => ReplayKey::Select(MatchFormat::BestOf7),
        "Escape" | "Esc" => ReplayKey::Exit,
        _ => ReplayKey::Other,
    }
}

/// Build this frame's input from the names of all held keys
pub fn input_from_keys<'a>(held: impl IntoIterator<Item = &'a str>) -> InputState {
    let mut input = InputState::new();
    for key in held {
        match key {
            "ArrowUp" | "w" | "W" => input.up = true,
            "ArrowDown" | "s" | "S" => input.down = true,
            _ => {}
        }
    }
    input
}
