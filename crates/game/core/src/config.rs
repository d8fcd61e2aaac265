/// Run configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Upper bound on turns in a single encounter. An encounter that reaches
    /// this many turns without a defeat ends in a draw.
    pub max_turns: u32,

    /// Number of turns a status effect lasts when applied without an explicit
    /// duration.
    pub status_duration: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of items an actor can have equipped at once.
    pub const MAX_EQUIPPED: usize = 8;
    /// Maximum number of tags a single item can carry.
    pub const MAX_ITEM_TAGS: usize = 4;
    /// Maximum number of tags the vocabulary can declare.
    pub const MAX_TAGS: usize = 64;
    pub const MAX_STATUS_EFFECTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS: u32 = 200;
    pub const DEFAULT_STATUS_DURATION: u32 = 3;

    pub fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            status_duration: Self::DEFAULT_STATUS_DURATION,
        }
    }

    pub fn with_max_turns(max_turns: u32) -> Self {
        Self {
            max_turns,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
