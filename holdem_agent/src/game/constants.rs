/// Longest name a bot may register with. Longer names are truncated.
pub const MAX_NAME_LENGTH: usize = 32;

/// An opponent who has put at least this many big blinds into the pot
/// is treated as betting aggressively.
pub const DEFAULT_AGGRESSION_MULTIPLIER: u64 = 4;
