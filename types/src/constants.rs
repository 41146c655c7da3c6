/// Starting balance for a new session.
pub const STARTING_BALANCE: u64 = 10_000;

/// Maximum number of past draws retained for display.
pub const HISTORY_LIMIT: usize = 10;

/// Number of pockets on a European wheel.
pub const POCKET_COUNT: usize = 37;
