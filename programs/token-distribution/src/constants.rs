//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Length of one distribution phase in days.
pub const PHASE_LENGTH_DAYS: i64 = 9;

/// Length of one distribution phase in seconds.
pub const PHASE_LENGTH_SECONDS: i64 = PHASE_LENGTH_DAYS * SECONDS_PER_DAY;

/// Number of phase boundaries; also the terminal (fully vested) phase index.
pub const PHASE_COUNT: u8 = 10;

/// Offset of the last boundary from the distribution start (90 days).
pub const SCHEDULE_LENGTH_SECONDS: i64 = PHASE_LENGTH_SECONDS * PHASE_COUNT as i64;

/// Mint decimals assumed by the supply constants below.
pub const TOKEN_DECIMALS: u8 = 9;

/// One whole token in base units.
pub const ONE_TOKEN: u64 = 10u64.pow(TOKEN_DECIMALS as u32);

/// Tokens escrowed in the vault for the distribution (200M).
pub const DISTRIBUTION_SUPPLY: u64 = 200_000_000 * ONE_TOKEN;

/// Cap on tokens handed out through sale claims (135M).
pub const SALE_SUPPLY: u64 = 135_000_000 * ONE_TOKEN;

/// Cap on tokens handed out through phased presale claims (65M).
pub const PRESALE_SUPPLY: u64 = DISTRIBUTION_SUPPLY - SALE_SUPPLY;

/// Max participants stored in the participants list PDA.
pub const MAX_PARTICIPANTS: usize = 64;

/// Default deployment offsets, relative to the deploy instant.
pub const DEFAULT_FREEZE_DELAY: i64 = 2 * SECONDS_PER_DAY;
pub const DEFAULT_START_DELAY: i64 = 5 * SECONDS_PER_DAY;
pub const DEFAULT_SWEEP_DELAY: i64 = 3 * 365 * SECONDS_PER_DAY;
