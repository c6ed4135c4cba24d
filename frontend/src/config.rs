use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Artificial wait between submitting a search and landing on the results.
pub const SEARCH_DELAY_MS: u32 = 1_200;

pub const TOAST_SHORT_MS: u32 = 2_500;
pub const TOAST_LONG_MS: u32 = 4_000;

/// Tick of every stat counter on the hero.
pub const COUNTER_TICK_MS: u32 = 30;

/// How long each feature card stays highlighted before the next one.
pub const FEATURE_ROTATE_MS: u32 = 4_000;

pub const PARTICLE_COUNT: usize = 36;
