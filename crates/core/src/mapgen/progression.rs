//! Level progression rules shared by the generator and the level controller.

pub const STARTING_LEVEL: u8 = 1;

/// Level that follows `level`, or `None` once the final level is done.
pub fn next_level(level: u8, max_levels: u8) -> Option<u8> {
    (level < max_levels).then(|| level + 1)
}

pub fn is_final_level(level: u8, max_levels: u8) -> bool {
    level >= max_levels
}
