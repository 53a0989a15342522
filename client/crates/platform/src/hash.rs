//! Deterministic identity mappings
//!
//! Avatar colors, icons, and animations look random but must be stable:
//! the same member always gets the same presentation, across sessions
//! and across components. Everything here is a pure function of the
//! identifier so the mappings are reproducible in tests.

use sha2::{Digest, Sha256};

/// Number of entries in the UI host's avatar color palette
pub const AVATAR_COLOR_COUNT: usize = 7;

/// Number of avatar icons the UI host ships
pub const AVATAR_ICON_COUNT: usize = 5;

/// Number of avatar animation styles the UI host ships
pub const AVATAR_ANIMATION_COUNT: usize = 4;

/// Palette index for a username (or any string identifier)
///
/// First byte of SHA-256 over the identifier, reduced mod `palette_len`.
pub fn color_index(identifier: &str, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    let digest = Sha256::digest(identifier.as_bytes());
    digest[0] as usize % palette_len
}

/// Icon index for a numeric member id
pub fn avatar_icon_index(user_id: i64) -> usize {
    user_id.rem_euclid(AVATAR_ICON_COUNT as i64) as usize
}

/// Animation index for a numeric member id
///
/// Divided by ten first so neighboring ids share an animation but not
/// an icon, matching the platform's established look.
pub fn avatar_animation_index(user_id: i64) -> usize {
    (user_id / 10).rem_euclid(AVATAR_ANIMATION_COUNT as i64) as usize
}

/// Uppercased first character of a display name, `?` when empty
pub fn initial(name: &str) -> char {
    name.chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}
