//! Test helpers for generating unique test data
//!
//! Player names are not unique in the store, but distinct names make
//! failing assertions much easier to read.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use canastra_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("player");
/// let id2 = unique_str("player");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique player name with the given prefix
pub fn unique_player_name(prefix: &str) -> String {
    unique_str(prefix)
}
