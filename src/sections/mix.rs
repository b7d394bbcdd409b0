//! Mix section - bonus for combining variety with length.

const BONUS: u32 = 15;

/// Bonus points for a good mix of kinds and length.
///
/// The two bonuses are additive: a password with all three kinds and at
/// least 12 characters earns both.
pub fn mix_section(kinds: u32, length: usize) -> u32 {
    let mut bonus = 0;
    if kinds >= 2 && length >= 10 {
        bonus += BONUS;
    }
    if kinds == 3 && length >= 12 {
        bonus += BONUS;
    }
    bonus
}
