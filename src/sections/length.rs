//! Length section - base score from password length.

const POINTS_PER_CHAR: u32 = 3;
const MAX_POINTS: u32 = 40;

/// Points contributed by length: 3 per character, capped at 40.
///
/// Only reached for passwords of at least 8 characters; shorter ones are
/// scored by the orchestrator's short-circuit path.
pub fn length_section(length: usize) -> u32 {
    (length as u32).saturating_mul(POINTS_PER_CHAR).min(MAX_POINTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_scale_with_length() {
        assert_eq!(length_section(8), 24);
        assert_eq!(length_section(10), 30);
        assert_eq!(length_section(12), 36);
    }

    #[test]
    fn test_points_cap_at_40() {
        assert_eq!(length_section(14), 40);
        assert_eq!(length_section(128), 40);
    }
}
