//! Value types shared by the generator and the scorer.

use std::fmt;

/// A password strength score, clamped to `0..=100` at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Creates a score, clamping values above 100.
    pub fn new(value: u8) -> Self {
        PasswordScore(value.min(100))
    }

    /// Returns the numeric score in `0..=100`.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordinal strength category, derived purely from the score.
///
/// Thresholds are half-open: a score of exactly 40 is already `Medium`,
/// exactly 80 already `VeryStrong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a score in `0..=100` to its category.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => PasswordStrength::VeryWeak,
            20..=39 => PasswordStrength::Weak,
            40..=59 => PasswordStrength::Medium,
            60..=79 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring a password: the numeric score plus advice lines.
///
/// Advice is informational only; it never feeds back into the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: PasswordScore,
    pub advice: Vec<String>,
}

impl StrengthReport {
    /// Derives the strength category from the score.
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score.value())
    }
}
