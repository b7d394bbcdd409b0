//! Variety section - presence of uppercase, digits and symbols.

use crate::charset;

const POINTS_PER_KIND: u32 = 10;

/// Outcome of the variety check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarietyOutcome {
    /// How many of the three optional kinds are present (0-3).
    pub kinds: u32,
    /// `kinds * 10` points.
    pub points: u32,
    /// Optional kinds the password lacks.
    pub missing: Vec<&'static str>,
}

/// Checks which optional character kinds the password contains.
///
/// Presence is boolean, not a count, and only symbols from the fixed
/// generator alphabet qualify. Lowercase presence is intentionally not
/// scored.
pub fn variety_section(pwd: &str) -> VarietyOutcome {
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_number = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(charset::is_symbol);

    let missing: Vec<_> = [
        (!has_upper).then_some("uppercase"),
        (!has_number).then_some("numbers"),
        (!has_symbol).then_some("symbols"),
    ]
    .into_iter()
    .flatten()
    .collect();

    let kinds = [has_upper, has_number, has_symbol]
        .iter()
        .filter(|&&b| b)
        .count() as u32;

    VarietyOutcome {
        kinds,
        points: kinds * POINTS_PER_KIND,
        missing,
    }
}
