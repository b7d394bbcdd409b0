//! Scoring sections
//!
//! Each section computes one component of the strength score.

mod length;
mod mix;
mod variety;

pub use length::length_section;
pub use mix::mix_section;
pub use variety::{VarietyOutcome, variety_section};
