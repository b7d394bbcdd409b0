//! Generation policy and its validation.

use thiserror::Error;

use crate::charset::CharacterClass;

/// A password generation request that cannot be satisfied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("requested length {length} cannot seat {required} mandatory character classes")]
pub struct InvalidPolicy {
    /// The requested password length.
    pub length: usize,
    /// Number of active classes, each needing at least one character.
    pub required: usize,
}

/// User-selected character classes plus the desired output length.
///
/// Lowercase is always active; the three flags enable the optional
/// classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
}

impl GenerationPolicy {
    pub fn new(length: usize, use_uppercase: bool, use_numbers: bool, use_symbols: bool) -> Self {
        GenerationPolicy {
            length,
            use_uppercase,
            use_numbers,
            use_symbols,
        }
    }

    /// Active classes in the fixed seeding order.
    pub fn active_classes(&self) -> Vec<CharacterClass> {
        let mut classes = vec![CharacterClass::Lowercase];
        if self.use_uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if self.use_numbers {
            classes.push(CharacterClass::Digit);
        }
        if self.use_symbols {
            classes.push(CharacterClass::Symbol);
        }
        classes
    }

    /// Number of positions the mandatory per-class seeds occupy.
    pub fn required_seats(&self) -> usize {
        1 + usize::from(self.use_uppercase)
            + usize::from(self.use_numbers)
            + usize::from(self.use_symbols)
    }

    /// Rejects policies whose length cannot seat one character per active
    /// class. Without this check the seed characters would overrun the
    /// requested length.
    pub fn validate(&self) -> Result<(), InvalidPolicy> {
        let required = self.required_seats();
        if self.length < required {
            return Err(InvalidPolicy {
                length: self.length,
                required,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_exact_fit() {
        let policy = GenerationPolicy::new(4, true, true, true);
        assert_eq!(policy.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_undersized_length() {
        let policy = GenerationPolicy::new(2, true, true, true);
        assert_eq!(
            policy.validate(),
            Err(InvalidPolicy {
                length: 2,
                required: 4
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let policy = GenerationPolicy::new(0, false, false, false);
        assert_eq!(
            policy.validate(),
            Err(InvalidPolicy {
                length: 0,
                required: 1
            })
        );
    }

    #[test]
    fn test_length_one_lowercase_only_is_valid() {
        let policy = GenerationPolicy::new(1, false, false, false);
        assert_eq!(policy.validate(), Ok(()));
    }

    #[test]
    fn test_active_classes_order() {
        let policy = GenerationPolicy::new(12, true, false, true);
        assert_eq!(
            policy.active_classes(),
            vec![
                CharacterClass::Lowercase,
                CharacterClass::Uppercase,
                CharacterClass::Symbol
            ]
        );
    }

    #[test]
    fn test_error_message_names_counts() {
        let err = GenerationPolicy::new(3, true, true, true).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "requested length 3 cannot seat 4 mandatory character classes"
        );
    }
}
