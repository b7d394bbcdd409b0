//! Character classes and alphabet pool assembly.

use crate::policy::GenerationPolicy;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+<>?";

/// A category of password characters with a fixed ASCII alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// The immutable alphabet bound to this class.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }
}

/// Checks membership in the fixed symbol alphabet.
///
/// The scorer counts only these symbols toward character variety; other
/// punctuation contributes nothing.
pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}

/// Builds the pool of allowed characters for a policy.
///
/// Concatenation order is fixed: lowercase, then uppercase, digits and
/// symbols as enabled. Every alphabet appears at most once, so uniform
/// draws from the pool are uniform over the allowed set.
pub fn allowed_pool(policy: &GenerationPolicy) -> Vec<u8> {
    let mut pool = Vec::with_capacity(
        LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SYMBOLS.len(),
    );
    pool.extend_from_slice(LOWERCASE);
    if policy.use_uppercase {
        pool.extend_from_slice(UPPERCASE);
    }
    if policy.use_numbers {
        pool.extend_from_slice(DIGITS);
    }
    if policy.use_symbols {
        pool.extend_from_slice(SYMBOLS);
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digit.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbol.alphabet().len(), 17);
    }

    #[test]
    fn test_alphabets_are_disjoint() {
        let classes = [
            CharacterClass::Lowercase,
            CharacterClass::Uppercase,
            CharacterClass::Digit,
            CharacterClass::Symbol,
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert!(
                    a.alphabet().iter().all(|c| !b.alphabet().contains(c)),
                    "{:?} overlaps {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_is_symbol_exact_set() {
        for c in "!@#$%^&*()-_=+<>?".chars() {
            assert!(is_symbol(c), "{} should be a symbol", c);
        }
        for c in ['a', 'Z', '3', '[', ']', '{', '}', '~', '.', ',', ';', '\'', ' '] {
            assert!(!is_symbol(c), "{} should not be a symbol", c);
        }
        assert!(!is_symbol('é'));
    }

    #[test]
    fn test_pool_lowercase_only() {
        let policy = GenerationPolicy::new(8, false, false, false);
        assert_eq!(allowed_pool(&policy), LOWERCASE.to_vec());
    }

    #[test]
    fn test_pool_concatenation_order() {
        let policy = GenerationPolicy::new(8, true, true, true);
        let pool = allowed_pool(&policy);
        let mut expected = Vec::new();
        expected.extend_from_slice(LOWERCASE);
        expected.extend_from_slice(UPPERCASE);
        expected.extend_from_slice(DIGITS);
        expected.extend_from_slice(SYMBOLS);
        assert_eq!(pool, expected);
    }

    #[test]
    fn test_pool_skips_disabled_classes() {
        let policy = GenerationPolicy::new(8, false, true, false);
        let pool = allowed_pool(&policy);
        assert_eq!(pool.len(), 36);
        assert!(pool.iter().all(|c| LOWERCASE.contains(c) || DIGITS.contains(c)));
    }
}
