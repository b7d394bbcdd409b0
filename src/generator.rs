//! Password generator - mandatory class seeding, uniform fill, shuffle.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

use crate::charset;
use crate::policy::{GenerationPolicy, InvalidPolicy};

/// Generates a random password satisfying the given class flags.
///
/// Lowercase is always included; each enabled optional class is guaranteed
/// at least one character. Draws come from the operating system CSPRNG.
///
/// # Errors
/// Returns [`InvalidPolicy`] when `length` is smaller than the number of
/// active classes.
pub fn generate_password(
    length: usize,
    use_uppercase: bool,
    use_numbers: bool,
    use_symbols: bool,
) -> Result<SecretString, InvalidPolicy> {
    let policy = GenerationPolicy::new(length, use_uppercase, use_numbers, use_symbols);
    generate_password_with_rng(&policy, &mut OsRng)
}

/// Generates a password from an explicitly provided randomness source.
///
/// The `Rng + CryptoRng` bound keeps non-cryptographic generators out at
/// the type level; tests inject a seeded `ChaCha20Rng`, production callers
/// go through [`generate_password`] and `OsRng`.
pub fn generate_password_with_rng<R>(
    policy: &GenerationPolicy,
    rng: &mut R,
) -> Result<SecretString, InvalidPolicy>
where
    R: Rng + CryptoRng,
{
    policy.validate()?;

    let pool = charset::allowed_pool(policy);
    let mut chars: Vec<u8> = Vec::with_capacity(policy.length);

    // One guaranteed character per active class, in the fixed class order.
    for class in policy.active_classes() {
        let alphabet = class.alphabet();
        chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }

    // Remaining positions are uniform draws over the full allowed pool.
    while chars.len() < policy.length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Fisher-Yates, so the seeded characters are not front-loaded.
    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = policy.length,
        pool_size = pool.len(),
        "generated password"
    );

    let password: String = chars.into_iter().map(char::from).collect();
    Ok(SecretString::new(password.into()))
}
