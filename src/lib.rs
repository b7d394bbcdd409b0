//! Password generation and strength scoring library
//!
//! This library provides secure random password generation from
//! character-class policies, plus a heuristic 0-100 strength score with
//! a qualitative label.
//!
//! # Features
//!
//! - `async` (default): Enables async scoring with debounce and
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{generate_password, score_password};
//! use secrecy::ExposeSecret;
//!
//! // Generate a 16-character password with all classes enabled
//! let password = generate_password(16, true, true, true)
//!     .expect("policy fits the requested length");
//!
//! // Score it
//! let report = score_password(&password);
//!
//! println!("Password: {}", password.expose_secret());
//! println!("Score: {}", report.score);
//! println!("Strength: {}", report.strength());
//! ```

// Internal modules
mod charset;
mod generator;
mod policy;
mod scorer;
mod sections;
mod types;

// Public API
pub use charset::CharacterClass;
pub use generator::{generate_password, generate_password_with_rng};
pub use policy::{GenerationPolicy, InvalidPolicy};
pub use scorer::score_password;
pub use types::{PasswordScore, PasswordStrength, StrengthReport};

#[cfg(feature = "async")]
pub use scorer::score_password_tx;
