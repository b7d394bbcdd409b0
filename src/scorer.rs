//! Password strength scorer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{length_section, mix_section, variety_section};
use crate::types::{PasswordScore, StrengthReport};

const MIN_LENGTH: usize = 8;
const SHORT_POINTS_PER_CHAR: usize = 5;

/// Scores a password on a 0-100 scale.
///
/// Pure function of the input: any string, including the empty string,
/// gets a score. Passwords under 8 characters are scored by length alone
/// and never reach the variety or mix bonuses.
pub fn score_password(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    if length < MIN_LENGTH {
        let score = (length * SHORT_POINTS_PER_CHAR).min(100) as u8;
        return StrengthReport {
            score: PasswordScore::new(score),
            advice: vec![format!("Password must be at least {} characters", MIN_LENGTH)],
        };
    }

    let variety = variety_section(pwd);
    let raw = length_section(length) + variety.points + mix_section(variety.kinds, length);

    let mut advice = Vec::new();
    if !variety.missing.is_empty() {
        advice.push(format!("Missing: {}", variety.missing.join(", ")));
    }

    StrengthReport {
        score: PasswordScore::new(raw.min(100) as u8),
        advice,
    }
}

/// Async variant for interactive callers that sends the report via channel.
///
/// Debounces briefly, then scores and sends; if the token is cancelled
/// before the debounce elapses, nothing is sent.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("scoring is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        return;
    }
    let report = score_password(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
