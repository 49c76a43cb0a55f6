//! Two-factor code resolution
//!
//! Login accepts either a ready 6-character code or the account's
//! base-32 TOTP secret. Secrets are turned into the code for the
//! current 30 second step (RFC 6238, SHA-1, 6 digits).

use chrono::Utc;
use totp_rs::{Algorithm, Secret, TOTP};
use tracing::debug;

const CODE_LENGTH: usize = 6;
const STEP_SECS: u64 = 30;

/// Resolve an OTP argument against the current time.
#[must_use]
pub fn resolve_otp(otp: &str) -> String {
    let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
    resolve_otp_at(otp, now)
}

/// Resolve an OTP argument at a given unix timestamp.
///
/// A 6-character value is returned unchanged. Anything else is decoded
/// as a base-32 secret; if decoding fails the input is returned as-is.
///
/// ```
/// use firstmail_client::resolve_otp_at;
///
/// assert_eq!(resolve_otp_at("123456", 0), "123456");
/// assert_eq!(resolve_otp_at("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ", 59), "287082");
/// assert_eq!(resolve_otp_at("61994", 0), "61994");
/// ```
#[must_use]
pub fn resolve_otp_at(otp: &str, unix_time: u64) -> String {
    if otp.chars().count() == CODE_LENGTH {
        return otp.to_string();
    }

    match decode_secret(otp) {
        Some(key) => TOTP::new_unchecked(Algorithm::SHA1, CODE_LENGTH, 1, STEP_SECS, key)
            .generate(unix_time),
        None => {
            debug!("OTP value is not a base-32 secret, sending it as-is");
            otp.to_string()
        }
    }
}

/// Decode a base-32 secret, case-insensitively and with optional `=`
/// padding. Lengths that cannot come out of a base-32 encoder and
/// secrets that decode to nothing are rejected.
fn decode_secret(otp: &str) -> Option<Vec<u8>> {
    let unpadded = otp.to_ascii_uppercase();
    let unpadded = unpadded.trim_end_matches('=');
    if unpadded.is_empty() || matches!(unpadded.len() % 8, 1 | 3 | 6) {
        return None;
    }

    Secret::Encoded(unpadded.to_string())
        .to_bytes()
        .ok()
        .filter(|key| !key.is_empty())
}
