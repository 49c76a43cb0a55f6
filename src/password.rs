//! Password rules
//!
//! The provider accepts passwords of at least eight characters drawn
//! from ASCII letters, digits and `!@#$%^&*()`.

use rand::Rng;

const MIN_LENGTH: usize = 8;
const SYMBOLS: &str = "!@#$%^&*()";
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Check a candidate password against the provider's rules.
///
/// ```
/// use firstmail_client::validate_password;
///
/// assert!(validate_password("hunter2hunter2"));
/// assert!(!validate_password("short1"));
/// assert!(!validate_password("with space 123"));
/// ```
#[must_use]
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SYMBOLS.contains(c))
}

/// Generate a password of 8 random letters followed by 4 random digits.
#[must_use]
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    (0..12)
        .map(|i| {
            let pool = if i < 8 { LETTERS } else { DIGITS };
            char::from(pool[rng.gen_range(0..pool.len())])
        })
        .collect()
}
