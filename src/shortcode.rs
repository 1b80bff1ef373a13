use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Draws a fixed-length code from the case-sensitive alphanumeric alphabet
/// (62 symbols, so a 6 character code covers ~5.7e10 combinations).
/// Collisions are resolved by the caller through the unique constraint on
/// `links.short_code` and a bounded retry loop.
pub fn generate_code(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_has_the_requested_length() {
        assert_eq!(generate_code(6).len(), 6);
        assert_eq!(generate_code(12).len(), 12);
    }

    #[test]
    fn code_is_alphanumeric() {
        let code = generate_code(64);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn consecutive_codes_differ() {
        // 24 characters of base62 make an accidental repeat unobservable.
        assert_ne!(generate_code(24), generate_code(24));
    }
}
