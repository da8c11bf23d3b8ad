//! Password strength rating.
//!
//! A three-level heuristic over length and character variety. The rules
//! are ordered and the first match wins; the function is total over any
//! string, including the empty string.

use std::fmt;

/// Symbols that count toward a Strong rating.
///
/// This set differs from `password::SYMBOLS`, the set the generator
/// draws from: `+` is generated but never scored here, while `@`, `^`,
/// and `*` are scored but never generated. As a result a generated
/// password whose only symbol is `+` rates Medium even though it meets
/// every category-count guarantee. The mismatch is inherited behavior
/// and kept as-is.
pub const SCORED_SYMBOLS: &str = "!@#$%^&*()";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Rate a password.
///
/// - fewer than 8 characters: [`Strength::Weak`]
/// - at least one digit, one letter, and one scored symbol:
///   [`Strength::Strong`]
/// - anything else: [`Strength::Medium`]
pub fn classify(password: &str) -> Strength {
    if password.chars().count() < 8 {
        return Strength::Weak;
    }

    let has_digit = password.chars().any(|c| c.is_numeric());
    let has_alpha = password.chars().any(|c| c.is_alphabetic());
    let has_symbol = password.chars().any(|c| SCORED_SYMBOLS.contains(c));

    if has_digit && has_alpha && has_symbol {
        Strength::Strong
    } else {
        Strength::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_string_is_weak() {
        assert_eq!(classify(""), Strength::Weak);
    }

    #[test]
    fn short_strings_are_weak() {
        for p in ["a", "1234567", "!@#$%^&", "Ab1!Ab1"] {
            assert_eq!(classify(p), Strength::Weak, "{:?}", p);
        }
    }

    #[test]
    fn letters_only_is_medium() {
        assert_eq!(classify("abcdefgh"), Strength::Medium);
    }

    #[test]
    fn letters_and_digit_without_symbol_is_medium() {
        assert_eq!(classify("abcdefg1"), Strength::Medium);
    }

    #[test]
    fn digit_letter_and_scored_symbol_is_strong() {
        assert_eq!(classify("abc123!@"), Strength::Strong);
    }

    #[test]
    fn plus_is_not_a_scored_symbol() {
        // `+` comes from the generator's alphabet but not the scored set.
        assert_eq!(classify("abcdefg1+"), Strength::Medium);
    }

    #[test]
    fn classification_is_deterministic() {
        for p in ["", "abcdefgh", "abc123!@", "x1!x1!x1!"] {
            assert_eq!(classify(p), classify(p));
        }
    }

    #[test]
    fn generated_passwords_are_never_weak() {
        // Generated passwords are 12+ characters, so the length rule
        // can never fire.
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let pwd = password::generate_password_with(&mut rng);
            assert_ne!(classify(&pwd), Strength::Weak, "{:?}", pwd);
        }
    }

    #[test]
    fn labels_render_as_expected() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Medium.to_string(), "Medium");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }
}
