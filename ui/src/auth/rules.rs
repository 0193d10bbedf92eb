//! Validation rules for the credential fields. All predicates are pure and
//! total: any string is accepted as input, including the empty string.

use once_cell::sync::Lazy;
use regex::Regex;

/// Starts with a letter, then 3 to 23 letters, digits, underscores or hyphens.
static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]{3,23}$").expect("username pattern compiles"));

/// Shape-only part of the password rule: 8 to 24 characters, none of them a
/// line terminator (`\n`, `\r`, U+2028, U+2029). The character class
/// requirements are checked separately since `regex` has no lookahead.
static PASSWORD_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\n\r\x{2028}\x{2029}]{8,24}$").expect("password pattern compiles")
});

/// Characters that satisfy the "special character" requirement.
pub const PASSWORD_SPECIALS: &[char] = &['!', '@', '#', '$', '%'];

pub const USERNAME_HINT: &[&str] = &[
    "4 to 24 characters.",
    "Must begin with a letter.",
    "Letters, numbers, underscores, hyphens allowed",
];

pub const PASSWORD_HINT: &[&str] = &[
    "8 to 24 characters.",
    "Must include uppercase and lowercase letters, a number and a special character.",
    "Allowed special characters: !@#$%",
];

pub const CONFIRM_HINT: &[&str] = &["Must match first password"];

pub fn is_valid_username(s: &str) -> bool {
    USERNAME.is_match(s)
}

pub fn is_valid_password(s: &str) -> bool {
    PASSWORD_SHAPE.is_match(s)
        && s.chars().any(|c| c.is_ascii_lowercase())
        && s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().any(|c| PASSWORD_SPECIALS.contains(&c))
}

/// Plain string equality. Two empty strings match.
pub fn passwords_match(a: &str, b: &str) -> bool {
    a == b
}
