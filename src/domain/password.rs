//! Password policy evaluation.
//!
//! Five independent rules, each a pure predicate. The strength count is the
//! exact number of satisfied rules, not a weighted score. Forms display the
//! rules in the order of [`RULE_LABELS`], so that order is part of the
//! contract.

use crate::config::{MIN_PASSWORD_LENGTH, PASSWORD_RULE_COUNT};

/// Human-readable rule labels, in display order.
pub const RULE_LABELS: [&str; PASSWORD_RULE_COUNT] = [
    "At least 10 characters",
    "One uppercase letter",
    "One lowercase letter",
    "One number",
    "One special character",
];

/// Outcome of a single rule check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleResult {
    pub label: &'static str,
    pub satisfied: bool,
}

fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Check every rule, in display order.
pub fn check_rules(password: &str) -> [RuleResult; PASSWORD_RULE_COUNT] {
    let checks: [fn(&str) -> bool; PASSWORD_RULE_COUNT] = [
        has_min_length,
        has_uppercase,
        has_lowercase,
        has_digit,
        has_special,
    ];

    let mut results = [RuleResult { label: "", satisfied: false }; PASSWORD_RULE_COUNT];
    for (i, check) in checks.iter().enumerate() {
        results[i] = RuleResult {
            label: RULE_LABELS[i],
            satisfied: check(password),
        };
    }
    results
}

/// Count the satisfied rules, in `0..=5`.
///
/// Malformed input is not an error: the empty string simply satisfies zero
/// rules.
pub fn evaluate(password: &str) -> usize {
    check_rules(password).iter().filter(|r| r.satisfied).count()
}

/// True when every rule is satisfied.
pub fn satisfies_all(password: &str) -> bool {
    evaluate(password) == PASSWORD_RULE_COUNT
}

/// Map a rule count to the strength label shown next to the meter.
pub fn strength_label(count: usize) -> &'static str {
    match count {
        0 => "Enter a password",
        1 | 2 => "Weak",
        3 => "Fair",
        4 => "Good",
        _ => "Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_satisfies_zero_rules() {
        assert_eq!(evaluate(""), 0);
    }

    #[test]
    fn test_all_rules_satisfied() {
        assert_eq!(evaluate("Abcdefghij1!"), 5);
        assert!(satisfies_all("Abcdefghij1!"));
    }

    #[test]
    fn test_lowercase_and_length_only() {
        // length >= 10 and lowercase, nothing else
        assert_eq!(evaluate("abcdefghij"), 2);
    }

    #[test]
    fn test_count_is_exact_predicate_count() {
        assert_eq!(evaluate("A"), 1); // uppercase only
        assert_eq!(evaluate("A1"), 2); // uppercase + digit
        assert_eq!(evaluate("A1!"), 3); // uppercase + digit + special
        assert_eq!(evaluate("aA1!"), 4); // everything but length
    }

    #[test]
    fn test_short_strong_password_misses_length() {
        let results = check_rules("Ab1!");
        assert!(!results[0].satisfied);
        assert!(results[1..].iter().all(|r| r.satisfied));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Ten two-byte characters pass the length rule
        assert!(check_rules("éééééééééé")[0].satisfied);
    }

    #[test]
    fn test_non_ascii_counts_as_special() {
        let results = check_rules("é");
        assert!(results[4].satisfied);
    }

    #[test]
    fn test_rule_order_matches_labels() {
        let results = check_rules("x");
        let labels: Vec<_> = results.iter().map(|r| r.label).collect();
        assert_eq!(labels, RULE_LABELS.to_vec());
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(strength_label(0), "Enter a password");
        assert_eq!(strength_label(1), "Weak");
        assert_eq!(strength_label(2), "Weak");
        assert_eq!(strength_label(3), "Fair");
        assert_eq!(strength_label(4), "Good");
        assert_eq!(strength_label(5), "Strong");
    }
}
