//! File and directory naming rules of the rule corpus.

use std::sync::LazyLock;

use regex::Regex;

/// A single digit followed by a hyphen (`2-foo`). Prefixes must be two digits.
static SINGLE_DIGIT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]-").expect("valid regex"));

/// Two digits followed by a letter (`02a-foo`).
static ALPHABETIC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}[a-z]-").expect("valid regex"));

static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})-").expect("valid regex"));

static RULE_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}-[a-z0-9-]+\.(complete|abstract|summary)\.md$").expect("valid regex")
});

static BCS_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BCS[0-9]+$").expect("valid regex"));

/// Base name of the corpus-wide header (`00-header.<tier>.md`).
pub const HEADER_STEM: &str = "00-header";

/// Base name of a section's introduction (`00-section.<tier>.md`).
pub const SECTION_STEM: &str = "00-section";

#[must_use]
pub fn has_single_digit_prefix(name: &str) -> bool {
    SINGLE_DIGIT_PREFIX.is_match(name)
}

#[must_use]
pub fn has_alphabetic_suffix(name: &str) -> bool {
    ALPHABETIC_SUFFIX.is_match(name)
}

/// Returns the two-digit prefix of `NN-name`, if present.
#[must_use]
pub fn numeric_prefix(name: &str) -> Option<&str> {
    NUMBERED_PREFIX
        .captures(name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[must_use]
pub fn is_rule_file_name(name: &str) -> bool {
    RULE_FILE_NAME.is_match(name)
}

#[must_use]
pub fn is_bcs_code(code: &str) -> bool {
    BCS_CODE.is_match(code)
}

/// Header and section files follow their own fixed naming.
#[must_use]
pub fn is_fixed_name(name: &str) -> bool {
    name.starts_with(HEADER_STEM) || name.starts_with(SECTION_STEM)
}

/// The pattern rule files must match, for messages.
#[must_use]
pub fn rule_file_pattern() -> &'static str {
    RULE_FILE_NAME.as_str()
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
