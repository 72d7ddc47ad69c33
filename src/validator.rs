//! Grammar rules gating raw tokens before a name is constructed.
//!
//! Two rules exist: the generic `namon` rule accepts letter runs joined by a
//! single hyphen, apostrophe, period or space, while the stricter
//! `middleName` rule drops the period from the permitted separators. Every
//! rule is compiled once and reused for the rest of the process.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{MAX_NAME_TOKENS, MIN_NAME_TOKENS, NAME_ALPHABET};
use crate::error::NameError;
use crate::name::{FirstName, LastName, Name, Namon};

static NAMON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[{NAME_ALPHABET}]+(?:[-'. ][{NAME_ALPHABET}]+)*$"
    ))
    .unwrap()
});

static MIDDLE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[{NAME_ALPHABET}]+(?:[-' ][{NAME_ALPHABET}]+)*$"
    ))
    .unwrap()
});

/// Validates a raw token against the generic namon rule.
pub fn namon(kind: Namon, token: &str) -> Result<(), NameError> {
    if NAMON_RE.is_match(token) {
        Ok(())
    } else {
        Err(NameError::validation(kind, token, "namon"))
    }
}

/// Validates a raw token against the middle-name rule (no period allowed).
pub fn middle_name(token: &str) -> Result<(), NameError> {
    if MIDDLE_NAME_RE.is_match(token) {
        Ok(())
    } else {
        Err(NameError::validation(Namon::MiddleName, token, "middleName"))
    }
}

/// Validates a raw token at the rule its role requires.
pub fn token(kind: Namon, value: &str) -> Result<(), NameError> {
    match kind {
        Namon::MiddleName => middle_name(value),
        _ => namon(kind, value),
    }
}

/// Validates a structured first name: the base token plus every additional
/// given name, all under the generic rule. The first offending token wins.
pub fn first_name(first: &FirstName) -> Result<(), NameError> {
    namon(Namon::FirstName, first.value())?;
    for extra in first.more() {
        namon(Namon::FirstName, extra.value())?;
    }
    Ok(())
}

/// Validates a structured last name: paternal and, when set, maternal token.
pub fn last_name(last: &LastName) -> Result<(), NameError> {
    namon(Namon::LastName, last.father())?;
    if let Some(mother) = last.mother() {
        namon(Namon::LastName, mother)?;
    }
    Ok(())
}

/// Validates a list of typed parts: every token must satisfy the generic
/// rule, and middle entries must actually carry the middle-name kind.
pub fn names(parts: &[Name]) -> Result<(), NameError> {
    for part in parts {
        namon(part.kind(), part.value())?;
        if part.kind() == Namon::MiddleName {
            middle_name(part.value())?;
        }
    }
    Ok(())
}

/// Validates a key/value map input.
///
/// Shape checks (key count in 2..=5, mandatory `first`/`last`, no unknown
/// keys) always apply; content checks are skipped when `bypass` is set.
pub fn nama(map: &HashMap<String, String>, bypass: bool) -> Result<(), NameError> {
    if map.len() < MIN_NAME_TOKENS || map.len() > MAX_NAME_TOKENS {
        return Err(NameError::invalid_input(format!(
            "expected {MIN_NAME_TOKENS} to {MAX_NAME_TOKENS} keys, got {}",
            map.len()
        )));
    }
    for key in map.keys() {
        if !matches!(key.as_str(), "prefix" | "first" | "middle" | "last" | "suffix") {
            return Err(NameError::invalid_input(format!("unrecognized key '{key}'")));
        }
    }
    for required in ["first", "last"] {
        if !map.contains_key(required) {
            return Err(NameError::invalid_input(format!(
                "the '{required}' key is required"
            )));
        }
    }
    if bypass {
        return Ok(());
    }

    for (key, value) in map {
        match key.as_str() {
            "first" => namon(Namon::FirstName, value)?,
            "last" => namon(Namon::LastName, value)?,
            "prefix" => namon(Namon::Prefix, value)?,
            "suffix" => namon(Namon::Suffix, value)?,
            "middle" => {
                for token in value.split_whitespace() {
                    middle_name(token)?;
                }
            }
            _ => unreachable!("keys were checked above"),
        }
    }
    Ok(())
}
