//! Adapters turning the four raw input shapes into a [`FullName`]:
//! a delimited string, an ordered token list, a list of typed parts, and a
//! key/value map. Every adapter validates fully before constructing, so a
//! partially populated name is never observable.

use std::collections::HashMap;

use tracing::debug;

use crate::config::{Config, NameOrder, Separator};
use crate::constants::{MAX_NAME_TOKENS, MIN_NAME_TOKENS};
use crate::error::NameError;
use crate::full_name::FullName;
use crate::name::{FirstName, LastName, Name, Namon};
use crate::validator;

/// Slot positions of each semantic role inside a raw token list, resolved
/// purely from the configured order and the token count. No content-based
/// guessing happens anywhere in positional parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameIndex {
    pub prefix: Option<usize>,
    pub first: usize,
    pub middle: Option<usize>,
    pub last: usize,
    pub suffix: Option<usize>,
}

impl NameIndex {
    /// Resolves the positional table for `count` tokens under `order`.
    pub fn resolve(order: NameOrder, count: usize) -> Result<Self, NameError> {
        if !(MIN_NAME_TOKENS..=MAX_NAME_TOKENS).contains(&count) {
            return Err(NameError::invalid_input(format!(
                "expected {MIN_NAME_TOKENS} to {MAX_NAME_TOKENS} tokens, got {count}"
            )));
        }
        let index = match (order, count) {
            (NameOrder::FirstName, 2) => NameIndex {
                prefix: None,
                first: 0,
                middle: None,
                last: 1,
                suffix: None,
            },
            (NameOrder::FirstName, 3) => NameIndex {
                prefix: None,
                first: 0,
                middle: Some(1),
                last: 2,
                suffix: None,
            },
            (NameOrder::FirstName, 4) => NameIndex {
                prefix: Some(0),
                first: 1,
                middle: Some(2),
                last: 3,
                suffix: None,
            },
            (NameOrder::FirstName, 5) => NameIndex {
                prefix: Some(0),
                first: 1,
                middle: Some(2),
                last: 3,
                suffix: Some(4),
            },
            (NameOrder::LastName, 2) => NameIndex {
                prefix: None,
                first: 1,
                middle: None,
                last: 0,
                suffix: None,
            },
            (NameOrder::LastName, 3) => NameIndex {
                prefix: None,
                first: 1,
                middle: Some(2),
                last: 0,
                suffix: None,
            },
            (NameOrder::LastName, 4) => NameIndex {
                prefix: Some(0),
                first: 2,
                middle: Some(3),
                last: 1,
                suffix: None,
            },
            (NameOrder::LastName, 5) => NameIndex {
                prefix: Some(0),
                first: 2,
                middle: Some(3),
                last: 1,
                suffix: Some(4),
            },
            _ => unreachable!("count was range-checked above"),
        };
        Ok(index)
    }

    /// The assigned slots, in (prefix, first, middle, last, suffix) role
    /// order, skipping absent roles.
    pub fn positions(&self) -> Vec<usize> {
        let mut slots = Vec::with_capacity(MAX_NAME_TOKENS);
        if let Some(p) = self.prefix {
            slots.push(p);
        }
        slots.push(self.first);
        if let Some(m) = self.middle {
            slots.push(m);
        }
        slots.push(self.last);
        if let Some(s) = self.suffix {
            slots.push(s);
        }
        slots
    }
}

/// Parses a delimited string by splitting it on the configured separator and
/// delegating to the token-list parser.
pub fn from_text(text: &str, config: &Config) -> Result<FullName, NameError> {
    let separator = config.separator();
    let tokens: Vec<&str> = match separator {
        Separator::Space => text.split_whitespace().collect(),
        Separator::Empty => {
            return Err(NameError::invalid_input(
                "cannot split a string on the empty separator",
            ));
        }
        sep => text
            .split(sep.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect(),
    };
    from_list(&tokens, config)
}

/// Parses an ordered token list under the positional index table.
pub fn from_list<S: AsRef<str>>(tokens: &[S], config: &Config) -> Result<FullName, NameError> {
    let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref().trim()).collect();
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(NameError::invalid_input("tokens must not be empty"));
    }

    let index = NameIndex::resolve(config.order(), tokens.len()).inspect_err(|e| {
        debug!(count = tokens.len(), "positional index resolution failed: {e}");
    })?;

    let prefix = index.prefix.map(|i| Name::prefix(tokens[i]));
    let first = FirstName::new(tokens[index.first]);
    let middles = index
        .middle
        .map(|i| vec![Name::middle(tokens[i])])
        .unwrap_or_default();
    let last = LastName::new(tokens[index.last], config.surname());
    let suffix = index.suffix.map(|i| Name::suffix(tokens[i]));

    FullName::new(prefix, first, middles, last, suffix, config.clone())
}

/// Parses a list of typed parts. The role comes from each part's kind, so
/// the input order does not matter; several middle names may accumulate, but
/// every other role may appear at most once.
pub fn from_names(parts: &[Name], config: &Config) -> Result<FullName, NameError> {
    if !(MIN_NAME_TOKENS..=MAX_NAME_TOKENS).contains(&parts.len()) {
        return Err(NameError::invalid_input(format!(
            "expected {MIN_NAME_TOKENS} to {MAX_NAME_TOKENS} parts, got {}",
            parts.len()
        )));
    }
    if !config.bypass() {
        validator::names(parts)?;
    }

    let mut prefix: Option<Name> = None;
    let mut first: Option<Name> = None;
    let mut middles: Vec<Name> = Vec::new();
    let mut last: Option<Name> = None;
    let mut suffix: Option<Name> = None;

    for part in parts {
        let slot = match part.kind() {
            Namon::Prefix => &mut prefix,
            Namon::FirstName => &mut first,
            Namon::MiddleName => {
                middles.push(part.clone());
                continue;
            }
            Namon::LastName => &mut last,
            Namon::Suffix => &mut suffix,
        };
        if slot.replace(part.clone()).is_some() {
            return Err(NameError::invalid_input(format!(
                "at most one {} part is allowed",
                part.kind()
            )));
        }
    }

    let first = first
        .ok_or_else(|| NameError::invalid_input("a firstName part is required"))?;
    let last = last
        .ok_or_else(|| NameError::invalid_input("a lastName part is required"))?;

    FullName::new(
        prefix,
        FirstName::new(first.value()),
        middles,
        LastName::new(last.value(), config.surname()),
        suffix,
        config.clone(),
    )
}

/// Parses a key/value map with the recognized keys
/// `prefix|first|middle|last|suffix`. A `middle` value holding several
/// whitespace-separated tokens becomes that many middle names.
pub fn from_map(map: &HashMap<String, String>, config: &Config) -> Result<FullName, NameError> {
    validator::nama(map, config.bypass()).inspect_err(|e| {
        debug!("map input rejected: {e}");
    })?;

    let prefix = map.get("prefix").map(|p| Name::prefix(p.as_str()));
    let first = FirstName::new(map["first"].as_str());
    let middles = map
        .get("middle")
        .map(|value| value.split_whitespace().map(Name::middle).collect())
        .unwrap_or_default();
    let last = LastName::new(map["last"].as_str(), config.surname());
    let suffix = map.get("suffix").map(|s| Name::suffix(s.as_str()));

    FullName::new(prefix, first, middles, last, suffix, config.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> std::ops::RangeInclusive<usize> {
        MIN_NAME_TOKENS..=MAX_NAME_TOKENS
    }

    #[test]
    fn test_index_is_a_permutation_for_every_order_and_count() {
        for order in [NameOrder::FirstName, NameOrder::LastName] {
            for count in counts() {
                let index = NameIndex::resolve(order, count).unwrap();
                let mut slots = index.positions();
                assert_eq!(slots.len(), count, "{order:?}/{count}: one slot per role");
                slots.sort_unstable();
                let expected: Vec<usize> = (0..count).collect();
                assert_eq!(
                    slots, expected,
                    "{order:?}/{count}: slots must be a permutation of 0..count"
                );
            }
        }
    }

    #[test]
    fn test_index_rejects_out_of_range_counts() {
        for count in [0, 1, 6] {
            assert!(NameIndex::resolve(NameOrder::FirstName, count).is_err());
        }
    }

    #[test]
    fn test_first_name_first_layouts() {
        let config = Config::get("parser_fnf");
        let name = from_list(&["Jane", "Doe"], &config).unwrap();
        assert_eq!(name.first().value(), "Jane");
        assert_eq!(name.last().father(), "Doe");

        let name = from_list(&["Mr", "Jane", "Ann", "Doe", "PhD"], &config).unwrap();
        assert_eq!(name.prefix().unwrap().value(), "Mr");
        assert_eq!(name.first().value(), "Jane");
        assert_eq!(name.middles()[0].value(), "Ann");
        assert_eq!(name.last().father(), "Doe");
        assert_eq!(name.suffix().unwrap().value(), "PhD");
    }

    #[test]
    fn test_last_name_first_layout() {
        let config = Config::merge(
            "parser_lnf",
            crate::config::OptionsOverride {
                order: Some(NameOrder::LastName),
                ..Default::default()
            },
        );
        // prefix last first middle
        let name = from_list(&["Mr", "Doe", "Jane", "Ann"], &config).unwrap();
        assert_eq!(name.prefix().unwrap().value(), "Mr");
        assert_eq!(name.last().father(), "Doe");
        assert_eq!(name.first().value(), "Jane");
        assert_eq!(name.middles()[0].value(), "Ann");
    }

    #[test]
    fn test_from_text_splits_on_configured_separator() {
        let name = from_text("Jane  Ann   Doe", &Config::get("parser_text")).unwrap();
        assert_eq!(name.first().value(), "Jane");
        assert_eq!(name.middles()[0].value(), "Ann");
        assert_eq!(name.last().father(), "Doe");

        let config = Config::merge(
            "parser_text_comma",
            crate::config::OptionsOverride {
                separator: Some(Separator::Comma),
                ..Default::default()
            },
        );
        let name = from_text("Jane, Doe", &config).unwrap();
        assert_eq!(name.first().value(), "Jane");
        assert_eq!(name.last().father(), "Doe");
    }

    #[test]
    fn test_from_text_empty_separator_is_rejected() {
        let config = Config::merge(
            "parser_text_empty",
            crate::config::OptionsOverride {
                separator: Some(Separator::Empty),
                ..Default::default()
            },
        );
        assert!(from_text("JaneDoe", &config).is_err());
    }

    #[test]
    fn test_from_list_rejects_bad_arity_and_content() {
        let config = Config::get("parser_bad");
        assert!(matches!(
            from_list(&["Jane"], &config),
            Err(NameError::InvalidInput { .. })
        ));
        assert!(matches!(
            from_list(&["Jane", "D0e"], &config),
            Err(NameError::Validation { .. })
        ));
    }

    #[test]
    fn test_bypass_suppresses_grammar_not_arity() {
        let config = Config::merge(
            "parser_bypass",
            crate::config::OptionsOverride {
                bypass: Some(true),
                ..Default::default()
            },
        );
        assert!(from_list(&["J4ne", "D0e"], &config).is_ok());
        assert!(from_list(&["J4ne"], &config).is_err());
    }

    #[test]
    fn test_from_names_accumulates_middles() {
        let config = Config::get("parser_names");
        let parts = vec![
            Name::middle("Ann"),
            Name::first("Jane"),
            Name::middle("Mary"),
            Name::last("Doe"),
        ];
        let name = from_names(&parts, &config).unwrap();
        assert_eq!(name.first().value(), "Jane");
        assert_eq!(name.middles().len(), 2);
        assert_eq!(name.last().father(), "Doe");
    }

    #[test]
    fn test_from_names_rejects_duplicates_and_missing_roles() {
        let config = Config::get("parser_names_bad");
        let duplicated = vec![Name::first("Jane"), Name::first("Joan"), Name::last("Doe")];
        assert!(matches!(
            from_names(&duplicated, &config),
            Err(NameError::InvalidInput { .. })
        ));

        let missing_last = vec![Name::first("Jane"), Name::middle("Ann")];
        assert!(from_names(&missing_last, &config).is_err());
    }

    #[test]
    fn test_from_map_roles_and_middle_split() {
        let config = Config::get("parser_map");
        let mut map = HashMap::new();
        map.insert("prefix".to_string(), "Mr".to_string());
        map.insert("first".to_string(), "Jane".to_string());
        map.insert("middle".to_string(), "Ann Mary".to_string());
        map.insert("last".to_string(), "Doe".to_string());
        let name = from_map(&map, &config).unwrap();
        assert_eq!(name.prefix().unwrap().value(), "Mr");
        assert_eq!(name.middles().len(), 2);
    }

    #[test]
    fn test_from_map_missing_last_names_the_key() {
        let config = Config::get("parser_map_bad");
        let mut map = HashMap::new();
        map.insert("first".to_string(), "Jane".to_string());
        map.insert("middle".to_string(), "Ann".to_string());
        let error = from_map(&map, &config).unwrap_err();
        assert_eq!(error.to_string(), "invalid input: the 'last' key is required");
    }
}
