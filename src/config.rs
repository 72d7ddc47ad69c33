use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::constants::DEFAULT_CONFIG_NAME;

/// Which name leads when a full name is rendered or parsed positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameOrder {
    FirstName,
    LastName,
}

impl NameOrder {
    /// The opposite order, used by the builder's flip operation.
    pub fn flipped(self) -> Self {
        match self {
            NameOrder::FirstName => NameOrder::LastName,
            NameOrder::LastName => NameOrder::FirstName,
        }
    }
}

/// Abbreviation convention for prefixes: US style appends a period
/// ("Mr."), UK style does not ("Mr").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Title {
    Uk,
    Us,
}

/// Token used to join and split the textual form of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Separator {
    Colon,
    Comma,
    Empty,
    Hyphen,
    Period,
    SingleQuote,
    Space,
    Underscore,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Colon => ":",
            Separator::Comma => ",",
            Separator::Empty => "",
            Separator::Hyphen => "-",
            Separator::Period => ".",
            Separator::SingleQuote => "'",
            Separator::Space => " ",
            Separator::Underscore => "_",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a surname composed of paternal and maternal components is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurnameFormat {
    /// Paternal component only (default).
    Father,
    /// Maternal component only. Rendering fails when it was never set.
    Mother,
    /// `paternal-maternal`, falling back to paternal alone.
    Hyphenated,
    /// `paternal maternal`, falling back to paternal alone.
    All,
}

/// Option values shared by every name bound to the same configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub order: NameOrder,
    pub separator: Separator,
    pub title: Title,
    /// When set, a comma precedes the suffix ("Jane Doe, PhD").
    pub ending: bool,
    pub surname: SurnameFormat,
    /// Skip every grammar check. Arity checks still apply.
    pub bypass: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            order: NameOrder::FirstName,
            separator: Separator::Space,
            title: Title::Uk,
            ending: false,
            surname: SurnameFormat::Father,
            bypass: false,
        }
    }
}

/// Per-field overrides applied on top of an existing entry's current values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OptionsOverride {
    pub order: Option<NameOrder>,
    pub separator: Option<Separator>,
    pub title: Option<Title>,
    pub ending: Option<bool>,
    pub surname: Option<SurnameFormat>,
    pub bypass: Option<bool>,
}

/// Process-wide registry of named configurations. Entries are created on
/// first use and live for the rest of the process.
static REGISTRY: LazyLock<RwLock<HashMap<String, Arc<RwLock<Options>>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Handle to a named, shared, mutable configuration.
///
/// Two handles obtained under the same name point at the same option values:
/// a write through one is observed by reads through the other. Handles under
/// distinct names are fully independent. Writes are individually atomic, but
/// two builders mutating a shared configuration still race at the
/// read-modify-write level; callers who need isolation should pick distinct
/// configuration names.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    handle: Arc<RwLock<Options>>,
}

impl Config {
    /// Returns the configuration registered under `name`, creating it with
    /// default option values on first reference.
    pub fn get(name: &str) -> Self {
        let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
        let handle = registry
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(Options::default())))
            .clone();
        Config {
            name: name.to_string(),
            handle,
        }
    }

    /// Applies `overrides` field by field on top of the named entry's
    /// current values. Unset fields keep whatever the entry already holds;
    /// a brand-new entry starts from defaults.
    pub fn merge(name: &str, overrides: OptionsOverride) -> Self {
        let config = Config::get(name);
        {
            let mut options = config.write();
            if let Some(order) = overrides.order {
                options.order = order;
            }
            if let Some(separator) = overrides.separator {
                options.separator = separator;
            }
            if let Some(title) = overrides.title {
                options.title = title;
            }
            if let Some(ending) = overrides.ending {
                options.ending = ending;
            }
            if let Some(surname) = overrides.surname {
                options.surname = surname;
            }
            if let Some(bypass) = overrides.bypass {
                options.bypass = bypass;
            }
        }
        config
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the current option values.
    pub fn options(&self) -> Options {
        *self.handle.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn order(&self) -> NameOrder {
        self.options().order
    }

    pub fn separator(&self) -> Separator {
        self.options().separator
    }

    pub fn title(&self) -> Title {
        self.options().title
    }

    pub fn ending(&self) -> bool {
        self.options().ending
    }

    pub fn surname(&self) -> SurnameFormat {
        self.options().surname
    }

    pub fn bypass(&self) -> bool {
        self.options().bypass
    }

    pub fn set_order(&self, order: NameOrder) {
        self.write().order = order;
    }

    pub fn set_separator(&self, separator: Separator) {
        self.write().separator = separator;
    }

    pub fn set_title(&self, title: Title) {
        self.write().title = title;
    }

    pub fn set_ending(&self, ending: bool) {
        self.write().ending = ending;
    }

    pub fn set_surname(&self, surname: SurnameFormat) {
        self.write().surname = surname;
    }

    pub fn set_bypass(&self, bypass: bool) {
        self.write().bypass = bypass;
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Options> {
        self.handle.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::get(DEFAULT_CONFIG_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.order, NameOrder::FirstName);
        assert_eq!(options.separator, Separator::Space);
        assert_eq!(options.title, Title::Uk);
        assert!(!options.ending);
        assert_eq!(options.surname, SurnameFormat::Father);
        assert!(!options.bypass);
    }

    #[test]
    fn test_same_name_shares_values() {
        let a = Config::get("test_shared");
        let b = Config::get("test_shared");
        a.set_title(Title::Us);
        assert_eq!(b.title(), Title::Us, "writes must be visible to all handles");
    }

    #[test]
    fn test_distinct_names_are_independent() {
        let a = Config::get("test_independent_a");
        let b = Config::get("test_independent_b");
        a.set_order(NameOrder::LastName);
        assert_eq!(b.order(), NameOrder::FirstName);
    }

    #[test]
    fn test_merge_overrides_win_and_rest_keep_current() {
        let config = Config::get("test_merge");
        config.set_ending(true);

        let merged = Config::merge(
            "test_merge",
            OptionsOverride {
                title: Some(Title::Us),
                ..Default::default()
            },
        );
        assert_eq!(merged.title(), Title::Us);
        // Untouched field falls back to the entry's current value, not to
        // the hard default.
        assert!(merged.ending());
    }

    #[test]
    fn test_merge_absent_base_starts_from_defaults() {
        let merged = Config::merge(
            "test_merge_fresh",
            OptionsOverride {
                order: Some(NameOrder::LastName),
                ..Default::default()
            },
        );
        assert_eq!(merged.order(), NameOrder::LastName);
        assert_eq!(merged.separator(), Separator::Space);
    }

    #[test]
    fn test_order_flipped() {
        assert_eq!(NameOrder::FirstName.flipped(), NameOrder::LastName);
        assert_eq!(NameOrder::LastName.flipped(), NameOrder::FirstName);
    }

    #[test]
    fn test_separator_tokens() {
        assert_eq!(Separator::Space.as_str(), " ");
        assert_eq!(Separator::Empty.as_str(), "");
        assert_eq!(Separator::Hyphen.to_string(), "-");
    }
}
