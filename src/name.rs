use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SurnameFormat;
use crate::error::NameError;

/// The five semantic roles a raw token can play inside a full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Namon {
    Prefix,
    FirstName,
    MiddleName,
    LastName,
    Suffix,
}

impl Namon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namon::Prefix => "prefix",
            Namon::FirstName => "firstName",
            Namon::MiddleName => "middleName",
            Namon::LastName => "lastName",
            Namon::Suffix => "suffix",
        }
    }
}

impl fmt::Display for Namon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of a token a capitalization pass touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capitalization {
    None,
    Initial,
    All,
}

fn cap_initial(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn decap_initial(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A single name part: one token tagged with its semantic role and the
/// capitalization policy last applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    value: String,
    kind: Namon,
    caps: Capitalization,
}

impl Name {
    pub fn new(value: impl Into<String>, kind: Namon) -> Self {
        Name {
            value: value.into(),
            kind,
            caps: Capitalization::None,
        }
    }

    pub fn prefix(value: impl Into<String>) -> Self {
        Name::new(value, Namon::Prefix)
    }

    pub fn first(value: impl Into<String>) -> Self {
        Name::new(value, Namon::FirstName)
    }

    pub fn middle(value: impl Into<String>) -> Self {
        Name::new(value, Namon::MiddleName)
    }

    pub fn last(value: impl Into<String>) -> Self {
        Name::new(value, Namon::LastName)
    }

    pub fn suffix(value: impl Into<String>) -> Self {
        Name::new(value, Namon::Suffix)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> Namon {
        self.kind
    }

    pub fn capitalization(&self) -> Capitalization {
        self.caps
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// First character of the token, e.g. "J" for "Jane".
    pub fn initial(&self) -> String {
        self.value.chars().next().map(String::from).unwrap_or_default()
    }

    /// A copy with `policy` applied to the text.
    pub fn caps(&self, policy: Capitalization) -> Name {
        let value = match policy {
            Capitalization::None => self.value.clone(),
            Capitalization::Initial => cap_initial(&self.value),
            Capitalization::All => self.value.to_uppercase(),
        };
        Name {
            value,
            kind: self.kind,
            caps: policy,
        }
    }

    /// A copy with the inverse of `policy` applied to the text.
    pub fn decaps(&self, policy: Capitalization) -> Name {
        let value = match policy {
            Capitalization::None => self.value.clone(),
            Capitalization::Initial => decap_initial(&self.value),
            Capitalization::All => self.value.to_lowercase(),
        };
        Name {
            value,
            kind: self.kind,
            caps: policy,
        }
    }

    /// A copy with the first letter upper-cased and the remainder
    /// lower-cased. Applying it twice changes nothing more.
    pub fn normalize(&self) -> Name {
        let value = cap_initial(&self.value.to_lowercase());
        Name {
            value,
            kind: self.kind,
            caps: Capitalization::Initial,
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A first name: one base token plus any number of additional given names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstName {
    base: Name,
    more: Vec<Name>,
}

impl FirstName {
    pub fn new(value: impl Into<String>) -> Self {
        FirstName {
            base: Name::first(value),
            more: Vec::new(),
        }
    }

    pub fn with_more(value: impl Into<String>, more: Vec<String>) -> Self {
        FirstName {
            base: Name::first(value),
            more: more.into_iter().map(Name::first).collect(),
        }
    }

    pub fn value(&self) -> &str {
        self.base.value()
    }

    pub fn more(&self) -> &[Name] {
        &self.more
    }

    pub fn has_more(&self) -> bool {
        !self.more.is_empty()
    }

    /// The textual form, optionally including the additional given names.
    pub fn to_str(&self, with_more: bool) -> String {
        if with_more && self.has_more() {
            let mut out = self.base.value().to_string();
            for name in &self.more {
                out.push(' ');
                out.push_str(name.value());
            }
            out
        } else {
            self.base.value().to_string()
        }
    }

    pub fn initials(&self, with_more: bool) -> Vec<String> {
        let mut initials = vec![self.base.initial()];
        if with_more {
            initials.extend(self.more.iter().map(Name::initial));
        }
        initials
    }

    pub fn caps(&self, policy: Capitalization) -> FirstName {
        FirstName {
            base: self.base.caps(policy),
            more: self.more.iter().map(|n| n.caps(policy)).collect(),
        }
    }

    pub fn decaps(&self, policy: Capitalization) -> FirstName {
        FirstName {
            base: self.base.decaps(policy),
            more: self.more.iter().map(|n| n.decaps(policy)).collect(),
        }
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str(true))
    }
}

/// A last name: the paternal token, an optional maternal token, and the
/// format used when no explicit one is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastName {
    father: Name,
    mother: Option<Name>,
    format: SurnameFormat,
}

impl LastName {
    pub fn new(father: impl Into<String>, format: SurnameFormat) -> Self {
        LastName {
            father: Name::last(father),
            mother: None,
            format,
        }
    }

    pub fn with_mother(
        father: impl Into<String>,
        mother: impl Into<String>,
        format: SurnameFormat,
    ) -> Self {
        LastName {
            father: Name::last(father),
            mother: Some(Name::last(mother)),
            format,
        }
    }

    pub fn father(&self) -> &str {
        self.father.value()
    }

    pub fn mother(&self) -> Option<&str> {
        self.mother.as_ref().map(Name::value)
    }

    pub fn has_mother(&self) -> bool {
        self.mother.is_some()
    }

    pub fn format(&self) -> SurnameFormat {
        self.format
    }

    /// The textual form under `format`, or the stored format when `None`.
    ///
    /// Requesting the maternal component alone fails when it was never set;
    /// the combined formats fall back to the paternal component instead.
    pub fn to_str(&self, format: Option<SurnameFormat>) -> Result<String, NameError> {
        let format = format.unwrap_or(self.format);
        match format {
            SurnameFormat::Father => Ok(self.father.value().to_string()),
            SurnameFormat::Mother => match &self.mother {
                Some(mother) => Ok(mother.value().to_string()),
                None => Err(NameError::not_allowed(
                    "surname",
                    "no maternal surname was set",
                )),
            },
            SurnameFormat::Hyphenated => Ok(match &self.mother {
                Some(mother) => format!("{}-{}", self.father.value(), mother.value()),
                None => self.father.value().to_string(),
            }),
            SurnameFormat::All => Ok(match &self.mother {
                Some(mother) => format!("{} {}", self.father.value(), mother.value()),
                None => self.father.value().to_string(),
            }),
        }
    }

    pub fn initials(&self, format: Option<SurnameFormat>) -> Result<Vec<String>, NameError> {
        let format = format.unwrap_or(self.format);
        match format {
            SurnameFormat::Father => Ok(vec![self.father.initial()]),
            SurnameFormat::Mother => match &self.mother {
                Some(mother) => Ok(vec![mother.initial()]),
                None => Err(NameError::not_allowed(
                    "surname",
                    "no maternal surname was set",
                )),
            },
            SurnameFormat::Hyphenated | SurnameFormat::All => {
                let mut initials = vec![self.father.initial()];
                if let Some(mother) = &self.mother {
                    initials.push(mother.initial());
                }
                Ok(initials)
            }
        }
    }

    pub fn caps(&self, policy: Capitalization) -> LastName {
        LastName {
            father: self.father.caps(policy),
            mother: self.mother.as_ref().map(|m| m.caps(policy)),
            format: self.format,
        }
    }

    pub fn decaps(&self, policy: Capitalization) -> LastName {
        LastName {
            father: self.father.decaps(policy),
            mother: self.mother.as_ref().map(|m| m.decaps(policy)),
            format: self.format,
        }
    }
}

impl fmt::Display for LastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.father.value())
    }
}
