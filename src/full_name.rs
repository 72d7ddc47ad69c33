use std::fmt;

use crate::config::{Config, NameOrder};
use crate::error::NameError;
use crate::name::{Capitalization, FirstName, LastName, Name, Namon};
use crate::validator;

/// The canonical, validated form of a person's name.
///
/// Built only by the parsers (or [`FullName::new`], which runs the same
/// checks); immutable afterwards. Every transformation returns a new value.
/// Rendering re-reads the shared [`Config`] on each call, except for the name
/// order, which is captured at construction so that builder edits can reorder
/// one name without touching its siblings.
#[derive(Debug, Clone)]
pub struct FullName {
    prefix: Option<Name>,
    first: FirstName,
    middles: Vec<Name>,
    last: LastName,
    suffix: Option<Name>,
    config: Config,
    order: NameOrder,
}

impl FullName {
    /// Validates the structured parts and constructs the aggregate.
    ///
    /// Grammar checks honor the configuration's bypass flag; the structural
    /// requirement that the first and last names are non-empty always holds.
    pub fn new(
        prefix: Option<Name>,
        first: FirstName,
        middles: Vec<Name>,
        last: LastName,
        suffix: Option<Name>,
        config: Config,
    ) -> Result<Self, NameError> {
        if first.value().is_empty() {
            return Err(NameError::invalid_input("the first name must not be empty"));
        }
        if last.father().is_empty() {
            return Err(NameError::invalid_input("the last name must not be empty"));
        }

        if !config.bypass() {
            if let Some(p) = &prefix {
                validator::namon(Namon::Prefix, p.value())?;
            }
            validator::first_name(&first)?;
            for middle in &middles {
                validator::middle_name(middle.value())?;
            }
            validator::last_name(&last)?;
            if let Some(s) = &suffix {
                validator::namon(Namon::Suffix, s.value())?;
            }
        }

        let order = config.order();
        Ok(FullName {
            prefix,
            first,
            middles,
            last,
            suffix,
            config,
            order,
        })
    }

    pub fn prefix(&self) -> Option<&Name> {
        self.prefix.as_ref()
    }

    pub fn first(&self) -> &FirstName {
        &self.first
    }

    pub fn middles(&self) -> &[Name] {
        &self.middles
    }

    pub fn has_middles(&self) -> bool {
        !self.middles.is_empty()
    }

    pub fn last(&self) -> &LastName {
        &self.last
    }

    pub fn suffix(&self) -> Option<&Name> {
        self.suffix.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn order(&self) -> NameOrder {
        self.order
    }

    /// A copy reduced to the first and last names.
    pub fn shortened(&self) -> FullName {
        FullName {
            prefix: None,
            first: FirstName::new(self.first.value()),
            middles: Vec::new(),
            last: self.last.clone(),
            suffix: None,
            config: self.config.clone(),
            order: self.order,
        }
    }

    /// A copy rendered under `order`; the shared configuration keeps its own
    /// stored order.
    pub fn reordered(&self, order: NameOrder) -> FullName {
        let mut copy = self.clone();
        copy.order = order;
        copy
    }

    /// A copy with the opposite order.
    pub fn flipped(&self) -> FullName {
        self.reordered(self.order.flipped())
    }

    /// A copy with every token upper-cased.
    pub fn uppercased(&self) -> FullName {
        FullName {
            prefix: self.prefix.as_ref().map(|p| p.caps(Capitalization::All)),
            first: self.first.caps(Capitalization::All),
            middles: self
                .middles
                .iter()
                .map(|m| m.caps(Capitalization::All))
                .collect(),
            last: self.last.caps(Capitalization::All),
            suffix: self.suffix.as_ref().map(|s| s.caps(Capitalization::All)),
            config: self.config.clone(),
            order: self.order,
        }
    }

    /// A copy with every token lower-cased.
    pub fn lowercased(&self) -> FullName {
        FullName {
            prefix: self.prefix.as_ref().map(|p| p.decaps(Capitalization::All)),
            first: self.first.decaps(Capitalization::All),
            middles: self
                .middles
                .iter()
                .map(|m| m.decaps(Capitalization::All))
                .collect(),
            last: self.last.decaps(Capitalization::All),
            suffix: self.suffix.as_ref().map(|s| s.decaps(Capitalization::All)),
            config: self.config.clone(),
            order: self.order,
        }
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.longest_lossy())
    }
}
