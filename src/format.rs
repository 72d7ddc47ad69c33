//! Rendering of a [`FullName`] back to text: the fixed forms (shortest,
//! longest, public), initials, the pattern mini-interpreter and the
//! zipped/compacted variants.

use serde::{Deserialize, Serialize};

use crate::config::{NameOrder, SurnameFormat, Title};
use crate::error::NameError;
use crate::full_name::FullName;
use crate::name::Name;

/// Which parts `zip` compacts to their initial letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Flatten {
    /// Compact the first name, keep the rest in full.
    FirstName,
    /// Compact the middle names only.
    MiddleName,
    /// Compact the last name only.
    LastName,
    /// Compact the first and middle names.
    FirstMid,
    /// Compact the middle and last names.
    MidLast,
    /// Compact everything except the first name.
    All,
}

impl FullName {
    /// All present parts joined with the configured separator, respecting
    /// order, surname format, titling style and suffix punctuation.
    pub fn longest(&self) -> Result<String, NameError> {
        self.longest_with(self.config().surname())
    }

    /// The longest form, substituting the paternal surname when the
    /// configured surname format cannot be rendered. This is what `Display`
    /// uses, so `to_string()` never fails.
    pub fn longest_lossy(&self) -> String {
        self.longest()
            .or_else(|_| self.longest_with(SurnameFormat::Father))
            .unwrap_or_default()
    }

    fn longest_with(&self, surname: SurnameFormat) -> Result<String, NameError> {
        let opts = self.config().options();
        let sep = opts.separator.as_str();

        let mut parts: Vec<String> = Vec::new();
        if let Some(prefix) = self.prefix_rendered() {
            parts.push(prefix);
        }
        match self.order() {
            NameOrder::FirstName => {
                parts.push(self.first().to_str(true));
                parts.extend(self.middles().iter().map(|m| m.value().to_string()));
                parts.push(self.last().to_str(Some(surname))?);
            }
            NameOrder::LastName => {
                parts.push(self.last().to_str(Some(surname))?);
                parts.push(self.first().to_str(true));
                parts.extend(self.middles().iter().map(|m| m.value().to_string()));
            }
        }

        let mut out = parts.join(sep);
        if let Some(suffix) = self.suffix() {
            if opts.ending {
                out.push(',');
            }
            out.push_str(sep);
            out.push_str(suffix.value());
        }
        Ok(out)
    }

    /// First and last name only (or the reverse, per the order), ignoring
    /// prefix, middles and suffix.
    pub fn shortest(&self) -> Result<String, NameError> {
        let opts = self.config().options();
        let sep = opts.separator.as_str();
        let first = self.first().to_str(false);
        let last = self.last().to_str(Some(opts.surname))?;
        Ok(match self.order() {
            NameOrder::FirstName => format!("{first}{sep}{last}"),
            NameOrder::LastName => format!("{last}{sep}{first}"),
        })
    }

    /// The salutation-friendly form: first name plus the last name's
    /// initial and a period, e.g. `Jane D.`.
    pub fn public_form(&self) -> Result<String, NameError> {
        let opts = self.config().options();
        let last = self.last().to_str(Some(opts.surname))?;
        let initial = last.chars().next().map(String::from).unwrap_or_default();
        Ok(format!("{} {initial}.", self.first().to_str(false)))
    }

    /// First character of each included part, in rendering order. The prefix
    /// and suffix never contribute.
    pub fn initials(&self, with_mid: bool) -> Result<Vec<String>, NameError> {
        let opts = self.config().options();
        let mut initials: Vec<String> = Vec::new();
        match self.order() {
            NameOrder::FirstName => {
                initials.extend(self.first().initials(false));
                if with_mid {
                    initials.extend(self.middles().iter().map(Name::initial));
                }
                initials.extend(self.last().initials(Some(opts.surname))?);
            }
            NameOrder::LastName => {
                initials.extend(self.last().initials(Some(opts.surname))?);
                initials.extend(self.first().initials(false));
                if with_mid {
                    initials.extend(self.middles().iter().map(Name::initial));
                }
            }
        }
        Ok(initials)
    }

    /// Character count of the longest form's parts, excluding the joining
    /// separators and the suffix comma. Characters inside a token (an
    /// internal hyphen, the US titling period) still count.
    pub fn count(&self) -> Result<usize, NameError> {
        let opts = self.config().options();
        let mut total = 0;
        if let Some(prefix) = self.prefix_rendered() {
            total += prefix.chars().count();
        }
        total += self.first().value().chars().count();
        for extra in self.first().more() {
            total += extra.value().chars().count();
        }
        for middle in self.middles() {
            total += middle.value().chars().count();
        }
        total += self.last().to_str(Some(opts.surname))?.chars().count();
        if let Some(suffix) = self.suffix() {
            total += suffix.value().chars().count();
        }
        Ok(total)
    }

    /// Expands a pattern where recognized letters stand for name parts.
    ///
    /// `f l m p s` render the natural form of the first name, last name,
    /// middle names, prefix and suffix; their uppercase twins render the
    /// fully upper-cased form. `i`/`I` render the joined initials, `o`/`O`
    /// the public form. `$f`, `$l` and `$m` render the bare initial of that
    /// part. Anything unrecognized passes through unchanged.
    pub fn format(&self, pattern: &str) -> Result<String, NameError> {
        let opts = self.config().options();
        let mut out = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '$' => match chars.peek() {
                    Some('f') => {
                        chars.next();
                        out.push_str(&initial_of(&self.first().to_str(false)));
                    }
                    Some('l') => {
                        chars.next();
                        out.push_str(&initial_of(&self.last().to_str(Some(opts.surname))?));
                    }
                    Some('m') => {
                        chars.next();
                        if let Some(middle) = self.middles().first() {
                            out.push_str(&middle.initial());
                        }
                    }
                    _ => out.push('$'),
                },
                'f' => out.push_str(&self.first().to_str(true)),
                'F' => out.push_str(&self.first().to_str(true).to_uppercase()),
                'l' => out.push_str(&self.last().to_str(Some(opts.surname))?),
                'L' => out.push_str(&self.last().to_str(Some(opts.surname))?.to_uppercase()),
                'm' => out.push_str(&self.middles_joined()),
                'M' => out.push_str(&self.middles_joined().to_uppercase()),
                'p' => {
                    if let Some(prefix) = self.prefix_rendered() {
                        out.push_str(&prefix);
                    }
                }
                'P' => {
                    if let Some(prefix) = self.prefix_rendered() {
                        out.push_str(&prefix.to_uppercase());
                    }
                }
                's' => {
                    if let Some(suffix) = self.suffix() {
                        out.push_str(suffix.value());
                    }
                }
                'S' => {
                    if let Some(suffix) = self.suffix() {
                        out.push_str(&suffix.value().to_uppercase());
                    }
                }
                'i' => out.push_str(&self.initials(true)?.concat()),
                'I' => out.push_str(&self.initials(true)?.concat().to_uppercase()),
                'o' => out.push_str(&self.public_form()?),
                'O' => out.push_str(&self.public_form()?.to_uppercase()),
                other => out.push(other),
            }
        }
        Ok(out)
    }

    /// Compacts the parts selected by `by` to their initial letter, keeping
    /// the rest in full. `with_period` appends a period to each compacted
    /// initial. The prefix and suffix never take part.
    pub fn zip(&self, by: Flatten, with_period: bool) -> Result<String, NameError> {
        let opts = self.config().options();
        let sep = opts.separator.as_str();
        let period = if with_period { "." } else { "" };
        let compact = |text: &str| format!("{}{period}", initial_of(text));

        let (flat_first, flat_mid, flat_last) = match by {
            Flatten::FirstName => (true, false, false),
            Flatten::MiddleName => (false, true, false),
            Flatten::LastName => (false, false, true),
            Flatten::FirstMid => (true, true, false),
            Flatten::MidLast | Flatten::All => (false, true, true),
        };

        let first = if flat_first {
            compact(self.first().value())
        } else {
            self.first().to_str(true)
        };
        let last_full = self.last().to_str(Some(opts.surname))?;
        let last = if flat_last { compact(&last_full) } else { last_full };
        let middles: Vec<String> = self
            .middles()
            .iter()
            .map(|m| {
                if flat_mid {
                    compact(m.value())
                } else {
                    m.value().to_string()
                }
            })
            .collect();

        let mut parts: Vec<String> = Vec::new();
        match self.order() {
            NameOrder::FirstName => {
                parts.push(first);
                parts.extend(middles);
                parts.push(last);
            }
            NameOrder::LastName => {
                parts.push(last);
                parts.push(first);
                parts.extend(middles);
            }
        }
        Ok(parts.join(sep))
    }

    /// The prefix with titling applied: US style guarantees a trailing
    /// period, UK style strips one.
    pub(crate) fn prefix_rendered(&self) -> Option<String> {
        let prefix = self.prefix()?;
        let text = prefix.value();
        Some(match self.config().title() {
            Title::Us if !text.ends_with('.') => format!("{text}."),
            Title::Us => text.to_string(),
            Title::Uk => text.trim_end_matches('.').to_string(),
        })
    }

    fn middles_joined(&self) -> String {
        self.middles()
            .iter()
            .map(Name::value)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn initial_of(text: &str) -> String {
    text.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::parser;

    fn jane_ann_doe() -> FullName {
        parser::from_text("Jane Ann Doe", &Config::default()).unwrap()
    }

    #[test]
    fn test_longest_and_shortest() {
        let name = jane_ann_doe();
        assert_eq!(name.longest().unwrap(), "Jane Ann Doe");
        assert_eq!(name.shortest().unwrap(), "Jane Doe");
    }

    #[test]
    fn test_public_form() {
        assert_eq!(jane_ann_doe().public_form().unwrap(), "Jane D.");
    }

    #[test]
    fn test_initials_with_and_without_middles() {
        let name = jane_ann_doe();
        assert_eq!(name.initials(false).unwrap(), vec!["J", "D"]);
        assert_eq!(name.initials(true).unwrap(), vec!["J", "A", "D"]);
    }

    #[test]
    fn test_count_excludes_separators() {
        // "Jane Ann Doe" has 12 characters, 2 of them separators.
        assert_eq!(jane_ann_doe().count().unwrap(), 10);
    }

    #[test]
    fn test_format_plain_tokens() {
        let name = jane_ann_doe();
        assert_eq!(name.format("f l").unwrap(), "Jane Doe");
        assert_eq!(name.format("L, f m").unwrap(), "DOE, Jane Ann");
    }

    #[test]
    fn test_format_sigil_tokens() {
        let name = jane_ann_doe();
        assert_eq!(name.format("$f$m$l").unwrap(), "JAD");
        assert_eq!(name.format("$f. $l.").unwrap(), "J. D.");
    }

    #[test]
    fn test_format_passes_unknown_through() {
        let name = jane_ann_doe();
        assert_eq!(name.format("f (x) l").unwrap(), "Jane (x) Doe");
        assert_eq!(name.format("$z").unwrap(), "$z");
    }

    #[test]
    fn test_format_composites() {
        let name = jane_ann_doe();
        assert_eq!(name.format("i").unwrap(), "JAD");
        assert_eq!(name.format("o").unwrap(), "Jane D.");
        assert_eq!(name.format("O").unwrap(), "JANE D.");
    }

    #[test]
    fn test_display_never_fails() {
        let config = Config::merge(
            "fmt_display",
            crate::config::OptionsOverride {
                surname: Some(SurnameFormat::Mother),
                ..Default::default()
            },
        );
        let name = parser::from_list(&["Jane", "Doe"], &config).unwrap();
        // The typed surface reports the absent maternal name...
        assert!(name.longest().is_err());
        // ...while Display falls back to the paternal surname.
        assert_eq!(name.to_string(), "Jane Doe");
        assert_eq!(name.longest_lossy(), "Jane Doe");
    }

    #[test]
    fn test_zip_targets() {
        let name = jane_ann_doe();
        assert_eq!(name.zip(Flatten::All, true).unwrap(), "Jane A. D.");
        assert_eq!(name.zip(Flatten::All, false).unwrap(), "Jane A D");
        assert_eq!(name.zip(Flatten::FirstName, true).unwrap(), "J. Ann Doe");
        assert_eq!(name.zip(Flatten::MiddleName, true).unwrap(), "Jane A. Doe");
        assert_eq!(name.zip(Flatten::LastName, true).unwrap(), "Jane Ann D.");
        assert_eq!(name.zip(Flatten::FirstMid, true).unwrap(), "J. A. Doe");
        assert_eq!(name.zip(Flatten::MidLast, true).unwrap(), "Jane A. D.");
    }
}
