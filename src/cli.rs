use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

use namewise::{Flatten, NameOrder, OptionsOverride, Separator, SurnameFormat, Title};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OrderArg {
    First,
    Last,
}

impl From<OrderArg> for NameOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::First => NameOrder::FirstName,
            OrderArg::Last => NameOrder::LastName,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TitleArg {
    Uk,
    Us,
}

impl From<TitleArg> for Title {
    fn from(arg: TitleArg) -> Self {
        match arg {
            TitleArg::Uk => Title::Uk,
            TitleArg::Us => Title::Us,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SeparatorArg {
    Colon,
    Comma,
    Hyphen,
    Period,
    Space,
    Underscore,
}

impl From<SeparatorArg> for Separator {
    fn from(arg: SeparatorArg) -> Self {
        match arg {
            SeparatorArg::Colon => Separator::Colon,
            SeparatorArg::Comma => Separator::Comma,
            SeparatorArg::Hyphen => Separator::Hyphen,
            SeparatorArg::Period => Separator::Period,
            SeparatorArg::Space => Separator::Space,
            SeparatorArg::Underscore => Separator::Underscore,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SurnameArg {
    Father,
    Mother,
    Hyphenated,
    All,
}

impl From<SurnameArg> for SurnameFormat {
    fn from(arg: SurnameArg) -> Self {
        match arg {
            SurnameArg::Father => SurnameFormat::Father,
            SurnameArg::Mother => SurnameFormat::Mother,
            SurnameArg::Hyphenated => SurnameFormat::Hyphenated,
            SurnameArg::All => SurnameFormat::All,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ZipArg {
    First,
    Middle,
    Last,
    FirstMid,
    MidLast,
    All,
}

impl From<ZipArg> for Flatten {
    fn from(arg: ZipArg) -> Self {
        match arg {
            ZipArg::First => Flatten::FirstName,
            ZipArg::Middle => Flatten::MiddleName,
            ZipArg::Last => Flatten::LastName,
            ZipArg::FirstMid => Flatten::FirstMid,
            ZipArg::MidLast => Flatten::MidLast,
            ZipArg::All => Flatten::All,
        }
    }
}

/// Person-name parser and formatter
///
/// Parses a raw name (a delimited string, or a JSON map with the keys
/// prefix/first/middle/last/suffix) and prints the rendered forms.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// The raw name to parse, e.g. "Mr Jane Ann Doe PhD".
    pub name: Option<String>,

    /// Parse a JSON map instead, e.g. '{"first":"Jane","last":"Doe"}'.
    #[arg(long = "json", value_name = "MAP", conflicts_with = "name")]
    pub json: Option<String>,

    /// Which name leads when parsing and rendering.
    #[arg(long = "order", help_heading = "Name Options")]
    pub order: Option<OrderArg>,

    /// Token splitting and joining the textual form.
    #[arg(long = "separator", help_heading = "Name Options")]
    pub separator: Option<SeparatorArg>,

    /// Prefix abbreviation convention: us appends a period ("Mr."), uk does not.
    #[arg(long = "title", help_heading = "Name Options")]
    pub title: Option<TitleArg>,

    /// Put a comma before the suffix ("Jane Doe, PhD").
    #[arg(long = "ending", help_heading = "Name Options")]
    pub ending: bool,

    /// How a paternal/maternal surname pair is rendered.
    #[arg(long = "surname", help_heading = "Name Options")]
    pub surname: Option<SurnameArg>,

    /// Skip the grammar checks; the input is trusted as already sanitized.
    #[arg(long = "no-validate", help_heading = "Name Options")]
    pub no_validate: bool,

    /// Print the initials as well.
    #[arg(short = 'i', long = "initials", help_heading = "Output")]
    pub initials: bool,

    /// Render a custom pattern, e.g. "L, f m" or "$f. $l.".
    #[arg(long = "pattern", value_name = "PATTERN", help_heading = "Output")]
    pub pattern: Option<String>,

    /// Print a compacted form with the selected parts reduced to initials.
    #[arg(long = "zip", value_name = "TARGET", help_heading = "Output")]
    pub zip: Option<ZipArg>,

    /// Leave the period off compacted initials ("Jane A D").
    #[arg(long = "no-period", help_heading = "Output", requires = "zip")]
    pub no_period: bool,

    /// Name of the shared configuration entry to use.
    #[arg(long = "config", value_name = "NAME", default_value = "cli")]
    pub config_name: String,

    /// Enable debug logging on stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,
}

/// Maps the option flags onto a configuration override set.
pub fn overrides(args: &Args) -> OptionsOverride {
    OptionsOverride {
        order: args.order.map(Into::into),
        separator: args.separator.map(Into::into),
        title: args.title.map(Into::into),
        ending: if args.ending { Some(true) } else { None },
        surname: args.surname.map(Into::into),
        bypass: if args.no_validate { Some(true) } else { None },
    }
}
