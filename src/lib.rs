//! Person-name parsing, validation, formatting and progressive editing.
//!
//! Raw input in any of four shapes (a delimited string, an ordered token
//! list, a list of typed parts, or a key/value map) is normalized into a
//! validated [`FullName`], which renders back to text in several forms and
//! can be edited step by step through a [`NameBuilder`] with history,
//! rollback and subscriber broadcast.
//!
//! # Examples
//!
//! ```rust
//! use namewise::{Config, NameBuilder, NameError, parser};
//!
//! fn main() -> Result<(), NameError> {
//!     let config = Config::get("docs");
//!     let name = parser::from_text("Mr Jane Ann Doe PhD", &config)?;
//!
//!     assert_eq!(name.shortest()?, "Jane Doe");
//!     assert_eq!(name.public_form()?, "Jane D.");
//!     assert_eq!(name.initials(true)?, vec!["J", "A", "D"]);
//!
//!     let mut builder = NameBuilder::new(name);
//!     builder.shorten()?;
//!     builder.uppercase()?;
//!     builder.rollback()?;
//!     let final_name = builder.finalize()?;
//!     assert_eq!(final_name.longest()?, "Jane Doe");
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod full_name;
pub mod name;
pub mod parser;
pub mod validator;

// Re-export commonly used types for convenience
pub use builder::{BuilderState, NameBuilder};
pub use config::{Config, NameOrder, Options, OptionsOverride, Separator, SurnameFormat, Title};
pub use error::NameError;
pub use format::Flatten;
pub use full_name::FullName;
pub use name::{Capitalization, FirstName, LastName, Name, Namon};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
