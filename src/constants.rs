// src/constants.rs - Shared constants used across the crate

/// Minimum number of raw tokens a name can be built from (first + last).
pub const MIN_NAME_TOKENS: usize = 2;

/// Maximum number of raw tokens a name can be built from
/// (prefix + first + middle + last + suffix).
pub const MAX_NAME_TOKENS: usize = 5;

/// Name of the configuration every name falls back to when the caller does
/// not ask for a named one.
pub const DEFAULT_CONFIG_NAME: &str = "default";

/// Character class accepted inside a name token: basic Latin, the Latin-1
/// supplement and extended-A block (covers Icelandic Ð/Þ and friends), Greek
/// and Cyrillic.
pub const NAME_ALPHABET: &str = "A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{00FF}\u{0100}-\u{017F}\u{0386}-\u{03CE}\u{0400}-\u{04FF}";

/// Capacity of the builder's broadcast channel. Subscribers slower than this
/// many pending edits start losing the oldest states.
pub const BUILDER_CHANNEL_CAPACITY: usize = 16;

/// Length of the generated id attached to each builder history entry.
pub const HISTORY_ID_LENGTH: usize = 8;
