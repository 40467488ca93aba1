#![warn(clippy::pedantic)]

pub mod decimal;
pub mod error;
pub mod hex4;
pub mod tag;

pub use error::WireError;
pub use tag::Tag;

/// Hard ceiling on a single value's byte length (10 MiB), enforced on both
/// the encode and decode paths. A length field or supplied value exceeding
/// this is an error, never a silent truncation.
pub const MAX_VALUE_LEN: usize = 10 * 1024 * 1024;

/// Bit 15 of the 16-bit wire tag field marks a constructor record.
pub const CONSTRUCTOR_BIT: u16 = 0x8000;

/// Mask that clears the constructor bit, leaving the 15-bit tag id.
pub const TAG_ID_MASK: u16 = 0x7FFF;

/// Minimum bytes a record can occupy from its first byte: 4 hex tag digits
/// plus one length-or-separator byte.
pub const MIN_RECORD_LEN: usize = 5;
