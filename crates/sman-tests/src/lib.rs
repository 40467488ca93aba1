//! Shared helpers for the SMAN integration tests.
//!
//! Records are built here by direct byte construction, independent of
//! `sman-encoder`, so decoder tests can exercise wire shapes the encoder
//! refuses to produce (forged length fields, missing separators,
//! truncations).

#![warn(clippy::pedantic)]

/// Build one record in the explicit-length form:
/// 4 hex tag digits, decimal length, separator, value.
#[must_use]
pub fn raw_record(wire_id: u16, value: &[u8]) -> Vec<u8> {
    let mut out = format!("{wire_id:04X}{}", value.len()).into_bytes();
    out.push(b' ');
    out.extend_from_slice(value);
    out
}

/// Build one record in the sentinel form: 4 hex tag digits, bare
/// separator, no length field, empty value.
#[must_use]
pub fn raw_sentinel(wire_id: u16) -> Vec<u8> {
    let mut out = format!("{wire_id:04X}").into_bytes();
    out.push(b' ');
    out
}

/// Build a record with an arbitrary (possibly bogus) length field.
#[must_use]
pub fn raw_with_length(wire_id: u16, length_field: &str, value: &[u8]) -> Vec<u8> {
    let mut out = format!("{wire_id:04X}{length_field}").into_bytes();
    out.push(b' ');
    out.extend_from_slice(value);
    out
}

/// The null terminator record in its canonical explicit-length form.
#[must_use]
pub fn raw_terminator() -> Vec<u8> {
    raw_record(0x0000, b"")
}
