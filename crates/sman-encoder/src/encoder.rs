use sman_wire::{MAX_VALUE_LEN, Tag, decimal, hex4};

use crate::error::EncodeError;

/// Append-only builder for a single SMAN message.
///
/// One [`add_tag`](Self::add_tag) call appends one record;
/// [`finalize`](Self::finalize) appends the null terminator record and an
/// optional trailing line feed, then hands back the composed buffer.
///
/// ```rust
/// use sman_encoder::SmanEncoder;
/// use sman_wire::Tag;
///
/// let mut enc = SmanEncoder::new();
/// enc.add_tag(&Tag::new(0x0012, false, b"hi"), false).unwrap();
/// let message = enc.finalize(false);
/// assert_eq!(message, b"00122 hi00000 ");
/// ```
///
/// # Output layout
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────┐
/// │ [per record]  │ TAG (4 hex digits) LEN? ' ' VALUE        │
/// │ [terminator]  │ "0000" "0" " "  — null tag, length 0     │
/// │ [optional]    │ '\n' when finalize(true)                 │
/// └───────────────┴──────────────────────────────────────────┘
/// ```
///
/// The encoder owns its buffer exclusively. [`reset`](Self::reset) empties
/// it for a fresh message; the reference returned by `finalize` borrows the
/// buffer and is invalidated by the next mutating call — the borrow checker
/// enforces that, so callers needing the bytes to outlive the encoder should
/// copy them out or use [`into_bytes`](Self::into_bytes).
#[derive(Debug, Default)]
pub struct SmanEncoder {
    buffer: Vec<u8>,
}

impl SmanEncoder {
    /// Create an encoder with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Append one tag record.
    ///
    /// The wire field is `(is_constructor << 15) | (id & 0x7FFF)`, encoded
    /// as 4 uppercase hex digits. With `variable_len` the length field is
    /// omitted (the sentinel form), which is only representable for an
    /// empty value; otherwise the value length is written in decimal with
    /// no leading zeros. The value bytes are appended verbatim — no
    /// escaping, any byte is opaque payload.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::ValueTooLarge`] if the value exceeds 10 MiB.
    /// - [`EncodeError::SentinelWithValue`] if `variable_len` is requested
    ///   for a non-empty value.
    ///
    /// On error the buffer is left unchanged.
    pub fn add_tag(&mut self, tag: &Tag<'_>, variable_len: bool) -> Result<(), EncodeError> {
        if tag.value.len() > MAX_VALUE_LEN {
            return Err(EncodeError::ValueTooLarge {
                len: tag.value.len(),
                limit: MAX_VALUE_LEN,
            });
        }
        if variable_len && !tag.value.is_empty() {
            return Err(EncodeError::SentinelWithValue {
                len: tag.value.len(),
            });
        }

        self.append_record(tag.wire_id(), &tag.value, variable_len);
        Ok(())
    }

    /// Terminate the message and return the composed buffer.
    ///
    /// Appends the null terminator record — tag field `0000`, explicit
    /// length `0`, separator, empty value — and, when `add_newline` is set,
    /// a single trailing line feed.
    ///
    /// The returned slice borrows the encoder's buffer: any subsequent
    /// mutating call (`add_tag`, `reset`, another `finalize`) invalidates
    /// it.
    pub fn finalize(&mut self, add_newline: bool) -> &[u8] {
        self.append_record(0, &[], false);
        if add_newline {
            self.buffer.push(b'\n');
        }
        &self.buffer
    }

    /// Empty the buffer; subsequent calls start a fresh message.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Bytes accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the encoder, returning the buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Append one record with no validation. Callers check bounds first.
    fn append_record(&mut self, wire_id: u16, value: &[u8], variable_len: bool) {
        let mut hex_buf = [0u8; 4];
        hex4::encode_hex4(wire_id, &mut hex_buf);
        self.buffer.extend_from_slice(&hex_buf);

        if !variable_len {
            let mut dec_buf = [0u8; decimal::MAX_DEC_BYTES];
            let n = decimal::encode_dec(value.len() as u64, &mut dec_buf);
            self.buffer.extend_from_slice(&dec_buf[..n]);
        }

        self.buffer.push(b' ');
        self.buffer.extend_from_slice(value);
    }
}

#[cfg(test)]
mod tests {
    use sman_decoder::TagIter;
    use sman_wire::MAX_VALUE_LEN;

    use super::*;

    #[test]
    fn encode_spec_example() {
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0x0012, false, b"hi"), false).unwrap();
        assert_eq!(enc.into_bytes(), b"00122 hi");
    }

    #[test]
    fn constructor_bit_in_wire_field() {
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0x1001, true, b""), true).unwrap();
        assert_eq!(enc.into_bytes(), b"9001 ");
    }

    #[test]
    fn id_is_masked_to_fifteen_bits() {
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0xFFFF, false, b"x"), false).unwrap();
        // Bit 15 belongs to the constructor flag, not the id
        assert_eq!(enc.into_bytes(), b"7FFF1 x");
    }

    #[test]
    fn explicit_zero_length() {
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0x1000, false, b""), false).unwrap();
        assert_eq!(enc.into_bytes(), b"10000 ");
    }

    #[test]
    fn sentinel_omits_length_field() {
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0x1000, false, b""), true).unwrap();
        assert_eq!(enc.into_bytes(), b"1000 ");
    }

    #[test]
    fn sentinel_rejects_non_empty_value() {
        let mut enc = SmanEncoder::new();
        let result = enc.add_tag(&Tag::new(0x1000, false, b"oops"), true);
        assert!(matches!(
            result,
            Err(EncodeError::SentinelWithValue { len: 4 })
        ));
        // Atomic: the rejected call left nothing behind
        assert!(enc.is_empty());
    }

    #[test]
    fn oversized_value_rejected() {
        let big = vec![0u8; MAX_VALUE_LEN + 1];
        let mut enc = SmanEncoder::new();
        let result = enc.add_tag(&Tag::new(1, false, &big), false);
        assert!(matches!(result, Err(EncodeError::ValueTooLarge { .. })));
        assert!(enc.is_empty());
    }

    #[test]
    fn max_sized_value_accepted() {
        let big = vec![b'x'; MAX_VALUE_LEN];
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(1, false, &big), false).unwrap();
        assert_eq!(enc.len(), 4 + 8 + 1 + MAX_VALUE_LEN);
    }

    #[test]
    fn rejected_call_leaves_earlier_records_intact() {
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0x0012, false, b"hi"), false).unwrap();
        let before = enc.len();

        let big = vec![0u8; MAX_VALUE_LEN + 1];
        assert!(enc.add_tag(&Tag::new(2, false, &big), false).is_err());
        assert_eq!(enc.len(), before);
    }

    #[test]
    fn finalize_appends_terminator() {
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0x0012, false, b"hi"), false).unwrap();
        assert_eq!(enc.finalize(false), b"00122 hi00000 ");
    }

    #[test]
    fn finalize_with_newline() {
        let mut enc = SmanEncoder::new();
        assert_eq!(enc.finalize(true), b"00000 \n");
    }

    #[test]
    fn finalized_terminator_decodes_as_null_tag() {
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0x0012, false, b"hi"), false).unwrap();
        let message = enc.finalize(true).to_vec();

        let mut iter = TagIter::new();
        let first = iter.next_tag(&message, false).unwrap().unwrap();
        assert_eq!(first.id, 0x0012);

        let terminator = iter.next_tag(&message, false).unwrap().unwrap();
        assert!(terminator.is_terminator());

        // Nothing after the terminator but the line feed — clean end
        assert!(iter.next_tag(&message, false).unwrap().is_none());
    }

    #[test]
    fn reset_starts_a_fresh_message() {
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0x0012, false, b"hi"), false).unwrap();
        enc.reset();
        assert!(enc.is_empty());

        enc.add_tag(&Tag::new(0x0034, false, b"yo"), false).unwrap();
        assert_eq!(enc.into_bytes(), b"00342 yo");
    }

    #[test]
    fn value_bytes_are_verbatim() {
        // Embedded spaces and line feeds are opaque payload
        let mut enc = SmanEncoder::new();
        enc.add_tag(&Tag::new(0x1000, false, b"a b\nc"), false).unwrap();
        assert_eq!(enc.into_bytes(), b"10005 a b\nc");
    }
}
