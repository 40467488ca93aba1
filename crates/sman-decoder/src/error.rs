/// Errors that can occur while pulling tag records from a buffer.
///
/// Clean end of message is *not* an error — [`TagIter::next_tag`] signals it
/// as `Ok(None)`. Both variants here are genuine failures: after either one
/// the iterator's cursor is wherever the partial scan stopped and is no
/// longer trustworthy, so the caller must [`reset`] before reusing the
/// iterator on a fresh buffer.
///
/// ```text
///   DecodeError
///   ├── FrameTooShort   ← fewer bytes remain than the current step needs
///   └── InvalidLength   ← length field unparseable or over the 10 MiB cap
/// ```
///
/// [`TagIter::next_tag`]: crate::TagIter::next_tag
/// [`reset`]: crate::TagIter::reset
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Fewer bytes remain than the current step requires.
    ///
    /// Raised both by the initial minimum-frame check (a record needs at
    /// least 4 tag digits plus one length-or-separator byte) and by a
    /// payload shortfall, where the length field promises more value bytes
    /// than the buffer holds.
    #[error("record truncated at offset {offset}: needed {needed} bytes, {remaining} remain")]
    FrameTooShort {
        /// Where the failing record began.
        offset: usize,
        /// How many bytes the current step required.
        needed: usize,
        /// How many bytes were actually left.
        remaining: usize,
    },

    /// The decimal length field failed to parse as a non-negative integer,
    /// or the parsed length exceeds [`MAX_VALUE_LEN`].
    ///
    /// [`MAX_VALUE_LEN`]: sman_wire::MAX_VALUE_LEN
    #[error("invalid length field at offset {offset}")]
    InvalidLength { offset: usize },
}
