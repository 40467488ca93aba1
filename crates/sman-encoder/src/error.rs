/// Errors that can occur while appending records to an encoder.
///
/// Every `add_tag` call is atomic: all checks run before the first byte is
/// written, so a rejected call leaves the output buffer exactly as it was.
///
/// ```text
///   EncodeError
///   ├── ValueTooLarge      ← value exceeds the 10 MiB ceiling
///   └── SentinelWithValue  ← sentinel form requested for a non-empty value
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The supplied value exceeds [`MAX_VALUE_LEN`].
    ///
    /// [`MAX_VALUE_LEN`]: sman_wire::MAX_VALUE_LEN
    #[error("value too large: {len} bytes (limit {limit})")]
    ValueTooLarge { len: usize, limit: usize },

    /// The variable-length sentinel form was requested for a non-empty
    /// value. The sentinel omits the length field entirely, so it can only
    /// represent a zero-length value — emitting it with a payload would put
    /// a corrupt, ambiguous record on the wire.
    #[error("sentinel form cannot carry a non-empty value ({len} bytes)")]
    SentinelWithValue { len: usize },
}
