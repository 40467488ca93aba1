use sman_decoder::DecodeError;
use sman_encoder::EncodeError;

/// Errors from the message layer, on top of the record-level taxonomy.
///
/// ```text
///   MessageError
///   ├── Empty               ← buffer held no records at all
///   ├── NoConstructor       ← first record lacks the constructor flag
///   ├── Decode(DecodeError) ← from record-level parsing
///   └── Encode(EncodeError) ← from record-level serialization
/// ```
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The buffer ended before a single record was found, so there is no
    /// message type to anchor a message on.
    #[error("empty message: no records before end of buffer")]
    Empty,

    /// The first record of a message must carry the constructor flag —
    /// it is the message type.
    #[error("first record (id {id:#06X}) is not a constructor")]
    NoConstructor { id: u16 },

    /// A record-level decode failure.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A record-level encode failure.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
