use sman_decoder::TagIter;
use sman_encoder::SmanEncoder;
use sman_wire::Tag;

use crate::error::MessageError;

/// A whole SMAN message: a typed header record plus its ordered tags.
///
/// The record layer treats every tag alike; this layer adds the message
/// convention on top:
///
/// ```text
/// ┌────────────────────────────────────────────────────────────┐
/// │ type record   constructor tag — the message type           │
/// │               sentinel form when it carries no content,    │
/// │               explicit length when it nests further records│
/// │ tag records   ordered, non-constructor, opaque values      │
/// │ terminator    null tag (optional on decode)                │
/// │ '\n'          trailing delimiter on encode                 │
/// └────────────────────────────────────────────────────────────┘
/// ```
///
/// Tags keep their wire order — decode, tweak one value with
/// [`set_tag`](Self::set_tag), re-encode, and every other byte of the
/// message is reproduced as it came in.
///
/// ```rust
/// use sman_message::SmanMessage;
///
/// let mut msg = SmanMessage::decode(b"9001 10004 ABCD20001 X00000 \n").unwrap();
/// assert_eq!(msg.msg_type, 0x1001);
/// assert_eq!(msg.tag(0x1000), Some(&b"ABCD"[..]));
///
/// msg.set_tag(0x2000, b"Y".to_vec());
/// assert_eq!(msg.encode().unwrap(), b"9001 10004 ABCD20001 Y00000 \n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SmanMessage {
    /// The masked 15-bit id of the leading constructor record.
    pub msg_type: u16,

    /// Content of the type record. Empty for the common sentinel form;
    /// non-empty when the constructor carried an explicit length, in which
    /// case it conventionally holds further nested tag records, opaque to
    /// this layer.
    pub type_value: Vec<u8>,

    /// Tag id/value pairs in wire order. Duplicate ids are preserved.
    pub tags: Vec<(u16, Vec<u8>)>,
}

impl SmanMessage {
    /// Create an empty message of the given type.
    #[must_use]
    pub fn new(msg_type: u16) -> Self {
        Self {
            msg_type,
            type_value: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Parse one message from the front of `data`.
    ///
    /// The first record must be a constructor — its masked id becomes
    /// [`msg_type`](Self::msg_type). Records then accumulate until the
    /// null terminator or a clean end of buffer; the terminator is
    /// optional, and anything after it is ignored.
    ///
    /// # Errors
    ///
    /// - [`MessageError::Empty`] if the buffer holds no records.
    /// - [`MessageError::NoConstructor`] if the first record is not a
    ///   constructor.
    /// - [`MessageError::Decode`] for any record-level failure.
    pub fn decode(data: &[u8]) -> Result<Self, MessageError> {
        let mut iter = TagIter::new();

        let first = iter
            .next_tag(data, true)?
            .ok_or(MessageError::Empty)?;
        if !first.is_constructor {
            return Err(MessageError::NoConstructor { id: first.id });
        }

        let mut msg = Self {
            msg_type: first.id,
            type_value: first.value.into_owned(),
            tags: Vec::new(),
        };

        while let Some(tag) = iter.next_tag(data, true)? {
            if tag.is_terminator() {
                break;
            }
            msg.tags.push((tag.id, tag.value.into_owned()));
        }

        Ok(msg)
    }

    /// Serialize this message, terminator and trailing line feed included.
    ///
    /// The type record uses the sentinel form when `type_value` is empty
    /// and an explicit length otherwise; tags always carry explicit
    /// lengths.
    ///
    /// # Errors
    ///
    /// [`MessageError::Encode`] if any value exceeds the 10 MiB ceiling.
    pub fn encode(&self) -> Result<Vec<u8>, MessageError> {
        let mut enc = SmanEncoder::new();

        let type_tag = Tag::new(self.msg_type, true, &self.type_value);
        enc.add_tag(&type_tag, self.type_value.is_empty())?;

        for (id, value) in &self.tags {
            enc.add_tag(&Tag::new(*id, false, value), false)?;
        }

        enc.finalize(true);
        Ok(enc.into_bytes())
    }

    /// Value of the first tag with the given id, if present.
    #[must_use]
    pub fn tag(&self, id: u16) -> Option<&[u8]> {
        self.tags
            .iter()
            .find(|(tag_id, _)| *tag_id == id)
            .map(|(_, value)| value.as_slice())
    }

    /// Replace the first tag with the given id, preserving its position;
    /// append a new tag when the id is absent.
    pub fn set_tag(&mut self, id: u16, value: Vec<u8>) {
        match self.tags.iter_mut().find(|(tag_id, _)| *tag_id == id) {
            Some((_, slot)) => *slot = value,
            None => self.tags.push((id, value)),
        }
    }
}
