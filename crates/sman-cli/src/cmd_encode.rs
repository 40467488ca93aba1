/// Implementation of `sman encode`.
///
/// Reads a JSON manifest, encodes each described message, and writes the
/// result as newline-delimited SMAN. The manifest shape is shared with
/// `sman decode`, so the two commands are inverses:
///
/// ```text
/// sman decode in.sman -o out.json
/// sman encode out.json -o roundtripped.sman   # byte-identical to in.sman
/// ```
use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sman_message::SmanMessage;

use crate::EncodeArgs;

// ── Manifest types ────────────────────────────────────────────────────────────

/// Top-level manifest: an ordered list of messages.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub messages: Vec<ManifestMessage>,
}

/// One message of the manifest.
///
/// `type` is the masked 15-bit message type; `type_value` is the optional
/// content of the constructor record; `tags` are id/value pairs in wire
/// order. Values are UTF-8 strings — the codec itself is byte-oriented,
/// but the JSON surface targets the textual payloads SMAN files carry in
/// practice.
#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestMessage {
    #[serde(rename = "type")]
    pub msg_type: u16,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub type_value: String,

    #[serde(default)]
    pub tags: Vec<ManifestTag>,
}

/// One tag of a manifest message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestTag {
    pub id: u16,
    pub value: String,
}

impl From<&ManifestMessage> for SmanMessage {
    fn from(m: &ManifestMessage) -> Self {
        Self {
            msg_type: m.msg_type,
            type_value: m.type_value.clone().into_bytes(),
            tags: m
                .tags
                .iter()
                .map(|t| (t.id, t.value.clone().into_bytes()))
                .collect(),
        }
    }
}

// ── Command ───────────────────────────────────────────────────────────────────

/// Run the `sman encode` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, a message
/// fails to encode (value over the 10 MiB ceiling), or the output file
/// cannot be written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let manifest_text = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let manifest: Manifest = serde_json::from_str(&manifest_text)
        .with_context(|| format!("invalid manifest {}", args.input.display()))?;

    let mut out = Vec::new();
    for (index, message) in manifest.messages.iter().enumerate() {
        let encoded = SmanMessage::from(message)
            .encode()
            .with_context(|| format!("message {index} failed to encode"))?;
        out.extend_from_slice(&encoded);
    }

    fs::write(&args.output, &out)
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    println!(
        "wrote {} message{} ({} bytes) to {}",
        manifest.messages.len(),
        if manifest.messages.len() == 1 { "" } else { "s" },
        out.len(),
        args.output.display()
    );
    Ok(())
}
