/// Implementation of `sman decode`.
///
/// Decodes every line of a SMAN file as a message and renders the result
/// as JSON in the manifest shape `sman encode` accepts. Values are
/// rendered as UTF-8 (lossy) — binary payloads survive inspect but not a
/// JSON round-trip.
use std::fs;

use anyhow::{Context, Result};
use sman_message::SmanMessage;

use crate::DecodeArgs;
use crate::cmd_encode::{Manifest, ManifestMessage, ManifestTag};

/// Run the `sman decode` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, any line fails to decode
/// as a message, or the output cannot be written.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let mut manifest = Manifest {
        messages: Vec::new(),
    };
    for (line_no, line) in bytes
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let msg = SmanMessage::decode(line)
            .with_context(|| format!("line {}: malformed message", line_no + 1))?;
        manifest.messages.push(to_manifest(&msg));
    }

    let json = serde_json::to_string_pretty(&manifest)?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}

/// Convert a decoded message into its manifest representation.
fn to_manifest(msg: &SmanMessage) -> ManifestMessage {
    ManifestMessage {
        msg_type: msg.msg_type,
        type_value: String::from_utf8_lossy(&msg.type_value).into_owned(),
        tags: msg
            .tags
            .iter()
            .map(|(id, value)| ManifestTag {
                id: *id,
                value: String::from_utf8_lossy(value).into_owned(),
            })
            .collect(),
    }
}
