/// Implementation of `sman inspect`.
///
/// Walks each line of the file at the record level and prints one row per
/// tag. Sample output:
///
/// ```text
/// line 1 (28 bytes):
///   [offset   0] id=1001 ctor len=0  (empty)
///   [offset   5] id=1000      len=4
///   [offset  15] id=2000      len=1
///   [offset  22] id=0000      len=0  (terminator)
/// ```
///
/// Offsets are byte positions within the line, as reported in each
/// record's `source_offset`. With `--show-value` the value is appended as
/// UTF-8 (lossy, truncated); with `--raw-ids` the constructor bit is left
/// in the reported id.
use std::fs;

use anyhow::{Context, Result, anyhow};
use sman_decoder::TagIter;

use crate::InspectArgs;

/// Longest value rendering before truncation, in characters.
const VALUE_PREVIEW_CHARS: usize = 60;

/// Run the `sman inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line fails to
/// decode; the failing line and offset are named in the diagnostic.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    for (line_no, line) in lines(&bytes).enumerate() {
        println!("line {} ({} bytes):", line_no + 1, line.len());

        let mut iter = TagIter::new();
        loop {
            let tag = match iter.next_tag(line, !args.raw_ids) {
                Ok(Some(tag)) => tag,
                Ok(None) => break,
                Err(e) => {
                    return Err(anyhow!(e)).with_context(|| {
                        format!("line {}: malformed record", line_no + 1)
                    });
                }
            };

            let kind = if tag.is_terminator() {
                "  (terminator)"
            } else if tag.value.is_empty() {
                "  (empty)"
            } else {
                ""
            };
            let ctor = if tag.is_constructor { "ctor" } else { "    " };

            let mut row = format!(
                "  [offset {:>3}] id={:04X} {} len={}{}",
                tag.source_offset,
                tag.id,
                ctor,
                tag.value.len(),
                kind
            );
            if args.show_value && !tag.value.is_empty() {
                row.push_str("  value=");
                row.push_str(&preview(&tag.value));
            }
            println!("{row}");
        }
    }

    Ok(())
}

/// Split a buffer into lines, dropping the delimiters and any empty
/// trailing segment.
fn lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes.split(|&b| b == b'\n').filter(|line| !line.is_empty())
}

/// Render a value as UTF-8 (lossy), truncated for terminal display.
fn preview(value: &[u8]) -> String {
    let text = String::from_utf8_lossy(value);
    if text.chars().count() <= VALUE_PREVIEW_CHARS {
        text.into_owned()
    } else {
        let truncated: String = text.chars().take(VALUE_PREVIEW_CHARS).collect();
        format!("{truncated}…")
    }
}
