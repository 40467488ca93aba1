/// Implementation of `sman validate`.
///
/// Walks every line of the file at the record level and reports either a
/// series of success checkmarks (`✓`) or a diagnostic failure line (`✗`).
/// The command exits with code 0 on a valid file and code 1 on any error
/// (the main dispatcher in `main.rs` converts `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Lines: 3 messages scanned
/// ✓ Records: 12 records parsed successfully
/// ✓ Terminators: every line ends with the null tag
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: line 2 — invalid length field at offset 9
/// ```
///
/// A line is structurally valid when every record parses and the walk
/// reaches a clean end of message. The terminator check is reported
/// separately: a line without a null tag still parses (the codec treats
/// the terminator as optional on decode), so its absence is a warning-level
/// observation, not a failure.
use std::fs;

use anyhow::{Context, Result, anyhow};
use sman_decoder::TagIter;

use crate::ValidateArgs;

/// Run the `sman validate` command.
///
/// Prints a validation report to stdout and returns `Ok(())` on success.
/// On any structural error, prints a `✗` diagnostic and returns `Err`,
/// which the main dispatcher converts to exit code 1.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if any line fails the
/// record-level walk.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let mut line_count = 0;
    let mut record_count = 0;
    let mut all_terminated = true;

    for (line_no, line) in bytes
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        line_count += 1;

        let mut iter = TagIter::new();
        let mut last_was_terminator = false;
        loop {
            match iter.next_tag(line, false) {
                Ok(Some(tag)) => {
                    record_count += 1;
                    last_was_terminator = tag.is_terminator();
                }
                Ok(None) => break,
                Err(e) => {
                    println!("✗ Error: line {} — {e}", line_no + 1);
                    return Err(anyhow!("validation failed"));
                }
            }
        }
        if !last_was_terminator {
            all_terminated = false;
        }
    }

    println!(
        "✓ Lines: {line_count} message{} scanned",
        if line_count == 1 { "" } else { "s" }
    );
    println!(
        "✓ Records: {record_count} record{} parsed successfully",
        if record_count == 1 { "" } else { "s" }
    );
    if all_terminated {
        println!("✓ Terminators: every line ends with the null tag");
    } else {
        println!("– Terminators: some lines rely on end-of-buffer instead of the null tag");
    }

    Ok(())
}
