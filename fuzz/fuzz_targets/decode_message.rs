#![no_main]

use libfuzzer_sys::fuzz_target;
use sman_message::SmanMessage;

// Fuzz target: message-layer decode entry point.
//
// Calls `SmanMessage::decode(data)` on arbitrary input bytes.
// Catches bugs in:
// - Constructor-first enforcement
// - Terminator detection and trailing-byte handling
// - Re-encode of anything that decoded successfully
fuzz_target!(|data: &[u8]| {
    if let Ok(msg) = SmanMessage::decode(data) {
        // Anything that decodes must re-encode and decode again
        let encoded = msg.encode().unwrap();
        let again = SmanMessage::decode(&encoded).unwrap();

        // A decoded tag with id 0 and an empty value re-encodes into the
        // terminator spelling, so the second decode stops there. Skip the
        // equality check for that known wire ambiguity.
        let ambiguous = msg.tags.iter().any(|(id, v)| *id == 0 && v.is_empty());
        if !ambiguous {
            assert_eq!(msg, again);
        }
    }
});
