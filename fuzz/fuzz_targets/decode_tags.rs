#![no_main]

use libfuzzer_sys::fuzz_target;
use sman_decoder::TagIter;

// Fuzz target: full record-level walk of arbitrary input bytes.
//
// Catches bugs in:
// - Minimum-frame / line-feed end-of-message detection
// - Hex tag field decoding on garbage bytes
// - Length field parsing (non-digits, overflow, 10 MiB cap)
// - Payload shortfall checks and cursor arithmetic
fuzz_target!(|data: &[u8]| {
    for mask_tag in [false, true] {
        let mut iter = TagIter::new();
        loop {
            match iter.next_tag(data, mask_tag) {
                Ok(Some(_)) => {}
                Ok(None) | Err(_) => break,
            }
        }
    }
});
