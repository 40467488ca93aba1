#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: decimal length codec.
//
// Catches bugs in:
// - Digit-run scanning and separator handling
// - Checked accumulation (overflow must be an error, not a wrap)
// - Empty input / sign characters
fuzz_target!(|data: &[u8]| {
    if let Ok((value, consumed)) = sman_wire::decimal::decode_dec(data) {
        assert!(consumed >= 1 && consumed <= data.len());
        // Whatever decoded must re-encode to the same digit run
        let mut buf = [0u8; sman_wire::decimal::MAX_DEC_BYTES];
        let len = sman_wire::decimal::encode_dec(value, &mut buf);
        // The input may carry leading zeros; strip them before comparing
        let digits = &data[..consumed];
        let stripped: &[u8] = match digits.iter().position(|&b| b != b'0') {
            Some(pos) => &digits[pos..],
            None => b"0",
        };
        assert_eq!(&buf[..len], stripped);
    }
});
