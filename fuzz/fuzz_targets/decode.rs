#![no_main]

use libfuzzer_sys::fuzz_target;
use tagwire::{decode, encode};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic. Anything that decodes
    // cleanly must survive a re-encode; the second encoding is compared
    // byte-for-byte since NaN breaks value equality.
    if let Ok(value) = decode(data) {
        let bytes = encode(&value).expect("decoded value must re-encode");
        let again = decode(&bytes).expect("re-encoded bytes must decode");
        assert_eq!(bytes, encode(&again).unwrap());
    }
});
