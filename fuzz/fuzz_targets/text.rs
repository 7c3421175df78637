#![no_main]

use libfuzzer_sys::fuzz_target;
use libpngmeta::{text_decode, text_decode_chunk, text_encode};

fuzz_target!(|data: (&str, &str, &[u8])| {
    let (keyword, text, payload) = data;
    if let Ok(chunk) = text_encode(keyword, text) {
        let (k, t) = text_decode_chunk(&chunk).unwrap();
        assert_eq!((k.as_str(), t.as_str()), (keyword, text));
    }
    let _ = text_decode(payload);
});
