#![no_main]

use libfuzzer_sys::fuzz_target;
use libpngmeta::{MetadataUpdate, encode, extract, read_metadata, write_metadata};

fuzz_target!(|data: &[u8]| {
    let Ok(chunks) = extract(data) else {
        return;
    };
    let bytes = encode(&chunks);
    assert_eq!(extract(&bytes).unwrap(), chunks);

    if read_metadata(data).is_ok() {
        let update = MetadataUpdate::builder().clear(true).text("k", "v").build();
        let written = write_metadata(data, &update).unwrap();
        assert_eq!(read_metadata(&written).unwrap().text["k"], "v");
    }
});
