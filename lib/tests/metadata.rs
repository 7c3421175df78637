use libpngmeta::{
    Chunk, ChunkType, MetadataUpdate, PhysicalResolution, Unit, extract, read_metadata,
    write_metadata,
};

const PLAIN: &[u8] = include_bytes!("../../resources/test/plain.png");
const METADATA: &[u8] = include_bytes!("../../resources/test/metadata.png");

#[test]
fn read_fixture() {
    let metadata = read_metadata(METADATA).unwrap();
    assert_eq!(
        metadata.text.iter().collect::<Vec<_>>(),
        [
            (&"Title".to_string(), &"Sample".to_string()),
            (&"Author".to_string(), &"Jane Doe".to_string()),
            (&"Comment".to_string(), &"café".to_string()),
        ]
    );
    assert_eq!(
        metadata.phys,
        Some(PhysicalResolution::new(2835, 2835, Unit::Meters))
    );
    for ty in ["IHDR", "gAMA", "IDAT", "tIME", "IEND"] {
        assert!(metadata.contains_chunk(ty.parse().unwrap()), "{ty}");
    }
    assert_eq!(metadata.chunks.len(), 5);
}

#[test]
fn read_plain() {
    let metadata = read_metadata(PLAIN).unwrap();
    assert!(metadata.text.is_empty());
    assert_eq!(metadata.phys, None);
    assert_eq!(metadata.chunks.len(), 3);
}

#[test]
fn write_then_read_text() {
    for src in [PLAIN, METADATA] {
        let update = MetadataUpdate::builder().text("Title", "x").build();
        let written = write_metadata(src, &update).unwrap();
        let metadata = read_metadata(&written).unwrap();
        assert_eq!(metadata.text["Title"], "x");
    }
}

#[test]
fn write_phys_into_plain() {
    let update = MetadataUpdate::builder()
        .phys(PhysicalResolution::from_dpi(300))
        .build();
    let written = write_metadata(PLAIN, &update).unwrap();
    let chunks = extract(&written).unwrap();
    assert_eq!(chunks[1].ty(), ChunkType::pHYs);
    assert_eq!(
        read_metadata(&written).unwrap().phys,
        Some(PhysicalResolution::new(11811, 11811, Unit::Meters))
    );
}

#[test]
fn replace_phys_in_place() {
    let update = MetadataUpdate::builder()
        .phys(Some(PhysicalResolution::new(96, 96, Unit::Inches)))
        .build();
    let written = write_metadata(METADATA, &update).unwrap();
    assert_eq!(written.len(), METADATA.len());
    assert_eq!(
        read_metadata(&written).unwrap().phys,
        Some(PhysicalResolution::new(96, 96, Unit::Inches))
    );
}

#[test]
fn clear_keeps_image_bytes() {
    let update = MetadataUpdate::builder().clear(true).build();
    let written = write_metadata(METADATA, &update).unwrap();
    let metadata = read_metadata(&written).unwrap();
    assert!(metadata.text.is_empty());
    assert_eq!(metadata.phys, None);

    let image_chunks = |bytes: &[u8]| {
        extract(bytes)
            .unwrap()
            .into_iter()
            .filter(|c| c.ty().is_image_chunk())
            .collect::<Vec<_>>()
    };
    let chunks = extract(&written).unwrap();
    assert_eq!(chunks, image_chunks(METADATA));
}

#[test]
fn copy_metadata_between_images() {
    let metadata = read_metadata(METADATA).unwrap();
    let written = write_metadata(PLAIN, &MetadataUpdate::from(metadata.clone())).unwrap();
    let copied = read_metadata(&written).unwrap();
    assert_eq!(copied.text, metadata.text);
    assert_eq!(copied.phys, metadata.phys);
}

#[test]
fn invalid_keyword_leaves_no_output() {
    let update = MetadataUpdate::builder().text("", "v").build();
    assert!(write_metadata(PLAIN, &update).is_err());
}
