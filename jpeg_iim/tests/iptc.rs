use jpeg_iim::{
    iptc::{self, IptcError, IptcRecord},
    jpeg::{self, Segment},
    types::{MetadataTable, iptc::KnownDataset},
};

fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

#[test]
fn title_record_round_trips() {
    logger();
    let table = MetadataTable::standard();

    let raw: &[u8] = &[0x1C, 0x02, 0x05, 0x00, 0x04, 0x54, 0x65, 0x73, 0x74];

    let records = iptc::parse_records(raw).complete().unwrap();
    assert_eq!(records, [IptcRecord::new(2, 5, "Test")]);
    assert_eq!(records[0].known_dataset(&table), Some(KnownDataset::ObjectName));

    assert_eq!(iptc::encode_records(&records).unwrap(), raw);
}

#[test]
fn encoded_records_parse_back_the_same() {
    logger();

    let lists: Vec<Vec<IptcRecord>> = vec![
        Vec::new(),
        vec![IptcRecord::new(2, 0, vec![0x00, 0x04])],
        vec![
            IptcRecord::new(1, 90, vec![0x1B, 0x25, 0x47]),
            IptcRecord::new(2, 0, vec![0x00, 0x04]),
            IptcRecord::new(2, 5, "Calico cat asleep"),
            IptcRecord::new(2, 25, "cat"),
            IptcRecord::new(2, 25, "sleep"),
            IptcRecord::new(2, 25, "cat"),
            IptcRecord::new(2, 120, "A cat, asleep on a blanket.".repeat(60)),
            IptcRecord::new(2, 200, Vec::new()),
            IptcRecord::new(7, 10, vec![0x1C; 300]),
        ],
        vec![IptcRecord::new(8, 10, vec![0xAB; 0x7FFF])],
    ];

    for (n, records) in lists.into_iter().enumerate() {
        let bytes = iptc::encode_records(&records).unwrap();
        assert_eq!(
            iptc::parse_records(&bytes).complete(),
            Ok(records),
            "list `{n}`"
        );
    }
}

#[test]
fn extended_size_is_never_misread() {
    logger();

    for size in [0x8000_u16, 0x8004, 0xFFFF] {
        let [hi, lo] = size.to_be_bytes();
        let mut raw: Vec<u8> = vec![0x1C, 0x02, 0x05, hi, lo];
        raw.extend_from_slice(&[0; 8]);

        let outcome = iptc::parse_records(&raw);
        assert!(outcome.items.is_empty());
        assert_eq!(
            outcome.error,
            Some(IptcError::UnsupportedExtendedDataset {
                offset: 0,
                record_number: 2,
                dataset_number: 5
            })
        );
    }
}

#[test]
fn repeated_keywords_are_all_kept() {
    logger();
    let table = MetadataTable::standard();

    let records = [
        IptcRecord::new(2, 25, "one"),
        IptcRecord::new(2, 25, "two"),
        IptcRecord::new(2, 25, "three"),
    ];
    let bytes = iptc::encode_records(&records).unwrap();

    let keywords: Vec<String> = iptc::parse_records(&bytes)
        .complete()
        .unwrap()
        .iter()
        .filter(|r| r.name(&table) == Some("Keywords"))
        .map(|r| r.text().into_owned())
        .collect();
    assert_eq!(keywords, ["one", "two", "three"]);
}

#[test]
fn records_ride_along_in_app13() {
    logger();
    let table = MetadataTable::standard();

    let records = [
        IptcRecord::new(2, 5, "Title"),
        IptcRecord::new(2, 120, "Caption"),
    ];
    let block: Vec<u8> = iptc::encode_records(&records).unwrap();

    let headers = [Segment::new(0xED, block.clone(), &table)];
    let sos = Segment::new(0xDA, vec![0x00], &table);
    let bytes = jpeg::assemble_to_vec(&headers, &sos, &[0x01]).unwrap();

    let file = jpeg::JpegFile::parse(&bytes, &table).unwrap();
    let app13: Vec<&Segment> = file.app13_segments().collect();
    assert_eq!(app13.len(), 1);
    assert_eq!(
        iptc::parse_records(&app13[0].payload).complete(),
        Ok(records.to_vec())
    );
}
