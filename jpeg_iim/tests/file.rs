use std::path::PathBuf;

use jpeg_iim::{
    jpeg::{self, JpegError, JpegIoError, Segment, file},
    types::MetadataTable,
};

fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

const IMAGE_DATA: &[u8] = &[0x42, 0xFF, 0x00, 0x43, 0xFF, 0xD1, 0x44];

/// Writes a small JPEG into `dir`, returning its path.
fn small_jpeg(dir: &tempfile::TempDir, table: &MetadataTable) -> PathBuf {
    let headers = [
        Segment::new(0xE0, b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0".to_vec(), table),
        Segment::new(0xDB, vec![0x01; 65], table),
    ];
    let sos = Segment::new(0xDA, vec![0x01, 0x01, 0x00, 0x00, 0x3F, 0x00], table);

    let path: PathBuf = dir.path().join("small.jpg");
    let bytes = jpeg::assemble_to_vec(&headers, &sos, IMAGE_DATA).unwrap();
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn comment_written_over_same_file() {
    logger();
    let table = MetadataTable::standard();
    let dir = tempfile::tempdir().unwrap();
    let path = small_jpeg(&dir, &table);

    let mut segments = file::read_header(&path, &table)
        .unwrap()
        .complete()
        .unwrap();
    assert_eq!(segments.len(), 3);

    jpeg::put_comment(&mut segments, "sleepy cat", &table);
    file::put_header(&path, &path, &segments).unwrap();

    let reread = file::read_header(&path, &table)
        .unwrap()
        .complete()
        .unwrap();
    let markers: Vec<u8> = reread.iter().map(|s| s.marker).collect();
    assert_eq!(markers, [0xE0, 0xFE, 0xDB, 0xDA]);
    assert_eq!(jpeg::comment_text(&reread).unwrap(), "sleepy cat");
    assert_eq!(file::read_image_data(&path).unwrap(), IMAGE_DATA);
}

#[test]
fn header_copied_to_new_file() {
    logger();
    let table = MetadataTable::standard();
    let dir = tempfile::tempdir().unwrap();
    let old_path = small_jpeg(&dir, &table);
    let new_path = dir.path().join("new.jpg");

    let mut segments = file::read_header(&old_path, &table)
        .unwrap()
        .complete()
        .unwrap();
    segments.remove(0);
    file::put_header(&old_path, &new_path, &segments).unwrap();

    let reread = file::read_header(&new_path, &table)
        .unwrap()
        .complete()
        .unwrap();
    assert_eq!(reread.len(), 2);
    assert_eq!(reread[0].name, Some("DQT"));
    assert_eq!(file::read_image_data(&new_path).unwrap(), IMAGE_DATA);
}

#[test]
fn failed_put_leaves_file_alone() {
    logger();
    let table = MetadataTable::standard();
    let dir = tempfile::tempdir().unwrap();
    let path = small_jpeg(&dir, &table);
    let before: Vec<u8> = std::fs::read(&path).unwrap();

    let mut segments = file::read_header(&path, &table)
        .unwrap()
        .complete()
        .unwrap();
    segments.insert(0, Segment::new(0xE1, vec![0; 70_000], &table));

    let err = file::put_header(&path, &path, &segments).unwrap_err();
    assert!(matches!(
        err,
        JpegIoError::Jpeg(JpegError::OversizeSegment { index: 0, .. })
    ));
    assert_eq!(std::fs::read(&path).unwrap(), before);

    let err = file::put_header(&path, &path, &[]).unwrap_err();
    assert!(matches!(
        err,
        JpegIoError::Jpeg(JpegError::ExpectedStartOfScan { found: None })
    ));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn missing_file_is_io_error() {
    logger();
    let table = MetadataTable::standard();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.jpg");

    assert!(file::read_header(&path, &table).is_err());
    assert!(matches!(
        file::read_image_data(&path),
        Err(JpegIoError::Io(_))
    ));
}

#[test]
fn empty_scan_data_is_refused() {
    logger();
    let table = MetadataTable::standard();
    let dir = tempfile::tempdir().unwrap();

    let headers = [Segment::new(0xDB, vec![0x01; 65], &table)];
    let sos = Segment::new(0xDA, vec![0x00], &table);
    let old_path = dir.path().join("empty.jpg");
    std::fs::write(&old_path, jpeg::assemble_to_vec(&headers, &sos, &[]).unwrap()).unwrap();

    let segments = file::read_header(&old_path, &table)
        .unwrap()
        .complete()
        .unwrap();
    let new_path = dir.path().join("new.jpg");

    let err = file::put_header(&old_path, &new_path, &segments).unwrap_err();
    assert!(matches!(
        err,
        JpegIoError::Jpeg(JpegError::MissingImageData)
    ));
    assert!(!new_path.exists());
}

#[test]
fn rewrite_in_place_leaves_no_temp_files() {
    logger();
    let table = MetadataTable::standard();
    let dir = tempfile::tempdir().unwrap();
    let path = small_jpeg(&dir, &table);

    let mut segments = file::read_header(&path, &table)
        .unwrap()
        .complete()
        .unwrap();
    jpeg::put_comment(&mut segments, "hi", &table);
    file::put_header(&path, &path, &segments).unwrap();

    let entries: Vec<PathBuf> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries, [path]);
}

#[test]
fn unwritable_destination_keeps_source() {
    logger();
    let table = MetadataTable::standard();
    let dir = tempfile::tempdir().unwrap();
    let path = small_jpeg(&dir, &table);
    let before: Vec<u8> = std::fs::read(&path).unwrap();

    let segments = file::read_header(&path, &table)
        .unwrap()
        .complete()
        .unwrap();
    let new_path = dir.path().join("no_such_dir").join("new.jpg");

    let err = file::put_header(&path, &new_path, &segments).unwrap_err();
    assert!(matches!(err, JpegIoError::Io(_)));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[cfg(unix)]
#[test]
fn rewrite_in_place_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    logger();
    let table = MetadataTable::standard();
    let dir = tempfile::tempdir().unwrap();
    let path = small_jpeg(&dir, &table);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let segments = file::read_header(&path, &table)
        .unwrap()
        .complete()
        .unwrap();
    file::put_header(&path, &path, &segments).unwrap();

    let mode: u32 = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}
