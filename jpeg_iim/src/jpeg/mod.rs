//! JPEG is an older image format designed with old-school compression in mind.
//!
//! A JPEG file is a run of marker segments (tables, frame info, and any
//! application metadata like Exif or IPTC), then a start of scan (`SOS`)
//! segment, then the compressed image data, then an end of image (`EOI`)
//! marker.
//!
//! This module never touches the compressed data. It reads the header
//! segments into a list you can edit, and copies the compressed bytes
//! through untouched when writing the file back out.

use crate::types::MetadataTable;

pub mod assemble;
pub mod comment;
mod error;
pub mod file;
pub mod scan;

pub use assemble::{assemble, assemble_to_vec};
pub use comment::{comment_text, get_comment, put_comment};
pub use error::{CorruptKind, JpegError, JpegIoError};
pub use scan::{extract_image_data, scan_segments, scan_segments_from_reader};

/// The first marker code, `SOI` (start of image).
pub const SOI_MARKER_CODE: u8 = 0xD8;

/// The last marker code, `EOI` (end of image).
pub const EOI_MARKER_CODE: u8 = 0xD9;

/// The start of scan code, `SOS`.
pub const SOS_MARKER_CODE: u8 = 0xDA;

/// The comment marker code, `COM`.
pub const COM_MARKER_CODE: u8 = 0xFE;

/// The first application marker code, `APP0`.
pub const APP0_MARKER_CODE: u8 = 0xE0;

/// The application marker usually holding IPTC, `APP13`.
pub const APP13_MARKER_CODE: u8 = 0xED;

/// The largest payload a segment can carry.
///
/// The length field is a `u16` that counts its own two bytes.
pub const MAX_SEGMENT_PAYLOAD_LEN: usize = u16::MAX as usize - 2;

/// Checks if a marker code stands alone, without a length or payload.
///
/// ```
/// use jpeg_iim::jpeg::is_standalone;
///
/// assert!(is_standalone(0xD0)); // RST0
/// assert!(is_standalone(0xD9)); // EOI
/// assert!(!is_standalone(0xDA)); // SOS has a payload!
/// ```
pub const fn is_standalone(marker_code: u8) -> bool {
    matches!(marker_code, 0x00 | 0x01 | 0xD0..=0xD9)
}

/// One segment of a JPEG file's header.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// The code byte that follows `0xFF` in the segment's marker.
    pub marker: u8,

    /// The marker's short name, like `APP1`, if it's a known marker.
    pub name: Option<&'static str>,

    /// A description of the marker, if it's a known marker.
    pub description: Option<&'static str>,

    /// Where the payload started in the stream it was read from.
    ///
    /// Only meaningful for that exact stream. Segments made by hand have
    /// `None` here.
    pub payload_offset: Option<usize>,

    /// The segment's payload.
    ///
    /// Doesn't include the marker or the two length bytes.
    pub payload: Vec<u8>,
}

impl Segment {
    /// Creates a segment, naming it with the given table.
    pub fn new(marker: u8, payload: Vec<u8>, table: &MetadataTable) -> Self {
        Self {
            marker,
            name: table.marker_name(marker),
            description: table.marker_description(marker),
            payload_offset: None,
            payload,
        }
    }

    /// Whether this segment's marker stands alone (no length, no payload).
    pub fn is_standalone(&self) -> bool {
        is_standalone(self.marker)
    }

    /// How many bytes this segment takes up when written out.
    pub fn encoded_len(&self) -> usize {
        if self.is_standalone() {
            2
        } else {
            4 + self.payload.len()
        }
    }

    /// Where the payload ends in the stream it was read from.
    fn payload_end(&self) -> Option<usize> {
        self.payload_offset.map(|o| o + self.payload.len())
    }
}

/// A whole JPEG file, split into the parts this crate works with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JpegFile {
    /// Every header segment before `SOS`, in file order.
    ///
    /// `SOI` isn't in here. It's implied!
    pub headers: Vec<Segment>,

    /// The start of scan segment.
    pub sos: Segment,

    /// The compressed scan data between `SOS` and `EOI`.
    pub image_data: Vec<u8>,
}

impl JpegFile {
    /// Parses a JPEG file.
    ///
    /// Unlike [`scan_segments`], this needs the whole file to be readable,
    /// so any scan error is returned as-is.
    pub fn parse(input: &[u8], table: &MetadataTable) -> Result<Self, JpegError> {
        let mut headers: Vec<Segment> = scan_segments(input, table).complete()?;

        let Some(sos) = headers.pop().filter(|s| s.marker == SOS_MARKER_CODE) else {
            log::error!("JPEG headers ended without an SOS segment.");
            return Err(JpegError::CorruptStream {
                offset: input.len(),
                kind: CorruptKind::NoStartOfScan,
            });
        };

        // segments from `scan_segments` always have an offset
        let scan_start: usize = sos.payload_end().unwrap_or(input.len());
        let image_data: Vec<u8> = scan::extract_image_data_at(input, scan_start)?;

        Ok(Self {
            headers,
            sos,
            image_data,
        })
    }

    /// Writes the file back out into a new buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, JpegError> {
        assemble_to_vec(&self.headers, &self.sos, &self.image_data)
    }

    /// Writes the file to `out`.
    ///
    /// Nothing is written if the segments don't validate.
    pub fn write_to<W: std::io::Write>(&self, out: &mut W) -> Result<(), JpegIoError> {
        assemble(&self.headers, &self.sos, &self.image_data, out)
    }

    /// Finds the file's comment segment.
    pub fn comment(&self) -> Result<&Segment, JpegError> {
        get_comment(&self.headers)
    }

    /// Sets the file's comment, adding a comment segment if needed.
    pub fn set_comment(&mut self, comment: impl AsRef<[u8]>, table: &MetadataTable) {
        put_comment(&mut self.headers, comment, table);
    }

    /// Iterates over all the `APP13` segments, which usually carry IPTC.
    pub fn app13_segments(&self) -> impl Iterator<Item = &Segment> {
        self.headers
            .iter()
            .filter(|s| s.marker == APP13_MARKER_CODE)
    }
}

#[cfg(test)]
mod tests {
    use crate::{types::MetadataTable, util::logger};

    use super::{CorruptKind, JpegError, JpegFile, Segment, is_standalone};

    /// SOI, APP0 (4 bytes), DQT (3 bytes), SOS (2 bytes), scan data, EOI.
    const SMALL_JPEG: &[u8] = &[
        0xFF, 0xD8, //
        0xFF, 0xE0, 0x00, 0x06, b'J', b'F', b'I', b'F', //
        0xFF, 0xDB, 0x00, 0x05, 0x01, 0x02, 0x03, //
        0xFF, 0xDA, 0x00, 0x04, 0x0A, 0x0B, //
        0x12, 0xFF, 0x00, 0x34, 0xFF, 0xD0, 0x56, //
        0xFF, 0xD9,
    ];

    #[test]
    fn standalone_markers() {
        for code in [0x00, 0x01, 0xD0, 0xD7, 0xD8, 0xD9] {
            assert!(is_standalone(code), "`{code:#04X}` should stand alone");
        }
        for code in [0x02, 0xC0, 0xDA, 0xE0, 0xED, 0xFE] {
            assert!(!is_standalone(code), "`{code:#04X}` should have a length");
        }
    }

    #[test]
    fn encoded_len_counts_marker_and_length() {
        let table = MetadataTable::standard();

        assert_eq!(Segment::new(0xFE, b"hi".to_vec(), &table).encoded_len(), 6);
        assert_eq!(Segment::new(0xD3, Vec::new(), &table).encoded_len(), 2);
    }

    #[test]
    fn parses_small_file() {
        logger();
        let table = MetadataTable::standard();

        let jpeg = JpegFile::parse(SMALL_JPEG, &table).unwrap();

        assert_eq!(jpeg.headers.len(), 2);
        assert_eq!(jpeg.headers[0].name, Some("APP0"));
        assert_eq!(jpeg.headers[0].payload, b"JFIF");
        assert_eq!(jpeg.headers[0].payload_offset, Some(6));
        assert_eq!(jpeg.headers[1].name, Some("DQT"));
        assert_eq!(jpeg.sos.payload, [0x0A, 0x0B]);
        assert_eq!(jpeg.image_data, [0x12, 0xFF, 0x00, 0x34, 0xFF, 0xD0, 0x56]);
    }

    #[test]
    fn small_file_round_trips() {
        logger();
        let table = MetadataTable::standard();

        let jpeg = JpegFile::parse(SMALL_JPEG, &table).unwrap();
        assert_eq!(jpeg.to_bytes().unwrap(), SMALL_JPEG);

        let mut written: Vec<u8> = Vec::new();
        jpeg.write_to(&mut written).unwrap();
        assert_eq!(written, SMALL_JPEG);
    }

    #[test]
    fn setting_comment_keeps_it_after_app_segments() {
        logger();
        let table = MetadataTable::standard();

        let mut jpeg = JpegFile::parse(SMALL_JPEG, &table).unwrap();
        assert_eq!(jpeg.comment(), Err(JpegError::CommentNotFound));

        jpeg.set_comment("a cat", &table);
        assert_eq!(jpeg.headers[1].marker, 0xFE);
        assert_eq!(jpeg.comment().unwrap().payload, b"a cat");

        let reparsed = JpegFile::parse(&jpeg.to_bytes().unwrap(), &table).unwrap();
        assert_eq!(reparsed.comment().unwrap().payload, b"a cat");
        assert_eq!(reparsed.image_data, jpeg.image_data);
    }

    #[test]
    fn headers_without_sos_dont_make_a_file() {
        logger();
        let table = MetadataTable::standard();

        // an "abbreviated" stream with tables only
        let input: &[u8] = &[0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x03, 0x01, 0xFF, 0xD9];

        assert_eq!(
            JpegFile::parse(input, &table),
            Err(JpegError::CorruptStream {
                offset: input.len(),
                kind: CorruptKind::NoStartOfScan
            })
        );
    }

    #[test]
    fn finds_app13_segments() {
        let table = MetadataTable::standard();

        let jpeg = JpegFile {
            headers: vec![
                Segment::new(0xE0, b"JFIF\0".to_vec(), &table),
                Segment::new(0xED, b"Photoshop 3.0\0".to_vec(), &table),
            ],
            sos: Segment::new(0xDA, vec![0x00], &table),
            image_data: vec![0x01],
        };

        let app13: Vec<&Segment> = jpeg.app13_segments().collect();
        assert_eq!(app13.len(), 1);
        assert_eq!(app13[0].name, Some("APP13"));
    }
}
