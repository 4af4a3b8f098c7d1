//! Puts a JPEG stream back together from its parts.

use std::io::Write;

use super::{
    EOI_MARKER_CODE, JpegError, JpegIoError, MAX_SEGMENT_PAYLOAD_LEN, SOI_MARKER_CODE,
    SOS_MARKER_CODE, Segment,
};

/// Builds a JPEG stream: `SOI`, the `headers`, `sos`, the `image_data`, and
/// finally `EOI`.
///
/// Every segment is checked before anything is built. If any of them can't
/// be written (ex: a payload over [`MAX_SEGMENT_PAYLOAD_LEN`]), no output is
/// made at all.
///
/// `headers` can't hold `SOI`, `EOI`, `SOS`, or `0xFF` markers, since those
/// would read back as something else.
///
/// When `sos` is misbehaving, errors report its index as `headers.len()`.
///
/// ```
/// use jpeg_iim::{jpeg, types::MetadataTable};
///
/// let table = MetadataTable::standard();
/// let headers = [jpeg::Segment::new(0xFE, b"hi".to_vec(), &table)];
/// let sos = jpeg::Segment::new(0xDA, vec![0x01], &table);
///
/// assert_eq!(
///     jpeg::assemble_to_vec(&headers, &sos, &[0x42]).unwrap(),
///     [
///         0xFF, 0xD8, // SOI
///         0xFF, 0xFE, 0x00, 0x04, b'h', b'i', // COM
///         0xFF, 0xDA, 0x00, 0x03, 0x01, // SOS
///         0x42, // scan data
///         0xFF, 0xD9, // EOI
///     ]
/// );
/// ```
pub fn assemble_to_vec(
    headers: &[Segment],
    sos: &Segment,
    image_data: &[u8],
) -> Result<Vec<u8>, JpegError> {
    for (index, segment) in headers.iter().enumerate() {
        check_header_marker(index, segment)?;
        check_segment(index, segment)?;
    }
    if sos.marker != SOS_MARKER_CODE {
        log::error!(
            "Can't assemble JPEG: expected SOS before scan data, got `{:#04X}`.",
            sos.marker
        );
        return Err(JpegError::ExpectedStartOfScan {
            found: Some(sos.marker),
        });
    }
    check_segment(headers.len(), sos)?;

    let len: usize = 2
        + headers.iter().map(Segment::encoded_len).sum::<usize>()
        + sos.encoded_len()
        + image_data.len()
        + 2;
    let mut out: Vec<u8> = Vec::with_capacity(len);

    out.extend_from_slice(&[0xFF, SOI_MARKER_CODE]);
    for segment in headers.iter().chain([sos]) {
        write_segment(&mut out, segment);
    }
    out.extend_from_slice(image_data);
    out.extend_from_slice(&[0xFF, EOI_MARKER_CODE]);

    log::trace!(
        "Assembled JPEG with `{}` header segments and `{}` bytes of scan data.",
        headers.len(),
        image_data.len()
    );
    Ok(out)
}

/// Builds a JPEG stream like [`assemble_to_vec`], then writes it to `out`.
///
/// The whole stream is built before the first write, so a validation error
/// leaves `out` untouched.
pub fn assemble<W: Write>(
    headers: &[Segment],
    sos: &Segment,
    image_data: &[u8],
    out: &mut W,
) -> Result<(), JpegIoError> {
    let bytes: Vec<u8> = assemble_to_vec(headers, sos, image_data)?;
    out.write_all(&bytes)?;
    Ok(())
}

/// Makes sure a header segment's marker won't change how the stream reads
/// back.
///
/// `SOI`, `EOI`, and `SOS` each have a fixed place that the assembler fills
/// itself. `0xFF` would be read as a fill byte.
fn check_header_marker(index: usize, segment: &Segment) -> Result<(), JpegError> {
    let marker_code: u8 = segment.marker;

    if matches!(
        marker_code,
        SOI_MARKER_CODE | EOI_MARKER_CODE | SOS_MARKER_CODE | 0xFF
    ) {
        log::error!("Header segment `{index}` has reserved marker `{marker_code:#04X}`.");
        return Err(JpegError::ReservedMarker { index, marker_code });
    }

    Ok(())
}

/// Makes sure a segment can be written.
fn check_segment(index: usize, segment: &Segment) -> Result<(), JpegError> {
    let marker_code: u8 = segment.marker;

    if segment.is_standalone() {
        if !segment.payload.is_empty() {
            log::error!(
                "Segment `{index}` has standalone marker `{marker_code:#04X}` but \
                carries `{}` bytes of payload.",
                segment.payload.len()
            );
            return Err(JpegError::UnexpectedPayload { index, marker_code });
        }
        return Ok(());
    }

    let payload_len: usize = segment.payload.len();
    if payload_len > MAX_SEGMENT_PAYLOAD_LEN {
        log::error!(
            "Segment `{index}` (marker `{marker_code:#04X}`) is too large! \
            payload len: `{payload_len}` bytes"
        );
        return Err(JpegError::OversizeSegment {
            index,
            marker_code,
            payload_len,
        });
    }

    Ok(())
}

/// Writes one segment. It must already be checked.
fn write_segment(out: &mut Vec<u8>, segment: &Segment) {
    out.extend_from_slice(&[0xFF, segment.marker]);
    if segment.is_standalone() {
        return;
    }

    // the length counts itself
    let length: u16 = (segment.payload.len() + 2) as u16;
    out.extend_from_slice(&length.to_be_bytes());
    out.extend_from_slice(&segment.payload);
}

#[cfg(test)]
mod tests {
    use crate::{jpeg::Segment, types::MetadataTable, util::logger};

    use super::{JpegError, assemble, assemble_to_vec};

    #[test]
    fn writes_standalone_markers_without_length() {
        logger();
        let table = MetadataTable::standard();

        let headers = [
            Segment::new(0x01, Vec::new(), &table),
            Segment::new(0xDB, vec![0x09], &table),
        ];
        let sos = Segment::new(0xDA, Vec::new(), &table);

        assert_eq!(
            assemble_to_vec(&headers, &sos, &[]).unwrap(),
            [
                0xFF, 0xD8, //
                0xFF, 0x01, //
                0xFF, 0xDB, 0x00, 0x03, 0x09, //
                0xFF, 0xDA, 0x00, 0x02, //
                0xFF, 0xD9,
            ]
        );
    }

    #[test]
    fn largest_payload_gets_ffff_length() {
        logger();
        let table = MetadataTable::standard();

        let headers = [Segment::new(0xE1, vec![0xAA; 65533], &table)];
        let sos = Segment::new(0xDA, Vec::new(), &table);

        let out = assemble_to_vec(&headers, &sos, &[]).unwrap();
        assert_eq!(out[2..6], [0xFF, 0xE1, 0xFF, 0xFF]);
        assert_eq!(out.len(), 2 + 4 + 65533 + 4 + 2);
    }

    #[test]
    fn rejects_oversize_segment_without_writing() {
        logger();
        let table = MetadataTable::standard();

        let headers = [
            Segment::new(0xE0, b"JFIF\0".to_vec(), &table),
            Segment::new(0xE1, vec![0xAA; 65534], &table),
        ];
        let sos = Segment::new(0xDA, Vec::new(), &table);

        let mut out: Vec<u8> = Vec::new();
        let err = assemble(&headers, &sos, &[], &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(matches!(
            err,
            crate::jpeg::JpegIoError::Jpeg(JpegError::OversizeSegment {
                index: 1,
                marker_code: 0xE1,
                payload_len: 65534
            })
        ));
    }

    #[test]
    fn oversize_sos_reports_index_after_headers() {
        logger();
        let table = MetadataTable::standard();

        let headers = [Segment::new(0xFE, b"hi".to_vec(), &table)];
        let sos = Segment::new(0xDA, vec![0; 70_000], &table);

        assert_eq!(
            assemble_to_vec(&headers, &sos, &[]),
            Err(JpegError::OversizeSegment {
                index: 1,
                marker_code: 0xDA,
                payload_len: 70_000
            })
        );
    }

    #[test]
    fn rejects_payload_on_standalone_marker() {
        logger();
        let table = MetadataTable::standard();

        let headers = [Segment::new(0xD0, vec![0x01], &table)];
        let sos = Segment::new(0xDA, Vec::new(), &table);

        assert_eq!(
            assemble_to_vec(&headers, &sos, &[]),
            Err(JpegError::UnexpectedPayload {
                index: 0,
                marker_code: 0xD0
            })
        );
    }

    #[test]
    fn rejects_non_sos_scan_header() {
        logger();
        let table = MetadataTable::standard();

        let not_sos = Segment::new(0xC0, vec![0x08], &table);

        assert_eq!(
            assemble_to_vec(&[], &not_sos, &[0x01]),
            Err(JpegError::ExpectedStartOfScan { found: Some(0xC0) })
        );
    }

    #[test]
    fn rejects_reserved_header_markers() {
        logger();
        let table = MetadataTable::standard();
        let sos = Segment::new(0xDA, Vec::new(), &table);

        for (marker_code, payload) in [
            (0xD8, Vec::new()),
            (0xD9, Vec::new()),
            (0xDA, vec![0x01]),
            (0xFF, vec![0x07]),
        ] {
            let headers = [
                Segment::new(0xE1, b"Exif\0\0".to_vec(), &table),
                Segment::new(marker_code, payload, &table),
            ];

            assert_eq!(
                assemble_to_vec(&headers, &sos, &[0x01]),
                Err(JpegError::ReservedMarker {
                    index: 1,
                    marker_code
                }),
                "marker `{marker_code:#04X}` should be rejected"
            );
        }
    }

    #[test]
    fn eoi_in_headers_writes_nothing() {
        logger();
        let table = MetadataTable::standard();

        let headers = [
            Segment::new(0xD9, Vec::new(), &table),
            Segment::new(0xE1, b"Exif\0\0".to_vec(), &table),
        ];
        let sos = Segment::new(0xDA, Vec::new(), &table);

        let mut out: Vec<u8> = Vec::new();
        let err = assemble(&headers, &sos, &[], &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(matches!(
            err,
            crate::jpeg::JpegIoError::Jpeg(JpegError::ReservedMarker {
                index: 0,
                marker_code: 0xD9
            })
        ));
    }
}
