//! Reads the header segments and scan data out of a JPEG stream.

use std::io::Read;

use winnow::{
    Parser,
    binary::{be_u16, u8},
    error::EmptyError,
    token::take,
};

use crate::{ScanOutcome, types::MetadataTable};

use super::{
    CorruptKind, EOI_MARKER_CODE, JpegError, SOI_MARKER_CODE, SOS_MARKER_CODE, Segment,
    is_standalone,
};

/// A marker at the start of a header segment.
enum Marker {
    /// A marker with no data.
    Standalone {
        /// An identifier for a marker.
        marker_code: u8,
    },

    /// A marker with a payload and length.
    Full {
        /// An identifier for a marker.
        marker_code: u8,

        /// The length of the marker's payload.
        ///
        /// This value does NOT include the two length bytes.
        len: u16,
    },
}

/// Scans a JPEG stream for its header segments.
///
/// Scanning starts after `SOI` and stops right after the `SOS` segment,
/// which is the last item in the list. The compressed data after it isn't
/// read; see [`extract_image_data`] for that.
///
/// If the stream is broken before `SOS`, the segments read so far come
/// back along with the error.
///
/// ```
/// use jpeg_iim::{jpeg, types::MetadataTable};
///
/// let table = MetadataTable::standard();
/// let input: &[u8] = &[
///     0xFF, 0xD8, // SOI
///     0xFF, 0xFE, 0x00, 0x04, b'h', b'i', // COM
///     0xFF, 0xDA, 0x00, 0x03, 0x01, // SOS
///     0x42, 0xFF, 0xD9, // scan data, EOI
/// ];
///
/// let segments = jpeg::scan_segments(input, &table).complete().unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].name, Some("COM"));
/// assert_eq!(segments[1].name, Some("SOS"));
/// ```
pub fn scan_segments(input: &[u8], table: &MetadataTable) -> ScanOutcome<Segment, JpegError> {
    let mut segments: Vec<Segment> = Vec::new();

    let walked = walk_headers(input, |marker, payload_offset, payload| {
        segments.push(Segment {
            marker,
            name: table.marker_name(marker),
            description: table.marker_description(marker),
            payload_offset: Some(payload_offset),
            payload: payload.to_vec(),
        });
    });

    match walked {
        Ok(_) => ScanOutcome::finished(segments),
        Err(e) => {
            log::warn!(
                "Stopped scanning JPEG headers after `{}` segments. err: {e}",
                segments.len()
            );
            ScanOutcome::stopped(segments, e)
        }
    }
}

/// Reads everything from `reader`, then scans it like [`scan_segments`].
pub fn scan_segments_from_reader<R: Read>(
    mut reader: R,
    table: &MetadataTable,
) -> std::io::Result<ScanOutcome<Segment, JpegError>> {
    let mut input: Vec<u8> = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(scan_segments(&input, table))
}

/// Copies the compressed scan data out of a JPEG stream.
///
/// That's everything after the first `SOS` segment, up to (but not
/// including) the final `EOI` marker.
///
/// ```
/// use jpeg_iim::jpeg;
///
/// let input: &[u8] = &[
///     0xFF, 0xD8, // SOI
///     0xFF, 0xDA, 0x00, 0x03, 0x01, // SOS
///     0x42, 0xFF, 0x00, 0x43, // scan data, with a stuffed `FF`
///     0xFF, 0xD9, // EOI
/// ];
///
/// assert_eq!(jpeg::extract_image_data(input).unwrap(), [0x42, 0xFF, 0x00, 0x43]);
/// ```
pub fn extract_image_data(input: &[u8]) -> Result<Vec<u8>, JpegError> {
    let Some(scan_start) = walk_headers(input, |_, _, _| ())? else {
        log::error!("JPEG has no SOS segment, so there's no scan data to extract.");
        return Err(JpegError::CorruptStream {
            offset: input.len(),
            kind: CorruptKind::NoStartOfScan,
        });
    };

    extract_image_data_at(input, scan_start)
}

/// Copies the compressed scan data starting at `scan_start`, which should
/// be right after an `SOS` segment's payload.
///
/// The data may hold more than one scan. Stuffed bytes (`FF 00`), restart
/// markers, and any segments between scans are copied along with it. Only
/// `EOI` ends it.
pub fn extract_image_data_at(input: &[u8], scan_start: usize) -> Result<Vec<u8>, JpegError> {
    let scan: &[u8] = input.get(scan_start..).unwrap_or_default();
    let len: usize = scan_data_len(scan, scan_start)?;

    log::trace!("Found `{len}` bytes of scan data at offset `{scan_start}`.");
    Ok(scan[..len].to_vec())
}

/// Walks the header segments of a JPEG stream, calling `on_segment` with
/// each segment's marker code, payload offset, and payload.
///
/// Returns where the scan data starts, or `None` if the stream hit `EOI`
/// before any `SOS`.
fn walk_headers<'input>(
    input: &'input [u8],
    mut on_segment: impl FnMut(u8, usize, &'input [u8]),
) -> Result<Option<usize>, JpegError> {
    let total_len: usize = input.len();
    let mut cursor: &'input [u8] = input;
    let input: &mut &'input [u8] = &mut cursor;

    soi(input)?;

    loop {
        let marker_offset: usize = total_len - input.len();

        match marker(input, marker_offset)? {
            // a table-only stream can end without ever scanning
            Marker::Standalone { marker_code } if marker_code == EOI_MARKER_CODE => {
                log::trace!("EOI detected before SOS! Stopping.");
                return Ok(None);
            }

            Marker::Standalone { marker_code } => {
                log::trace!("Got standalone marker with code `{marker_code:#04X}`.");
                on_segment(marker_code, total_len - input.len(), &[]);
            }

            Marker::Full { marker_code, len } => {
                log::trace!("Got full marker! code: `{marker_code:#04X}`, len: `{len}`");

                let remaining: usize = input.len();
                let payload: &'input [u8] =
                    take(len as usize)
                        .parse_next(input)
                        .map_err(|_: EmptyError| {
                            log::error!(
                                "Attempted to parse payload from JPEG marker, \
                                but ran out of data. \
                                marker code: `{marker_code:#04X}`, len: `{len}` bytes, \
                                remaining input len: `{remaining}` bytes"
                            );
                            JpegError::TruncatedData {
                                marker_code,
                                needed: len as usize,
                                remaining,
                            }
                        })?;

                let payload_offset: usize = total_len - input.len() - payload.len();
                on_segment(marker_code, payload_offset, payload);

                // no more headers after this. the scan data follows
                if marker_code == SOS_MARKER_CODE {
                    return Ok(Some(total_len - input.len()));
                }
            }
        }
    }
}

/// Takes the `SOI` marker off the front of the stream.
fn soi(input: &mut &[u8]) -> Result<(), JpegError> {
    let found: [u8; 2] = take(2_usize)
        .map(|s: &[u8]| [s[0], s[1]])
        .parse_next(input)
        .map_err(|_: EmptyError| {
            log::error!("Input is too short to hold an SOI marker.");
            JpegError::MissingSoi { found: None }
        })?;

    if found != [0xFF, SOI_MARKER_CODE] {
        log::error!(
            "The first marker of a JPEG file should be `SOI`, \
            but it wasn't! \
            got: `{found:02X?}`"
        );
        return Err(JpegError::MissingSoi { found: Some(found) });
    }

    Ok(())
}

/// Tries to parse out a [`Marker`].
fn marker(input: &mut &[u8], offset: usize) -> Result<Marker, JpegError> {
    let corrupt = |kind: CorruptKind| JpegError::CorruptStream { offset, kind };

    // each marker must begin with one `0xFF` byte.
    //
    // let's see if that happened...
    let first_marker_byte: u8 = u8.parse_next(input).map_err(|_: EmptyError| {
        log::error!("Ran out of data before SOS while looking for a marker!");
        corrupt(CorruptKind::UnexpectedEof)
    })?;
    if first_marker_byte != 0xFF {
        log::error!("JPEG marker's first byte was wrong. got: `{first_marker_byte:#04X}`");
        return Err(corrupt(CorruptKind::MissingMarkerPrefix(first_marker_byte)));
    }

    // a marker may have any number of `0xFF` fill bytes before its code.
    //
    // try to find its code
    let mut fill_bytes: usize = 0;
    let marker_code: u8 = loop {
        let k: u8 = u8.parse_next(input).map_err(|_: EmptyError| {
            log::error!("Failed to parse out marker byte!");
            corrupt(CorruptKind::UnexpectedEof)
        })?;

        if k != 0xFF {
            break k;
        }
        fill_bytes += 1;
    };
    if fill_bytes > 0 {
        log::warn!("Skipped `{fill_bytes}` fill bytes before marker `{marker_code:#04X}`.");
    }

    if is_standalone(marker_code) {
        return Ok(Marker::Standalone { marker_code });
    }

    // alright, we've taken care of any standalone markers.
    //
    // let's check the length of the payload, then return
    let remaining: usize = input.len();
    let length: u16 = be_u16.parse_next(input).map_err(|_: EmptyError| {
        log::error!("Failed to find `u16` length byte pair when parsing marker.");
        JpegError::TruncatedData {
            marker_code,
            needed: 2,
            remaining,
        }
    })?;

    // subtract 2 bytes from that (b/c the length includes its own bytes)
    let len: u16 = length.checked_sub(2_u16).ok_or_else(|| {
        log::error!("Marker `{marker_code:#04X}` has a length under 2: `{length}`");
        corrupt(CorruptKind::BadLength {
            marker_code,
            length,
        })
    })?;

    Ok(Marker::Full { marker_code, len })
}

/// Finds how many bytes of scan data come before the `EOI` marker.
///
/// `scan_start` is only used to report offsets.
fn scan_data_len(scan: &[u8], scan_start: usize) -> Result<usize, JpegError> {
    let region: &mut &[u8] = &mut &*scan;

    loop {
        let consumed: usize = scan.len() - region.len();

        // grab the next two bytes without eating them
        let (_, [a, b]) = take(2_usize)
            .map(|s: &[u8]| [s[0], s[1]])
            .parse_peek(*region)
            .map_err(|_: EmptyError| {
                log::error!("Ran out of scan data without finding EOI.");
                JpegError::CorruptStream {
                    offset: scan_start + scan.len(),
                    kind: CorruptKind::NoEndOfImage,
                }
            })?;

        // plain entropy-coded data
        if a != 0xFF {
            *region = region.get(1..).unwrap_or_default();
            continue;
        }

        match b {
            // a stuffed byte. the `FF` is data, not a marker!
            0x00 => *region = region.get(2..).unwrap_or_default(),

            // a fill byte. the next `FF` may still start a marker
            0xFF => *region = region.get(1..).unwrap_or_default(),

            EOI_MARKER_CODE => {
                let trailing: usize = region.len() - 2;
                if trailing > 0 {
                    log::warn!("Found `{trailing}` bytes after EOI. They'll be dropped.");
                }
                return Ok(consumed);
            }

            // restart markers (and the other standalones) just continue
            // the scan
            code if is_standalone(code) => *region = region.get(2..).unwrap_or_default(),

            // anything else is a segment between scans, like the tables in
            // a progressive file. copy it through whole
            marker_code => {
                log::trace!("Found marker `{marker_code:#04X}` between scans.");
                *region = region.get(2..).unwrap_or_default();

                let remaining: usize = region.len();
                let length: u16 = be_u16.parse_next(region).map_err(|_: EmptyError| {
                    log::error!("No length for marker `{marker_code:#04X}` between scans.");
                    JpegError::TruncatedData {
                        marker_code,
                        needed: 2,
                        remaining,
                    }
                })?;
                let len: u16 = length.checked_sub(2_u16).ok_or_else(|| {
                    log::error!("Marker `{marker_code:#04X}` has a length under 2: `{length}`");
                    JpegError::CorruptStream {
                        offset: scan_start + consumed,
                        kind: CorruptKind::BadLength {
                            marker_code,
                            length,
                        },
                    }
                })?;

                let remaining: usize = region.len();
                take(len as usize)
                    .void()
                    .parse_next(region)
                    .map_err(|_: EmptyError| {
                        log::error!("Segment between scans was cut off.");
                        JpegError::TruncatedData {
                            marker_code,
                            needed: len as usize,
                            remaining,
                        }
                    })?;
            }
        }
    }
}
