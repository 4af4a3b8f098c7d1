use std::sync::Arc;

/// Something went wrong while reading or writing a JPEG stream.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JpegError {
    /// A JPEG file must start with `SOI` (`0xFF 0xD8`).
    ///
    /// This one didn't, so it's probably not a JPEG at all.
    MissingSoi {
        /// The first bytes we found instead, if there were any.
        found: Option<[u8; 2]>,
    },

    /// The stream stopped making sense.
    CorruptStream {
        /// Where in the input we noticed.
        offset: usize,

        /// What exactly went wrong.
        kind: CorruptKind,
    },

    /// The stream ended in the middle of a segment.
    TruncatedData {
        /// The marker code of the segment that got cut off.
        marker_code: u8,

        /// How many bytes we needed.
        needed: usize,

        /// How many bytes were left in the input.
        remaining: usize,
    },

    /// A segment's payload is too large for its 16-bit length field.
    OversizeSegment {
        /// The segment's position in the list given to the assembler.
        index: usize,

        /// The segment's marker code.
        marker_code: u8,

        /// The payload's length, in bytes.
        payload_len: usize,
    },

    /// A standalone marker (like `RST0`) was given a payload.
    ///
    /// Those markers have no length field, so the payload can't be written.
    UnexpectedPayload {
        /// The segment's position in the list given to the assembler.
        index: usize,

        /// The segment's marker code.
        marker_code: u8,
    },

    /// A header segment uses a marker that only belongs in one place in
    /// the stream (`SOI`, `EOI`, `SOS`) or can't be a marker at all (`0xFF`).
    ///
    /// Writing it would make the stream read back differently.
    ReservedMarker {
        /// The segment's position in the list given to the assembler.
        index: usize,

        /// The segment's marker code.
        marker_code: u8,
    },

    /// There's no scan data to put after the new header.
    MissingImageData,

    /// The assembler needs an `SOS` segment to put in front of the scan
    /// data, but got something else.
    ExpectedStartOfScan {
        /// The marker code we got instead, if we got a segment at all.
        found: Option<u8>,
    },

    /// There's no comment (`COM`) segment in the list.
    CommentNotFound,
}

/// The ways a JPEG stream can be corrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CorruptKind {
    /// A marker should start with `0xFF`, but this byte was found.
    MissingMarkerPrefix(u8),

    /// The input ended where a marker was expected.
    UnexpectedEof,

    /// A segment's length field was less than 2, which can't be right: the
    /// length includes its own two bytes.
    BadLength {
        /// The segment's marker code.
        marker_code: u8,

        /// The length field's value.
        length: u16,
    },

    /// The headers ended without a start of scan (`SOS`) segment.
    NoStartOfScan,

    /// The scan data ran to the end of the input without an `EOI` marker.
    NoEndOfImage,
}

impl core::fmt::Display for JpegError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingSoi { found: Some(found) } => write!(
                f,
                "A JPEG file should start with SOI (`FF D8`), \
                but it started with: `{found:02X?}`"
            ),
            Self::MissingSoi { found: None } => {
                f.write_str("The input is too short to start with SOI (`FF D8`).")
            }

            Self::CorruptStream { offset, kind } => {
                write!(f, "The JPEG stream is corrupt at byte `{offset}`: {kind}")
            }

            Self::TruncatedData {
                marker_code,
                needed,
                remaining,
            } => write!(
                f,
                "Not enough data left in input for segment. \
                marker code: `{marker_code:#04X}`, \
                needed: `{needed}` bytes, \
                remaining input len: `{remaining}` bytes"
            ),

            Self::OversizeSegment {
                index,
                marker_code,
                payload_len,
            } => write!(
                f,
                "Segment `{index}` (marker code `{marker_code:#04X}`) has a \
                `{payload_len}` byte payload, but the most a segment can hold \
                is `{}` bytes.",
                super::MAX_SEGMENT_PAYLOAD_LEN
            ),

            Self::UnexpectedPayload { index, marker_code } => write!(
                f,
                "Segment `{index}` uses standalone marker code \
                `{marker_code:#04X}`, which can't carry a payload, \
                but it has one."
            ),

            Self::ReservedMarker { index, marker_code } => write!(
                f,
                "Segment `{index}` uses marker code `{marker_code:#04X}`, which \
                can't appear in the header list."
            ),

            Self::MissingImageData => {
                f.write_str("Couldn't find any scan data to write after the header.")
            }

            Self::ExpectedStartOfScan { found: Some(found) } => write!(
                f,
                "Expected an SOS (`0xDA`) segment before the scan data, \
                but got marker code `{found:#04X}`."
            ),
            Self::ExpectedStartOfScan { found: None } => {
                f.write_str("Expected an SOS (`0xDA`) segment, but got no segments at all.")
            }

            Self::CommentNotFound => f.write_str("Couldn't find a comment (COM) segment."),
        }
    }
}

impl core::fmt::Display for CorruptKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingMarkerPrefix(found) => write!(
                f,
                "JPEG marker's first byte was wrong. \
                expected: `0xFF`; \
                got: `{found:#04X}`"
            ),
            Self::UnexpectedEof => f.write_str("Ran out of data while looking for a marker."),
            Self::BadLength {
                marker_code,
                length,
            } => write!(
                f,
                "JPEG marker segment with code `{marker_code:#04X}` had \
                a length that becomes negative after removing 2: `{length}`"
            ),
            Self::NoStartOfScan => f.write_str("The headers ended without an SOS segment."),
            Self::NoEndOfImage => f.write_str("The scan data has no EOI marker."),
        }
    }
}

impl core::error::Error for JpegError {}

/// An error from a JPEG operation that also touches a reader, writer, or
/// the filesystem.
#[derive(Clone, Debug)]
pub enum JpegIoError {
    /// Reading or writing failed.
    Io(
        // note: `Arc` allows us to impl `Clone`
        Arc<std::io::Error>,
    ),

    /// The JPEG data itself was the problem.
    Jpeg(JpegError),
}

impl core::fmt::Display for JpegIoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O failed while handling a JPEG. err: {e}"),
            Self::Jpeg(e) => e.fmt(f),
        }
    }
}

impl core::error::Error for JpegIoError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e.as_ref()),
            Self::Jpeg(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for JpegIoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.into())
    }
}

impl From<JpegError> for JpegIoError {
    fn from(value: JpegError) -> Self {
        Self::Jpeg(value)
    }
}
