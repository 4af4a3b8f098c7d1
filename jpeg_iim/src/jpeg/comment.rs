//! Reads and writes the comment (`COM`) segment.

use std::borrow::Cow;

use crate::types::MetadataTable;

use super::{APP0_MARKER_CODE, COM_MARKER_CODE, JpegError, Segment};

/// Finds the first comment segment.
pub fn get_comment(segments: &[Segment]) -> Result<&Segment, JpegError> {
    segments
        .iter()
        .find(|s| s.marker == COM_MARKER_CODE)
        .ok_or(JpegError::CommentNotFound)
}

/// Grabs the text of the first comment segment.
///
/// Comments are supposed to be text, but nothing enforces an encoding.
/// Invalid UTF-8 is replaced with `U+FFFD`.
pub fn comment_text(segments: &[Segment]) -> Result<Cow<'_, str>, JpegError> {
    get_comment(segments).map(|s| String::from_utf8_lossy(&s.payload))
}

/// Sets the comment, returning the index of the comment segment.
///
/// If there's already a comment segment, its payload is replaced in place.
/// Otherwise, a new one goes right before the first segment that isn't an
/// application (`APPn`) or comment segment. That keeps `APP0`/`APP1` up
/// front, where readers expect them.
///
/// ```
/// use jpeg_iim::{jpeg, types::MetadataTable};
///
/// let table = MetadataTable::standard();
/// let mut segments = vec![
///     jpeg::Segment::new(0xE0, b"JFIF\0".to_vec(), &table),
///     jpeg::Segment::new(0xDB, vec![0x00], &table),
/// ];
///
/// assert_eq!(jpeg::put_comment(&mut segments, "first", &table), 1);
/// assert_eq!(jpeg::put_comment(&mut segments, "second", &table), 1);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(jpeg::comment_text(&segments).unwrap(), "second");
/// ```
pub fn put_comment(
    segments: &mut Vec<Segment>,
    comment: impl AsRef<[u8]>,
    table: &MetadataTable,
) -> usize {
    let comment: &[u8] = comment.as_ref();

    if let Some(index) = segments.iter().position(|s| s.marker == COM_MARKER_CODE) {
        log::trace!("Replacing comment in segment `{index}`.");
        let segment: &mut Segment = &mut segments[index];
        segment.payload = comment.to_vec();
        segment.payload_offset = None;
        return index;
    }

    // `APP0` through `COM` are all at or above `0xE0`
    let index: usize = segments
        .iter()
        .position(|s| s.marker < APP0_MARKER_CODE)
        .unwrap_or(segments.len());

    log::trace!("Adding comment segment at index `{index}`.");
    segments.insert(index, Segment::new(COM_MARKER_CODE, comment.to_vec(), table));
    index
}
