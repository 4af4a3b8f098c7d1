//! Helpers that work on JPEG files by path.

use std::{io::Write, path::Path};

use crate::{ScanOutcome, types::MetadataTable};

use super::{JpegError, JpegIoError, Segment, assemble_to_vec, extract_image_data, scan_segments};

/// Reads a file and scans its header segments.
///
/// Only opening or reading the file can fail here. Problems with the JPEG
/// itself end up in the returned [`ScanOutcome`].
pub fn read_header(
    path: impl AsRef<Path>,
    table: &MetadataTable,
) -> std::io::Result<ScanOutcome<Segment, JpegError>> {
    let path: &Path = path.as_ref();
    let input: Vec<u8> = std::fs::read(path)?;

    log::trace!("Read `{}` bytes from `{}`.", input.len(), path.display());
    Ok(scan_segments(&input, table))
}

/// Reads a file and copies out its compressed scan data.
pub fn read_image_data(path: impl AsRef<Path>) -> Result<Vec<u8>, JpegIoError> {
    let input: Vec<u8> = std::fs::read(path)?;
    Ok(extract_image_data(&input)?)
}

/// Writes a new file made of `segments` and the scan data from `old_path`.
///
/// `segments` should end with the `SOS` segment, just like the list from
/// [`read_header`] does.
///
/// The new file is fully built in memory, written to a temporary file next
/// to `new_path`, then renamed over it. So, `old_path` and `new_path` may be
/// the same file, and if anything fails (even partway through writing),
/// `new_path` is left alone.
///
/// An `old_path` with no scan data is refused with
/// [`JpegError::MissingImageData`].
pub fn put_header(
    old_path: impl AsRef<Path>,
    new_path: impl AsRef<Path>,
    segments: &[Segment],
) -> Result<(), JpegIoError> {
    let (old_path, new_path): (&Path, &Path) = (old_path.as_ref(), new_path.as_ref());

    let Some((sos, headers)) = segments.split_last() else {
        log::error!("Can't write a JPEG header without any segments.");
        return Err(JpegError::ExpectedStartOfScan { found: None }.into());
    };

    let image_data: Vec<u8> = read_image_data(old_path)?;
    if image_data.is_empty() {
        log::error!("`{}` has no scan data to copy.", old_path.display());
        return Err(JpegError::MissingImageData.into());
    }
    let bytes: Vec<u8> = assemble_to_vec(headers, sos, &image_data)?;

    log::trace!(
        "Writing `{}` bytes from `{}` to `{}`.",
        bytes.len(),
        old_path.display(),
        new_path.display()
    );
    replace_file(new_path, &bytes)?;
    Ok(())
}

/// Swaps `bytes` in as the contents of `path` with a single rename.
fn replace_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir: &Path = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;

    // temp files are created private. keep the target's permissions
    if let Ok(metadata) = std::fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    temp.persist(path)?;
    Ok(())
}
