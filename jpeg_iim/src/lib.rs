//! # `jpeg_iim`
//!
//! A library to read and rewrite the metadata-carrying parts of JPEG files:
//! the header segments in front of the compressed image, and the IPTC-IIM
//! records usually tucked inside an `APP13` segment.
//!
//! ## What's here
//!
//! - [`jpeg`]: scans a JPEG into its header [`jpeg::Segment`]s, pulls out the
//!   compressed scan data, edits the comment segment, and puts everything
//!   back together byte-for-byte.
//! - [`iptc`]: turns an IPTC-IIM block into a list of [`iptc::IptcRecord`]s
//!   and back again.
//!
//! Names and descriptions for markers and datasets come from
//! [`types::MetadataTable`]. Build one and pass it around; nothing in this
//! crate keeps global state.
//!
//! ## Partial results
//!
//! Real-world files are often a little broken. The scanners hand back
//! everything they could read, along with the reason they stopped, in a
//! [`ScanOutcome`]. Check [`ScanOutcome::is_complete`] (or use
//! [`ScanOutcome::complete`]) before treating the list as the whole story!
//!
//! The writers are the opposite: they validate everything first and either
//! produce the whole output or nothing at all.
//!
//! ```
//! use jpeg_iim::{iptc, types::MetadataTable};
//!
//! let table = MetadataTable::standard();
//!
//! let raw: &[u8] = &[0x1C, 0x02, 0x05, 0x00, 0x04, b'T', b'e', b's', b't'];
//! let records = iptc::parse_records(raw).complete().unwrap();
//!
//! assert_eq!(records[0].name(&table), Some("Object Name (Title)"));
//! assert_eq!(iptc::encode_records(&records).unwrap(), raw);
//! ```
//!
//! ## License
//!
//! This project is dual-licensed under either the Apache License 2.0 or the MIT License at your option.

#![forbid(unsafe_code)]

pub mod iptc;
pub mod jpeg;

/// The lookup tables used to name markers and datasets.
pub use jpeg_iim_types as types;

/// The result of a tolerant scan.
///
/// Scanners stop at the first problem they can't get past, but they don't
/// throw away what came before it. `items` holds everything read in order;
/// `error` says why scanning stopped early, if it did.
#[must_use = "a scan may have stopped early. check `error` before trusting `items`"]
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub struct ScanOutcome<T, E> {
    /// Everything read before the scan finished (or stopped).
    pub items: Vec<T>,

    /// Why the scan stopped early.
    ///
    /// `None` means the input was read all the way through.
    pub error: Option<E>,
}

impl<T, E> ScanOutcome<T, E> {
    /// A scan that read its whole input.
    pub(crate) fn finished(items: Vec<T>) -> Self {
        Self { items, error: None }
    }

    /// A scan that had to stop early.
    pub(crate) fn stopped(items: Vec<T>, error: E) -> Self {
        Self {
            items,
            error: Some(error),
        }
    }

    /// Whether the scan read its whole input.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the items only if the scan was complete.
    ///
    /// Any partial items are dropped when there's an error.
    pub fn complete(self) -> Result<Vec<T>, E> {
        match self.error {
            None => Ok(self.items),
            Some(e) => Err(e),
        }
    }

    /// Splits the outcome into its items and the optional error.
    pub fn into_parts(self) -> (Vec<T>, Option<E>) {
        (self.items, self.error)
    }
}

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }
}
