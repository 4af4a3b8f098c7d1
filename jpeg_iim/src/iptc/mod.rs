//! IPTC-IIM is a format from the International Press Telecommunications
//! Council for describing news objects. In image files, it's a flat run of
//! records, each tagged with a record number and a dataset number.
//!
//! JPEG files usually carry it inside an `APP13` segment. This module only
//! handles the raw IIM bytes. Finding them in the segment is up to you.

use std::borrow::Cow;

use crate::types::{
    MetadataTable,
    iptc::{KnownDataset, RecordClass},
};

mod encode;
mod error;
mod parse;

pub use encode::{encode_records, write_records};
pub use error::{IptcError, IptcIoError};
pub use parse::{parse_records, parse_records_from_reader};

/// The byte that starts every IIM record.
pub const IPTC_TAG_MARKER: u8 = 0x1C;

/// The most data one record can hold.
///
/// The size field is a `u16`, but its high bit marks the extended form, so
/// only 15 bits are left for the length.
pub const MAX_RECORD_DATA_LEN: usize = 0x7FFF;

/// One IPTC-IIM record (a "dataset", in IIM's terms).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IptcRecord {
    /// The record number, which says what class of data this is.
    pub record_number: u8,

    /// The dataset number within the record.
    pub dataset_number: u8,

    /// The record's data.
    ///
    /// This is often text, but some datasets hold binary numbers.
    pub data: Vec<u8>,
}

impl IptcRecord {
    /// Creates a record.
    pub fn new(record_number: u8, dataset_number: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            record_number,
            dataset_number,
            data: data.into(),
        }
    }

    /// The record's usual short identifier, like `2:05`.
    ///
    /// ```
    /// use jpeg_iim::iptc::IptcRecord;
    ///
    /// assert_eq!(IptcRecord::new(2, 5, "Title").identifier(), "2:05");
    /// assert_eq!(IptcRecord::new(1, 120, Vec::new()).identifier(), "1:120");
    /// ```
    pub fn identifier(&self) -> String {
        format!("{}:{:02}", self.record_number, self.dataset_number)
    }

    /// Finds this record's dataset in the table.
    pub fn known_dataset(&self, table: &MetadataTable) -> Option<KnownDataset> {
        table.dataset(self.record_number, self.dataset_number)
    }

    /// Grabs the dataset's name, like `Keywords`.
    pub fn name(&self, table: &MetadataTable) -> Option<&'static str> {
        table.dataset_name(self.record_number, self.dataset_number)
    }

    /// Grabs the dataset's description.
    pub fn description(&self, table: &MetadataTable) -> Option<&'static str> {
        table.dataset_description(self.record_number, self.dataset_number)
    }

    /// The class of the record this dataset lives in.
    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::new(self.record_number)
    }

    /// Reads the data as text, replacing any invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// For a File Format record (`1:20`), names the format its data holds.
    ///
    /// ```
    /// use jpeg_iim::{iptc::IptcRecord, types::MetadataTable};
    ///
    /// let table = MetadataTable::standard();
    /// let record = IptcRecord::new(1, 20, vec![0x00, 0x0B]);
    ///
    /// assert_eq!(
    ///     record.file_format_name(&table),
    ///     Some("JPEG File Interchange (JFIF)")
    /// );
    /// ```
    pub fn file_format_name(&self, table: &MetadataTable) -> Option<&'static str> {
        if self.known_dataset(table) != Some(KnownDataset::FileFormat) {
            return None;
        }

        // a two-byte binary number
        let code: [u8; 2] = self.data.as_slice().try_into().ok()?;
        table.file_format_name(u16::from_be_bytes(code))
    }

    /// For an Image Type record (`2:130`), names its colour component.
    ///
    /// The data is two characters: the number of components, then a
    /// letter for which component this object holds.
    pub fn image_type_name(&self, table: &MetadataTable) -> Option<&'static str> {
        if self.known_dataset(table) != Some(KnownDataset::ImageType) {
            return None;
        }

        let &[_, component] = self.data.as_slice() else {
            return None;
        };
        table.image_type_name(component as char)
    }
}
