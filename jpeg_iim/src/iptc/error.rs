use std::sync::Arc;

/// Something went wrong while reading or writing IPTC-IIM records.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IptcError {
    /// The input ended in the middle of a record.
    TruncatedData {
        /// Where the record started.
        offset: usize,

        /// How many bytes we needed.
        needed: usize,

        /// How many bytes were left in the input.
        remaining: usize,
    },

    /// A record uses the extended dataset form, where the size field holds
    /// the length of a longer size field.
    ///
    /// That form is only used for huge datasets, and it isn't supported.
    UnsupportedExtendedDataset {
        /// Where the record started.
        offset: usize,

        /// The record's record number.
        record_number: u8,

        /// The record's dataset number.
        dataset_number: u8,
    },

    /// Every record starts with the tag marker (`0x1C`), but this one didn't.
    BadTagMarker {
        /// Where the record started.
        offset: usize,

        /// The byte we found instead.
        found: u8,
    },

    /// A record's data is too long for the standard 15-bit size field.
    OversizeRecord {
        /// The record's position in the list given to the encoder.
        index: usize,

        /// The data's length, in bytes.
        data_len: usize,
    },
}

impl core::fmt::Display for IptcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TruncatedData {
                offset,
                needed,
                remaining,
            } => write!(
                f,
                "IPTC record at offset `{offset}` was cut off. \
                needed: `{needed}` bytes, \
                remaining input len: `{remaining}` bytes"
            ),

            Self::UnsupportedExtendedDataset {
                offset,
                record_number,
                dataset_number,
            } => write!(
                f,
                "IPTC record `{record_number}:{dataset_number:02}` at offset \
                `{offset}` uses an extended dataset size, which isn't supported."
            ),

            Self::BadTagMarker { offset, found } => write!(
                f,
                "IPTC record at offset `{offset}` should start with the tag \
                marker `0x1C`, but started with `{found:#04X}`."
            ),

            Self::OversizeRecord { index, data_len } => write!(
                f,
                "IPTC record `{index}` has `{data_len}` bytes of data, but the \
                most a record can hold is `{}` bytes.",
                super::MAX_RECORD_DATA_LEN
            ),
        }
    }
}

impl core::error::Error for IptcError {}

/// An error from an IPTC operation that also touches a reader or writer.
#[derive(Clone, Debug)]
pub enum IptcIoError {
    /// Reading or writing failed.
    Io(
        // note: `Arc` allows us to impl `Clone`
        Arc<std::io::Error>,
    ),

    /// The IPTC data itself was the problem.
    Iptc(IptcError),
}

impl core::fmt::Display for IptcIoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O failed while handling IPTC records. err: {e}"),
            Self::Iptc(e) => e.fmt(f),
        }
    }
}

impl core::error::Error for IptcIoError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e.as_ref()),
            Self::Iptc(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for IptcIoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.into())
    }
}

impl From<IptcError> for IptcIoError {
    fn from(value: IptcError) -> Self {
        Self::Iptc(value)
    }
}
