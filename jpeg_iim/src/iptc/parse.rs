use std::io::Read;

use winnow::{
    Parser,
    binary::{be_u16, u8},
    error::EmptyError,
    token::take,
};

use crate::ScanOutcome;

use super::{IPTC_TAG_MARKER, IptcError, IptcRecord};

/// The size field's high bit, which marks the extended dataset form.
const EXTENDED_SIZE_FLAG: u16 = 0x8000;

/// Parses a block of IPTC-IIM bytes into records.
///
/// Records come back in stream order. Repeated datasets (like several
/// Keywords) are all kept.
///
/// Parsing stops at the first record that can't be read. Every record
/// before it is still returned, alongside the error.
///
/// ```
/// use jpeg_iim::iptc;
///
/// let raw: &[u8] = &[
///     0x1C, 0x02, 0x19, 0x00, 0x03, b'c', b'a', b't',
///     0x1C, 0x02, 0x19, 0x00, 0x03, b'd', b'o', b'g',
/// ];
///
/// let records = iptc::parse_records(raw).complete().unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].identifier(), "2:25");
/// assert_eq!(records[1].text(), "dog");
/// ```
pub fn parse_records(input: &[u8]) -> ScanOutcome<IptcRecord, IptcError> {
    let total_len: usize = input.len();
    let mut cursor: &[u8] = input;
    let input: &mut &[u8] = &mut cursor;

    let mut records: Vec<IptcRecord> = Vec::new();

    while !input.is_empty() {
        let offset: usize = total_len - input.len();

        match record(input, offset) {
            Ok(r) => {
                log::trace!(
                    "Found IPTC record `{}` with `{}` bytes of data.",
                    r.identifier(),
                    r.data.len()
                );
                records.push(r);
            }
            Err(e) => {
                log::warn!(
                    "Stopped parsing IPTC after `{}` records. err: {e}",
                    records.len()
                );
                return ScanOutcome::stopped(records, e);
            }
        }
    }

    ScanOutcome::finished(records)
}

/// Reads everything from `reader`, then parses it like [`parse_records`].
pub fn parse_records_from_reader<R: Read>(
    mut reader: R,
) -> std::io::Result<ScanOutcome<IptcRecord, IptcError>> {
    let mut input: Vec<u8> = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(parse_records(&input))
}

/// Parses one record.
///
/// `offset` is where it starts in the whole block, for error reporting.
fn record(input: &mut &[u8], offset: usize) -> Result<IptcRecord, IptcError> {
    let remaining: usize = input.len();

    // tag marker, record number, dataset number, then the data's size
    let (tag, record_number, dataset_number, size): (u8, u8, u8, u16) =
        (u8, u8, u8, be_u16)
            .parse_next(input)
            .map_err(|_: EmptyError| {
                log::error!(
                    "IPTC record header needs 5 bytes, but only `{remaining}` were left."
                );
                IptcError::TruncatedData {
                    offset,
                    needed: 5,
                    remaining,
                }
            })?;

    if tag != IPTC_TAG_MARKER {
        log::error!("IPTC record at `{offset}` has a bad tag marker: `{tag:#04X}`");
        return Err(IptcError::BadTagMarker { offset, found: tag });
    }

    if size & EXTENDED_SIZE_FLAG != 0 {
        log::error!(
            "IPTC record `{record_number}:{dataset_number:02}` uses the extended \
            dataset form, which isn't supported."
        );
        return Err(IptcError::UnsupportedExtendedDataset {
            offset,
            record_number,
            dataset_number,
        });
    }

    let remaining: usize = input.len();
    let data: &[u8] = take(size as usize)
        .parse_next(input)
        .map_err(|_: EmptyError| {
            log::error!(
                "IPTC record `{record_number}:{dataset_number:02}` wants `{size}` \
                bytes of data, but only `{remaining}` were left."
            );
            IptcError::TruncatedData {
                offset,
                needed: size as usize,
                remaining,
            }
        })?;

    Ok(IptcRecord {
        record_number,
        dataset_number,
        data: data.to_vec(),
    })
}
