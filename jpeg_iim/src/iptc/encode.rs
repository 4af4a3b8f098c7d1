use std::io::Write;

use super::{IPTC_TAG_MARKER, IptcError, IptcIoError, IptcRecord, MAX_RECORD_DATA_LEN};

/// Encodes records into a block of IPTC-IIM bytes.
///
/// Records are written in the order given. If any record is too large
/// (see [`MAX_RECORD_DATA_LEN`]), nothing is encoded.
///
/// ```
/// use jpeg_iim::iptc::{self, IptcRecord};
///
/// let records = [IptcRecord::new(2, 25, "cat")];
/// assert_eq!(
///     iptc::encode_records(&records).unwrap(),
///     [0x1C, 0x02, 0x19, 0x00, 0x03, b'c', b'a', b't']
/// );
/// ```
pub fn encode_records(records: &[IptcRecord]) -> Result<Vec<u8>, IptcError> {
    for (index, record) in records.iter().enumerate() {
        let data_len: usize = record.data.len();
        if data_len > MAX_RECORD_DATA_LEN {
            log::error!(
                "IPTC record `{index}` ({}) is too large to encode! \
                data len: `{data_len}` bytes",
                record.identifier()
            );
            return Err(IptcError::OversizeRecord { index, data_len });
        }
    }

    let len: usize = records.iter().map(|r| 5 + r.data.len()).sum();
    let mut out: Vec<u8> = Vec::with_capacity(len);

    for record in records {
        out.extend_from_slice(&[IPTC_TAG_MARKER, record.record_number, record.dataset_number]);
        out.extend_from_slice(&(record.data.len() as u16).to_be_bytes());
        out.extend_from_slice(&record.data);
    }

    log::trace!("Encoded `{}` IPTC records.", records.len());
    Ok(out)
}

/// Encodes records like [`encode_records`], then writes them to `out`.
///
/// Nothing is written if any record is too large.
pub fn write_records<W: Write>(records: &[IptcRecord], out: &mut W) -> Result<(), IptcIoError> {
    let bytes: Vec<u8> = encode_records(records)?;
    out.write_all(&bytes)?;
    Ok(())
}
