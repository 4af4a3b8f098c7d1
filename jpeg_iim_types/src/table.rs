//! The [`MetadataTable`], which indexes every name this crate knows about.

use rustc_hash::FxHashMap;

use crate::{
    iptc::{FILE_FORMATS, IMAGE_TYPES, KnownDataset},
    jpeg::KnownMarker,
};

/// An immutable lookup table from wire codes to names.
///
/// Build one with [`MetadataTable::standard`], then pass references to it
/// wherever names are needed. Nothing in here changes after construction.
///
/// ```
/// use jpeg_iim_types::MetadataTable;
///
/// let table = MetadataTable::standard();
/// assert_eq!(table.marker_name(0xED), Some("APP13"));
/// assert_eq!(table.dataset_name(2, 25), Some("Keywords"));
/// assert_eq!(table.dataset_name(2, 255), None);
/// ```
#[derive(Clone, Debug)]
pub struct MetadataTable {
    markers: FxHashMap<u8, KnownMarker>,
    datasets: FxHashMap<(u8, u8), KnownDataset>,
    file_formats: &'static [&'static str],
    image_types: FxHashMap<char, &'static str>,
}

impl MetadataTable {
    /// Creates a table holding every marker and dataset in this crate.
    pub fn standard() -> Self {
        let mut markers: FxHashMap<u8, KnownMarker> = FxHashMap::default();
        for marker in KnownMarker::ALL {
            markers.insert(marker.code(), *marker);
        }

        let mut datasets: FxHashMap<(u8, u8), KnownDataset> = FxHashMap::default();
        for dataset in KnownDataset::ALL {
            datasets.insert((dataset.record_number(), dataset.dataset_number()), *dataset);
        }

        Self {
            markers,
            datasets,
            file_formats: FILE_FORMATS,
            image_types: IMAGE_TYPES.iter().copied().collect(),
        }
    }

    /// Finds the marker for a code byte.
    pub fn marker(&self, code: u8) -> Option<KnownMarker> {
        self.markers.get(&code).copied()
    }

    /// Grabs the short name of a marker, like `SOS`.
    pub fn marker_name(&self, code: u8) -> Option<&'static str> {
        self.marker(code).map(|m| m.name())
    }

    /// Grabs the description of a marker.
    pub fn marker_description(&self, code: u8) -> Option<&'static str> {
        self.marker(code).map(|m| m.description())
    }

    /// Finds the dataset for a `(record, dataset)` pair.
    pub fn dataset(&self, record_number: u8, dataset_number: u8) -> Option<KnownDataset> {
        self.datasets
            .get(&(record_number, dataset_number))
            .copied()
    }

    /// Grabs the name of a dataset.
    pub fn dataset_name(&self, record_number: u8, dataset_number: u8) -> Option<&'static str> {
        self.dataset(record_number, dataset_number)
            .map(|d| d.name())
    }

    /// Grabs the description of a dataset.
    pub fn dataset_description(
        &self,
        record_number: u8,
        dataset_number: u8,
    ) -> Option<&'static str> {
        self.dataset(record_number, dataset_number)
            .map(|d| d.description())
    }

    /// Names a value of dataset `1:20` (File Format).
    ///
    /// ```
    /// use jpeg_iim_types::MetadataTable;
    ///
    /// let table = MetadataTable::standard();
    /// assert_eq!(table.file_format_name(11), Some("JPEG File Interchange (JFIF)"));
    /// ```
    pub fn file_format_name(&self, code: u16) -> Option<&'static str> {
        self.file_formats.get(code as usize).copied()
    }

    /// Names a colour component code from dataset `2:130` (Image Type).
    pub fn image_type_name(&self, code: char) -> Option<&'static str> {
        self.image_types.get(&code).copied()
    }
}

impl Default for MetadataTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::MetadataTable;

    #[test]
    fn looks_up_markers() {
        let table = MetadataTable::standard();

        assert_eq!(table.marker_name(0xFE), Some("COM"));
        assert_eq!(table.marker_description(0xDA), Some("Start of Scan (SOS)"));
        assert_eq!(table.marker_name(0x00), None);
    }

    #[test]
    fn looks_up_datasets() {
        let table = MetadataTable::standard();

        assert_eq!(table.dataset_name(2, 5), Some("Object Name (Title)"));
        assert_eq!(
            table.dataset_description(2, 120),
            Some("Caption/Abstract - Max 2000 Characters")
        );
        assert_eq!(table.dataset_name(3, 0), None);
    }

    #[test]
    fn looks_up_value_names() {
        let table = MetadataTable::standard();

        assert_eq!(table.file_format_name(0), Some("No ObjectData"));
        assert_eq!(table.file_format_name(29), Some("Corel Draw [*.CDR]"));
        assert_eq!(table.file_format_name(30), None);

        assert_eq!(table.image_type_name('K'), Some("Black Component"));
        assert_eq!(table.image_type_name('Z'), None);
    }
}
