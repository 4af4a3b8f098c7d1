//! Names for IPTC-IIM records and datasets.
//!
//! IIM identifies each field by a pair of numbers: the record it lives in
//! (its "class", like the envelope or application record) and a dataset
//! number within that record. People usually write these as `2:25`, for
//! example, which is Keywords.
//!
//! ## For contributors
//!
//! To add a dataset, give it a line in the `make_dataset_list!` call below:
//!
//! ```no_compile
//! make_dataset_list!(
//!     // ...snip!
//!     YourDataset = (2, 250) => {
//!         name: "Your Dataset",
//!         description: "Your Dataset - Max 32 characters",
//!     },
//! );
//! ```

/// One of the nine record classes defined by IIM.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum RecordClass {
    /// Record 1: how the object travels, like its service and file format.
    Envelope = 1,

    /// Record 2: the editorial description, like titles and keywords.
    Application = 2,

    /// Record 3: parameters for digital newsphotos.
    NewsphotoParameter = 3,

    /// Record 4, which IIM leaves unallocated.
    NotAllocated4 = 4,

    /// Record 5, which IIM leaves unallocated.
    NotAllocated5 = 5,

    /// Record 6: links to abstract objects.
    AbstractRelationship = 6,

    /// Record 7: describes the object data that follows.
    PreObjectDataDescriptor = 7,

    /// Record 8: the object data itself.
    ObjectData = 8,

    /// Record 9: anything known only after the object data, like its size.
    PostObjectDataDescriptor = 9,
}

impl RecordClass {
    /// Grabs the class for a record number, if it's one of the nine.
    ///
    /// ```
    /// use jpeg_iim_types::iptc::RecordClass;
    ///
    /// assert_eq!(RecordClass::new(2), Some(RecordClass::Application));
    /// assert_eq!(RecordClass::new(10), None);
    /// ```
    pub const fn new(record_number: u8) -> Option<Self> {
        Some(match record_number {
            1 => Self::Envelope,
            2 => Self::Application,
            3 => Self::NewsphotoParameter,
            4 => Self::NotAllocated4,
            5 => Self::NotAllocated5,
            6 => Self::AbstractRelationship,
            7 => Self::PreObjectDataDescriptor,
            8 => Self::ObjectData,
            9 => Self::PostObjectDataDescriptor,
            _ => return None,
        })
    }

    /// The record number for this class.
    pub const fn record_number(&self) -> u8 {
        *self as u8
    }

    /// The name IIM gives this record.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Envelope => "Envelope Record",
            Self::Application => "Application Record",
            Self::NewsphotoParameter => "Digital Newsphoto Parameter Record",
            Self::NotAllocated4 | Self::NotAllocated5 => "Not Allocated",
            Self::AbstractRelationship => "Abstract Relationship Record",
            Self::PreObjectDataDescriptor => "Pre-ObjectData Descriptor Record",
            Self::ObjectData => "ObjectData Record",
            Self::PostObjectDataDescriptor => "Post-ObjectData Descriptor Record",
        }
    }
}

/// Creates the [`KnownDataset`] enum.
///
/// Each discriminant packs the pair as `(record << 8) | dataset`.
macro_rules! make_dataset_list {
    ($( $dataset_ident:ident = ($record:literal, $dataset:literal) => {
        name: $dataset_name:expr,
        description: $dataset_desc:expr,
    }, )+) => {
        /// A list of all known IPTC-IIM datasets.
        #[repr(u16)]
        #[non_exhaustive]
        #[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
        pub enum KnownDataset {
            $(
              $dataset_ident = (($record as u16) << 8) | ($dataset as u16),
            )+
        }

        impl core::convert::TryFrom<(u8, u8)> for KnownDataset {
            type Error = ();

            fn try_from(value: (u8, u8)) -> Result<Self, Self::Error> {
                match value {
                    $( ($record, $dataset) => Ok(KnownDataset::$dataset_ident), )+
                    _ => Err(()),
                }
            }
        }

        impl KnownDataset {
            /// Every known dataset, in table order.
            pub const ALL: &'static [KnownDataset] = &[ $( KnownDataset::$dataset_ident, )+ ];

            /// The record number this dataset lives in.
            ///
            /// ```
            /// use jpeg_iim_types::iptc::KnownDataset;
            ///
            /// assert_eq!(KnownDataset::Keywords.record_number(), 2);
            /// ```
            pub const fn record_number(&self) -> u8 {
                ((*self as u16) >> 8) as u8
            }

            /// The dataset number within its record.
            ///
            /// ```
            /// use jpeg_iim_types::iptc::KnownDataset;
            ///
            /// assert_eq!(KnownDataset::Keywords.dataset_number(), 25);
            /// ```
            pub const fn dataset_number(&self) -> u8 {
                ((*self as u16) & 0xFF) as u8
            }

            /// Grabs the dataset's name as given by IIM.
            pub const fn name(&self) -> &'static str {
                match self {
                    $( KnownDataset::$dataset_ident => $dataset_name, )+
                }
            }

            /// A short description, usually including the size limits.
            pub const fn description(&self) -> &'static str {
                match self {
                    $( KnownDataset::$dataset_ident => $dataset_desc, )+
                }
            }
        }
    };
}

make_dataset_list!(
    //
    // envelope record
    ModelVersion = (1, 0) => {
        name: "Model Version",
        description: "2 byte binary version number",
    },
    Destination = (1, 5) => {
        name: "Destination",
        description: "Max 1024 characters of Destination",
    },
    FileFormat = (1, 20) => {
        name: "File Format",
        description: "2 byte binary file format number, see IPTC-NAA V4 Appendix A",
    },
    FileFormatVersion = (1, 22) => {
        name: "File Format Version",
        description: "Binary version number of file format",
    },
    ServiceIdentifier = (1, 30) => {
        name: "Service Identifier",
        description: "Max 10 characters of Service Identifier",
    },
    EnvelopeNumber = (1, 40) => {
        name: "Envelope Number",
        description: "8 Character Envelope Number",
    },
    ProductId = (1, 50) => {
        name: "Product ID",
        description: "Product ID - Max 32 characters",
    },
    EnvelopePriority = (1, 60) => {
        name: "Envelope Priority",
        description: "Envelope Priority - 1 numeric characters",
    },
    DateSent = (1, 70) => {
        name: "Date Sent",
        description: "Date Sent - 8 numeric characters CCYYMMDD",
    },
    TimeSent = (1, 80) => {
        name: "Time Sent",
        description: "Time Sent - 11 characters HHMMSS±HHMM",
    },
    CodedCharacterSet = (1, 90) => {
        name: "Coded Character Set",
        description: "Coded Character Set - Max 32 characters",
    },
    Uno = (1, 100) => {
        name: "UNO (Unique Name of Object)",
        description: "UNO (Unique Name of Object) - 14 to 80 characters",
    },
    ArmIdentifier = (1, 120) => {
        name: "ARM Identifier",
        description: "ARM Identifier - 2 byte binary number",
    },
    ArmVersion = (1, 122) => {
        name: "ARM Version",
        description: "ARM Version - 2 byte binary number",
    },

    //
    // application record
    RecordVersion = (2, 0) => {
        name: "Record Version",
        description: "Record Version - 2 byte binary number",
    },
    ObjectTypeReference = (2, 3) => {
        name: "Object Type Reference",
        description: "Object Type Reference - 3 plus 0 to 64 Characters",
    },
    ObjectName = (2, 5) => {
        name: "Object Name (Title)",
        description: "Object Name (Title) - Max 64 characters",
    },
    EditStatus = (2, 7) => {
        name: "Edit Status",
        description: "Edit Status - Max 64 characters",
    },
    EditorialUpdate = (2, 8) => {
        name: "Editorial Update",
        description: "Editorial Update - 2 numeric characters",
    },
    Urgency = (2, 10) => {
        name: "Urgency",
        description: "Urgency - 1 numeric character",
    },
    SubjectReference = (2, 12) => {
        name: "Subject Reference",
        description: "Subject Reference - 13 to 236 characters",
    },
    Category = (2, 15) => {
        name: "Category",
        description: "Category - Max 3 characters",
    },
    SupplementalCategory = (2, 20) => {
        name: "Supplemental Category",
        description: "Supplemental Category - Max 32 characters",
    },
    FixtureIdentifier = (2, 22) => {
        name: "Fixture Identifier",
        description: "Fixture Identifier - Max 32 characters",
    },
    Keywords = (2, 25) => {
        name: "Keywords",
        description: "Keywords - Max 64 characters",
    },
    ContentLocationCode = (2, 26) => {
        name: "Content Location Code",
        description: "Content Location Code - 3 characters",
    },
    ContentLocationName = (2, 27) => {
        name: "Content Location Name",
        description: "Content Location Name - Max 64 characters",
    },
    ReleaseDate = (2, 30) => {
        name: "Release Date",
        description: "Release Date - 8 numeric characters CCYYMMDD",
    },
    ReleaseTime = (2, 35) => {
        name: "Release Time",
        description: "Release Time - 11 characters HHMMSS±HHMM",
    },
    ExpirationDate = (2, 37) => {
        name: "Expiration Date",
        description: "Expiration Date - 8 numeric characters CCYYMMDD",
    },
    ExpirationTime = (2, 38) => {
        name: "Expiration Time",
        description: "Expiration Time - 11 characters HHMMSS±HHMM",
    },
    SpecialInstructions = (2, 40) => {
        name: "Special Instructions",
        description: "Special Instructions - Max 256 Characters",
    },
    ActionAdvised = (2, 42) => {
        name: "Action Advised",
        description: "Action Advised - 2 numeric characters",
    },
    ReferenceService = (2, 45) => {
        name: "Reference Service",
        description: "Reference Service - Max 10 characters",
    },
    ReferenceDate = (2, 47) => {
        name: "Reference Date",
        description: "Reference Date - 8 numeric characters CCYYMMDD",
    },
    ReferenceNumber = (2, 50) => {
        name: "Reference Number",
        description: "Reference Number - 8 characters",
    },
    DateCreated = (2, 55) => {
        name: "Date Created",
        description: "Date Created - 8 numeric characters CCYYMMDD",
    },
    TimeCreated = (2, 60) => {
        name: "Time Created",
        description: "Time Created - 11 characters HHMMSS±HHMM",
    },
    DigitalCreationDate = (2, 62) => {
        name: "Digital Creation Date",
        description: "Digital Creation Date - 8 numeric characters CCYYMMDD",
    },
    DigitalCreationTime = (2, 63) => {
        name: "Digital Creation Time",
        description: "Digital Creation Time - 11 characters HHMMSS±HHMM",
    },
    OriginatingProgram = (2, 65) => {
        name: "Originating Program",
        description: "Originating Program - Max 32 characters",
    },
    ProgramVersion = (2, 70) => {
        name: "Program Version",
        description: "Program Version - Max 10 characters",
    },
    ObjectCycle = (2, 75) => {
        name: "Object Cycle",
        description: "Object Cycle - 1 character",
    },
    ByLine = (2, 80) => {
        name: "By-Line (Author)",
        description: "By-Line (Author) - Max 32 Characters",
    },
    ByLineTitle = (2, 85) => {
        name: "By-Line Title (Author Position) [Not used in Photoshop 7]",
        description: "By-Line Title (Author Position) - Max 32 characters",
    },
    City = (2, 90) => {
        name: "City",
        description: "City - Max 32 Characters",
    },
    SubLocation = (2, 92) => {
        name: "Sub-Location",
        description: "Sub-Location - Max 32 characters",
    },
    ProvinceState = (2, 95) => {
        name: "Province/State",
        description: "Province/State - Max 32 Characters",
    },
    CountryCode = (2, 100) => {
        name: "Country/Primary Location Code",
        description: "Country/Primary Location Code - 3 alphabetic characters",
    },
    CountryName = (2, 101) => {
        name: "Country/Primary Location Name",
        description: "Country/Primary Location Name - Max 64 characters",
    },
    OriginalTransmissionReference = (2, 103) => {
        name: "Original Transmission Reference",
        description: "Original Transmission Reference - Max 32 characters",
    },
    Headline = (2, 105) => {
        name: "Headline",
        description: "Headline - Max 256 Characters",
    },
    Credit = (2, 110) => {
        name: "Credit",
        description: "Credit - Max 32 Characters",
    },
    Source = (2, 115) => {
        name: "Source",
        description: "Source - Max 32 Characters",
    },
    CopyrightNotice = (2, 116) => {
        name: "Copyright Notice",
        description: "Copyright Notice - Max 128 Characters",
    },
    Contact = (2, 118) => {
        name: "Contact",
        description: "Contact - Max 128 characters",
    },
    CaptionAbstract = (2, 120) => {
        name: "Caption/Abstract",
        description: "Caption/Abstract - Max 2000 Characters",
    },
    CaptionWriter = (2, 122) => {
        name: "Caption Writer/Editor",
        description: "Caption Writer/Editor - Max 32 Characters",
    },
    RasterizedCaption = (2, 125) => {
        name: "Rasterized Caption",
        description: "Rasterized Caption - 7360 bytes, 1 bit per pixel, 460x128pixel image",
    },
    ImageType = (2, 130) => {
        name: "Image Type",
        description: "Image Type - 2 characters",
    },
    ImageOrientation = (2, 131) => {
        name: "Image Orientation",
        description: "Image Orientation - 1 alphabetic character",
    },
    LanguageIdentifier = (2, 135) => {
        name: "Language Identifier",
        description: "Language Identifier - 2 or 3 aphabetic characters",
    },
    AudioType = (2, 150) => {
        name: "Audio Type",
        description: "Audio Type - 2 characters",
    },
    AudioSamplingRate = (2, 151) => {
        name: "Audio Sampling Rate",
        description: "Audio Sampling Rate - 6 numeric characters",
    },
    AudioSamplingResolution = (2, 152) => {
        name: "Audio Sampling Resolution",
        description: "Audio Sampling Resolution - 2 numeric characters",
    },
    AudioDuration = (2, 153) => {
        name: "Audio Duration",
        description: "Audio Duration - 6 numeric characters",
    },
    AudioOutcue = (2, 154) => {
        name: "Audio Outcue",
        description: "Audio Outcue - Max 64 characters",
    },
    PreviewFileFormat = (2, 200) => {
        name: "ObjectData Preview File Format",
        description: "ObjectData Preview File Format - 2 byte binary number",
    },
    PreviewFileFormatVersion = (2, 201) => {
        name: "ObjectData Preview File Format Version",
        description: "ObjectData Preview File Format Version - 2 byte binary number",
    },
    PreviewData = (2, 202) => {
        name: "ObjectData Preview Data",
        description: "ObjectData Preview Data - Max 256000 binary bytes",
    },

    //
    // pre-objectdata descriptor record
    SizeMode = (7, 10) => {
        name: "Size Mode",
        description: "Size Mode - 1 numeric character",
    },
    MaxSubfileSize = (7, 20) => {
        name: "Max Subfile Size",
        description: "Max Subfile Size",
    },
    ObjectDataSizeAnnounced = (7, 90) => {
        name: "ObjectData Size Announced",
        description: "ObjectData Size Announced",
    },
    MaximumObjectDataSize = (7, 95) => {
        name: "Maximum ObjectData Size",
        description: "Maximum ObjectData Size",
    },

    //
    // objectdata record
    Subfile = (8, 10) => {
        name: "Subfile",
        description: "Subfile",
    },

    //
    // post-objectdata descriptor record
    ConfirmedObjectDataSize = (9, 10) => {
        name: "Confirmed ObjectData Size",
        description: "Confirmed ObjectData Size",
    },
);

/// Names for the values of dataset `1:20` (File Format), indexed by value.
pub const FILE_FORMATS: &[&str] = &[
    "No ObjectData",
    "IPTC-NAA Digital Newsphoto Parameter Record",
    "IPTC7901 Recommended Message Format",
    "Tagged Image File Format (Adobe/Aldus Image data)",
    "Illustrator (Adobe Graphics data)",
    "AppleSingle (Apple Computer Inc)",
    "NAA 89-3 (ANPA 1312)",
    "MacBinary II",
    "IPTC Unstructured Character Oriented File Format (UCOFF)",
    "United Press International ANPA 1312 variant",
    "United Press International Down-Load Message",
    "JPEG File Interchange (JFIF)",
    "Photo-CD Image-Pac (Eastman Kodak)",
    "Microsoft Bit Mapped Graphics File [*.BMP]",
    "Digital Audio File [*.WAV] (Microsoft & Creative Labs)",
    "Audio plus Moving Video [*.AVI] (Microsoft)",
    "PC DOS/Windows Executable Files [*.COM][*.EXE]",
    "Compressed Binary File [*.ZIP] (PKWare Inc)",
    "Audio Interchange File Format AIFF (Apple Computer Inc)",
    "RIFF Wave (Microsoft Corporation)",
    "Freehand (Macromedia/Aldus)",
    "Hypertext Markup Language - HTML (The Internet Society)",
    "MPEG 2 Audio Layer 2 (Musicom), ISO/IEC",
    "MPEG 2 Audio Layer 3, ISO/IEC",
    "Portable Document File (*.PDF) Adobe",
    "News Industry Text Format (NITF)",
    "Tape Archive (*.TAR)",
    "Tidningarnas Telegrambyrå NITF version (TTNITF DTD)",
    "Ritzaus Bureau NITF version (RBNITF DTD)",
    "Corel Draw [*.CDR]",
];

/// Names for the colour components in dataset `2:130` (Image Type).
pub const IMAGE_TYPES: &[(char, &str)] = &[
    ('M', "Monochrome"),
    ('Y', "Yellow Component"),
    ('A', "Magenta Component"),
    ('C', "Cyan Component"),
    ('K', "Black Component"),
    ('R', "Red Component"),
    ('G', "Green Component"),
    ('B', "Blue Component"),
    ('T', "Text Only"),
    ('F', "Full colour composite, frame sequential"),
    ('L', "Full colour composite, line sequential"),
    ('P', "Full colour composite, pixel sequential"),
    ('S', "Full colour composite, special interleaving"),
];

#[cfg(test)]
mod tests {
    use super::{KnownDataset, RecordClass};

    #[test]
    fn pairs_map_back_to_their_datasets() {
        for dataset in KnownDataset::ALL {
            let pair = (dataset.record_number(), dataset.dataset_number());
            assert_eq!(KnownDataset::try_from(pair), Ok(*dataset));
        }
    }

    #[test]
    fn expiration_time_has_its_own_slot() {
        assert_eq!(
            KnownDataset::try_from((2, 35)),
            Ok(KnownDataset::ReleaseTime)
        );
        assert_eq!(
            KnownDataset::try_from((2, 38)),
            Ok(KnownDataset::ExpirationTime)
        );
    }

    #[test]
    fn every_dataset_belongs_to_a_record_class() {
        for dataset in KnownDataset::ALL {
            assert!(RecordClass::new(dataset.record_number()).is_some());
        }
    }
}
