//! Names for JPEG marker codes.
//!
//! ## For contributors
//!
//! To add a marker, give it a line in the `make_marker_list!` call below:
//!
//! ```no_compile
//! make_marker_list!(
//!     // ...snip!
//!     YourMarker = 0xAB => {
//!         name: "YRM",
//!         description: "Your Marker (YRM)",
//!     },
//! );
//! ```

/// Creates the [`KnownMarker`] enum from a list of marker codes.
macro_rules! make_marker_list {
    ($( $marker_ident:ident = $marker_code:literal => {
        name: $marker_name:expr,
        description: $marker_desc:expr,
    }, )+) => {
        /// A list of all known JPEG marker codes.
        ///
        /// The discriminant is the code byte that follows `0xFF` on the wire.
        #[repr(u8)]
        #[non_exhaustive]
        #[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
        pub enum KnownMarker {
            $(
              $marker_ident = $marker_code,
            )+
        }

        impl core::convert::TryFrom<u8> for KnownMarker {
            type Error = ();

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $marker_code => Ok(KnownMarker::$marker_ident), )+
                    _ => Err(()),
                }
            }
        }

        impl KnownMarker {
            /// Every known marker, in table order.
            pub const ALL: &'static [KnownMarker] = &[ $( KnownMarker::$marker_ident, )+ ];

            /// Returns the marker's code byte.
            ///
            /// ```
            /// use jpeg_iim_types::jpeg::KnownMarker;
            ///
            /// assert_eq!(KnownMarker::Com.code(), 0xFE);
            /// ```
            pub const fn code(&self) -> u8 {
                *self as u8
            }

            /// Grabs the marker's short name, like `APP13`.
            ///
            /// ```
            /// use jpeg_iim_types::jpeg::KnownMarker;
            ///
            /// assert_eq!(KnownMarker::App13.name(), "APP13");
            /// ```
            pub const fn name(&self) -> &'static str {
                match self {
                    $( KnownMarker::$marker_ident => $marker_name, )+
                }
            }

            /// A human-readable description of the marker.
            pub const fn description(&self) -> &'static str {
                match self {
                    $( KnownMarker::$marker_ident => $marker_desc, )+
                }
            }
        }
    };
}

make_marker_list!(
    Tem = 0x01 => {
        name: "TEM",
        description: "For temp private use arith code (TEM)",
    },
    Res = 0x02 => {
        name: "RES",
        description: "Reserved (RES)",
    },

    //
    // start of frame, huffman
    Sof0 = 0xC0 => {
        name: "SOF0",
        description: "Start Of Frame (SOF) Huffman - Baseline DCT",
    },
    Sof1 = 0xC1 => {
        name: "SOF1",
        description: "Start Of Frame (SOF) Huffman - Extended sequential DCT",
    },
    Sof2 = 0xC2 => {
        name: "SOF2",
        description: "Start Of Frame Huffman - Progressive DCT (SOF2)",
    },
    Sof3 = 0xC3 => {
        name: "SOF3",
        description: "Start Of Frame Huffman - Spatial (sequential) lossless (SOF3)",
    },
    Dht = 0xC4 => {
        name: "DHT",
        description: "Define Huffman Table(s) (DHT)",
    },
    Sof5 = 0xC5 => {
        name: "SOF5",
        description: "Start Of Frame Huffman - Differential sequential DCT (SOF5)",
    },
    Sof6 = 0xC6 => {
        name: "SOF6",
        description: "Start Of Frame Huffman - Differential progressive DCT (SOF6)",
    },
    Sof7 = 0xC7 => {
        name: "SOF7",
        description: "Start Of Frame Huffman - Differential spatial (SOF7)",
    },

    //
    // start of frame, arithmetic
    Jpg = 0xC8 => {
        name: "JPG",
        description: "Start Of Frame Arithmetic - Reserved for JPEG extensions (JPG)",
    },
    Sof9 = 0xC9 => {
        name: "SOF9",
        description: "Start Of Frame Arithmetic - Extended sequential DCT (SOF9)",
    },
    Sof10 = 0xCA => {
        name: "SOF10",
        description: "Start Of Frame Arithmetic - Progressive DCT (SOF10)",
    },
    Sof11 = 0xCB => {
        name: "SOF11",
        description: "Start Of Frame Arithmetic - Spatial (sequential) lossless (SOF11)",
    },
    Dac = 0xCC => {
        name: "DAC",
        description: "Define Arithmetic coding conditioning(s) (DAC)",
    },
    Sof13 = 0xCD => {
        name: "SOF13",
        description: "Start Of Frame Arithmetic - Differential sequential DCT (SOF13)",
    },
    Sof14 = 0xCE => {
        name: "SOF14",
        description: "Start Of Frame Arithmetic - Differential progressive DCT (SOF14)",
    },
    Sof15 = 0xCF => {
        name: "SOF15",
        description: "Start Of Frame Arithmetic - Differential spatial (SOF15)",
    },

    //
    // restarts
    Rst0 = 0xD0 => {
        name: "RST0",
        description: "Restart with modulo 8 count 0 (RST0)",
    },
    Rst1 = 0xD1 => {
        name: "RST1",
        description: "Restart with modulo 8 count 1 (RST1)",
    },
    Rst2 = 0xD2 => {
        name: "RST2",
        description: "Restart with modulo 8 count 2 (RST2)",
    },
    Rst3 = 0xD3 => {
        name: "RST3",
        description: "Restart with modulo 8 count 3 (RST3)",
    },
    Rst4 = 0xD4 => {
        name: "RST4",
        description: "Restart with modulo 8 count 4 (RST4)",
    },
    Rst5 = 0xD5 => {
        name: "RST5",
        description: "Restart with modulo 8 count 5 (RST5)",
    },
    Rst6 = 0xD6 => {
        name: "RST6",
        description: "Restart with modulo 8 count 6 (RST6)",
    },
    Rst7 = 0xD7 => {
        name: "RST7",
        description: "Restart with modulo 8 count 7 (RST7)",
    },

    //
    // image structure
    Soi = 0xD8 => {
        name: "SOI",
        description: "Start of Image (SOI)",
    },
    Eoi = 0xD9 => {
        name: "EOI",
        description: "End of Image (EOI)",
    },
    Sos = 0xDA => {
        name: "SOS",
        description: "Start of Scan (SOS)",
    },
    Dqt = 0xDB => {
        name: "DQT",
        description: "Define quantization Table(s) (DQT)",
    },
    Dnl = 0xDC => {
        name: "DNL",
        description: "Define Number of Lines (DNL)",
    },
    Dri = 0xDD => {
        name: "DRI",
        description: "Define Restart Interval (DRI)",
    },
    Dhp = 0xDE => {
        name: "DHP",
        description: "Define Hierarchical progression (DHP)",
    },
    Exp = 0xDF => {
        name: "EXP",
        description: "Expand Reference Component(s) (EXP)",
    },

    //
    // application fields
    App0 = 0xE0 => {
        name: "APP0",
        description: "Application Field 0 (APP0) - usually JFIF or JFXX",
    },
    App1 = 0xE1 => {
        name: "APP1",
        description: "Application Field 1 (APP1) - usually EXIF or XMP/RDF",
    },
    App2 = 0xE2 => {
        name: "APP2",
        description: "Application Field 2 (APP2) - usually Flashpix",
    },
    App3 = 0xE3 => {
        name: "APP3",
        description: "Application Field 3 (APP3)",
    },
    App4 = 0xE4 => {
        name: "APP4",
        description: "Application Field 4 (APP4)",
    },
    App5 = 0xE5 => {
        name: "APP5",
        description: "Application Field 5 (APP5)",
    },
    App6 = 0xE6 => {
        name: "APP6",
        description: "Application Field 6 (APP6)",
    },
    App7 = 0xE7 => {
        name: "APP7",
        description: "Application Field 7 (APP7)",
    },
    App8 = 0xE8 => {
        name: "APP8",
        description: "Application Field 8 (APP8)",
    },
    App9 = 0xE9 => {
        name: "APP9",
        description: "Application Field 9 (APP9)",
    },
    App10 = 0xEA => {
        name: "APP10",
        description: "Application Field 10 (APP10)",
    },
    App11 = 0xEB => {
        name: "APP11",
        description: "Application Field 11 (APP11)",
    },
    App12 = 0xEC => {
        name: "APP12",
        description: "Application Field 12 (APP12) - usually [picture info]",
    },
    App13 = 0xED => {
        name: "APP13",
        description: "Application Field 13 (APP13) - usually photoshop IRB / IPTC",
    },
    App14 = 0xEE => {
        name: "APP14",
        description: "Application Field 14 (APP14)",
    },
    App15 = 0xEF => {
        name: "APP15",
        description: "Application Field 15 (APP15)",
    },

    //
    // extensions
    Jpg0 = 0xF0 => {
        name: "JPG0",
        description: "Reserved for JPEG extensions (JPG0)",
    },
    Jpg1 = 0xF1 => {
        name: "JPG1",
        description: "Reserved for JPEG extensions (JPG1)",
    },
    Jpg2 = 0xF2 => {
        name: "JPG2",
        description: "Reserved for JPEG extensions (JPG2)",
    },
    Jpg3 = 0xF3 => {
        name: "JPG3",
        description: "Reserved for JPEG extensions (JPG3)",
    },
    Jpg4 = 0xF4 => {
        name: "JPG4",
        description: "Reserved for JPEG extensions (JPG4)",
    },
    Jpg5 = 0xF5 => {
        name: "JPG5",
        description: "Reserved for JPEG extensions (JPG5)",
    },
    Jpg6 = 0xF6 => {
        name: "JPG6",
        description: "Reserved for JPEG extensions (JPG6)",
    },
    Jpg7 = 0xF7 => {
        name: "JPG7",
        description: "Reserved for JPEG extensions (JPG7)",
    },
    Jpg8 = 0xF8 => {
        name: "JPG8",
        description: "Reserved for JPEG extensions (JPG8)",
    },
    Jpg9 = 0xF9 => {
        name: "JPG9",
        description: "Reserved for JPEG extensions (JPG9)",
    },
    Jpg10 = 0xFA => {
        name: "JPG10",
        description: "Reserved for JPEG extensions (JPG10)",
    },
    Jpg11 = 0xFB => {
        name: "JPG11",
        description: "Reserved for JPEG extensions (JPG11)",
    },
    Jpg12 = 0xFC => {
        name: "JPG12",
        description: "Reserved for JPEG extensions (JPG12)",
    },
    Jpg13 = 0xFD => {
        name: "JPG13",
        description: "Reserved for JPEG extensions (JPG13)",
    },
    Com = 0xFE => {
        name: "COM",
        description: "Comment (COM)",
    },
);
