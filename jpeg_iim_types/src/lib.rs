//! # `jpeg_iim_types`
//!
//! Lookup tables for `jpeg_iim`.
//!
//! This crate is pure data. It names JPEG marker codes and IPTC-IIM datasets,
//! but it never parses anything itself.
//!
//! The tables come in two shapes:
//!
//! - `const fn` enums ([`jpeg::KnownMarker`], [`iptc::KnownDataset`]), which
//!   are handy when you already know what you're looking for
//! - [`MetadataTable`], an immutable value indexing those enums by their wire
//!   codes. Hand it to whatever needs names!

#![forbid(unsafe_code)]

pub mod iptc;
pub mod jpeg;
pub mod table;

pub use table::MetadataTable;
