//! Star system CSV files
//!
//! A file holds exactly one system: five `key;value` lines describing the
//! system and its star, a column header, then one line per planet:
//!
//! ```text
//! SystemName;Kepler-42
//! StarName;Vega
//! StarType;white dwarf
//! StarTempK;9602
//! StarRadiusSolar;2.36
//! #PlanetName;Temperature_C;Size_Earth;...;Image_Path;Description
//! Ari-I12;283.40;1.25;2.10;0.400;92.3;rocky;CO2;12.50;2;img/a.png;A solid planet...
//! ```
//!
//! Files start with a UTF-8 byte order mark. The header names a `Sat_Names`
//! column that planet lines never carry, so the image path is the 11th field.

pub mod decode;
pub mod encode;
pub mod error;
pub mod record;

pub use decode::{CsvImport, SkipReason, SkippedRow, parse, parse_report, read_from_path};
pub use encode::{encode, write_to_path};
pub use error::CsvError;

/// Field separator
pub const DELIMITER: char = ';';

/// Byte order mark written at the start of every file
pub const BOM: char = '\u{FEFF}';

/// Column header line, kept verbatim for compatibility with existing files
pub const PLANET_HEADER: [&str; 13] = [
    "#PlanetName",
    "Temperature_C",
    "Size_Earth",
    "Mass_Earth",
    "Orbital_Radius_AU",
    "Orbital_Period_Days",
    "Planet_Type",
    "Atmosphere",
    "Life_Probability",
    "Satellites",
    "Sat_Names",
    "Image_Path",
    "Description",
];

/// Lines before the first planet line
pub const PREAMBLE_LINES: usize = 6;

/// Planet lines with fewer fields are skipped
pub const MIN_PLANET_FIELDS: usize = 10;

#[cfg(test)]
mod decode_test;
#[cfg(test)]
mod encode_test;
