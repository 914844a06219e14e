//! Reading systems from CSV
//!
//! Structural problems (too few lines, a malformed star value) reject the
//! whole file. A bad planet line only drops that line; the rest of the file is
//! still imported and the dropped lines are reported in [`CsvImport`].

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{info, warn};
use units::{Length, Mass, Temperature, Time};

use planetary::{Atmosphere, Planet, PlanetError, PlanetType};
use star_system::{Star, StarSystem, StarType};

use crate::error::CsvError;
use crate::record::split_records;
use crate::{BOM, MIN_PLANET_FIELDS, PREAMBLE_LINES};

const DEFAULT_SYSTEM_NAME: &str = "unnamed system";
const DEFAULT_STAR_NAME: &str = "Star";
const DEFAULT_STAR_TYPE: &str = "unknown type";
const DEFAULT_STAR_TEMPERATURE_K: f64 = 5778.0;
const DEFAULT_STAR_RADIUS: f64 = 1.0;

/// Why a planet line was dropped
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    TooFewFields { found: usize },
    InvalidNumber { column: &'static str, value: String },
    Invalid(PlanetError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields { found } => {
                write!(f, "{found} fields, at least {MIN_PLANET_FIELDS} required")
            }
            Self::InvalidNumber { column, value } => {
                write!(f, "{column} is not a number: {value:?}")
            }
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

/// A dropped planet line
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based position among the non-empty lines of the file
    pub line: usize,
    pub fields: Vec<String>,
    pub reason: SkipReason,
}

/// Parsed system together with the planet lines that were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct CsvImport {
    pub system: StarSystem,
    pub skipped: Vec<SkippedRow>,
}

/// Parse CSV text into a system, dropping malformed planet lines
pub fn parse(text: &str) -> Result<StarSystem, CsvError> {
    parse_report(text).map(|import| import.system)
}

/// Parse CSV text, also reporting which planet lines were dropped and why
pub fn parse_report(text: &str) -> Result<CsvImport, CsvError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let records = split_records(text);
    if records.len() < PREAMBLE_LINES {
        return Err(CsvError::TooFewLines {
            found: records.len(),
        });
    }

    let name = header_text(&records[0], DEFAULT_SYSTEM_NAME);
    let star_name = header_text(&records[1], DEFAULT_STAR_NAME);
    let star_type = header_text(&records[2], DEFAULT_STAR_TYPE);
    let temperature_k = header_number(&records[3], "StarTempK", DEFAULT_STAR_TEMPERATURE_K)?;
    let radius = header_number(&records[4], "StarRadiusSolar", DEFAULT_STAR_RADIUS)?;

    let star = Star::new(
        star_name,
        StarType::from_label(&star_type),
        temperature_k.round().clamp(0.0, f64::from(u32::MAX)) as u32,
        radius,
    );

    let mut planets = Vec::new();
    let mut skipped = Vec::new();
    for (index, fields) in records.iter().enumerate().skip(PREAMBLE_LINES) {
        let slot = u32::try_from(planets.len()).unwrap_or(u32::MAX);
        match parse_planet(fields, slot) {
            Ok(planet) => planets.push(planet),
            Err(reason) => {
                warn!("Skipping CSV line {} ({reason}): {fields:?}", index + 1);
                skipped.push(SkippedRow {
                    line: index + 1,
                    fields: fields.clone(),
                    reason,
                });
            }
        }
    }

    Ok(CsvImport {
        system: StarSystem::new(name, star, planets),
        skipped,
    })
}

/// Read and parse the file at `path`
pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<CsvImport, CsvError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let import = parse_report(&text)?;
    info!(
        "Read system '{}' from {} ({} planets, {} lines skipped)",
        import.system.name,
        path.display(),
        import.system.planet_count(),
        import.skipped.len()
    );
    Ok(import)
}

fn header_text(record: &[String], default: &str) -> String {
    record
        .get(1)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

fn header_number(record: &[String], field: &'static str, default: f64) -> Result<f64, CsvError> {
    match record.get(1) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| CsvError::InvalidHeader {
                field,
                value: value.clone(),
            }),
    }
}

fn number(fields: &[String], index: usize, column: &'static str) -> Result<f64, SkipReason> {
    let value = &fields[index];
    value
        .trim()
        .parse()
        .map_err(|_| SkipReason::InvalidNumber {
            column,
            value: value.clone(),
        })
}

fn parse_planet(fields: &[String], slot: u32) -> Result<Planet, SkipReason> {
    if fields.len() < MIN_PLANET_FIELDS {
        return Err(SkipReason::TooFewFields {
            found: fields.len(),
        });
    }

    let temperature_c = number(fields, 1, "Temperature_C")?;
    let size = number(fields, 2, "Size_Earth")?;
    let mass = number(fields, 3, "Mass_Earth")?;
    let orbit = number(fields, 4, "Orbital_Radius_AU")?;
    let period = number(fields, 5, "Orbital_Period_Days")?;
    let life = number(fields, 8, "Life_Probability")?;
    let satellites = number(fields, 9, "Satellites")?;
    if !(0.0..=f64::from(u32::MAX)).contains(&satellites) {
        return Err(SkipReason::InvalidNumber {
            column: "Satellites",
            value: fields[9].clone(),
        });
    }

    let planet = Planet::new(fields[0].clone(), Length::from_au(orbit))
        .with_slot(slot)
        .with_temperature(Temperature::from_celsius(temperature_c))
        .with_radius(Length::from_earth_radii(size))
        .with_mass(Mass::from_earth_masses(mass))
        .with_orbital_period(Time::from_days(period))
        .with_type(PlanetType::from_label(&fields[6]))
        .with_atmosphere(Atmosphere::from_label(&fields[7]))
        .with_life_probability(life)
        .with_satellites(satellites.trunc() as u32)
        .with_image(fields.get(10).cloned())
        .with_description(fields.get(11).cloned().unwrap_or_default());

    planet.validate().map_err(SkipReason::Invalid)?;
    Ok(planet)
}
