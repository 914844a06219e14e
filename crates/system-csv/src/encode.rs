//! Writing systems to CSV

use std::fs;
use std::path::Path;

use tracing::info;

use planetary::Planet;
use star_system::StarSystem;

use crate::error::CsvError;
use crate::record::join_fields;
use crate::{BOM, PLANET_HEADER};

/// Render a system in the CSV layout, `\n` line endings, leading BOM
pub fn encode(system: &StarSystem) -> String {
    let star = &system.star;
    let mut lines = vec![
        join_fields(["SystemName", system.name.as_str()]),
        join_fields(["StarName", star.name.as_str()]),
        join_fields(["StarType", star.star_type.label()]),
        join_fields(["StarTempK".to_string(), star.temperature_k().to_string()]),
        join_fields([
            "StarRadiusSolar".to_string(),
            star.radius_solar().to_string(),
        ]),
        join_fields(PLANET_HEADER),
    ];
    lines.extend(system.planets.iter().map(planet_line));

    let mut text = String::from(BOM);
    for line in lines {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

fn planet_line(planet: &Planet) -> String {
    join_fields([
        planet.name.clone(),
        format!("{:.2}", planet.temperature_c()),
        format!("{:.2}", planet.size_earth()),
        format!("{:.2}", planet.mass_earth()),
        format!("{:.3}", planet.orbital_radius_au()),
        format!("{:.1}", planet.orbital_period_days()),
        planet.planet_type.label().to_string(),
        planet.atmosphere.label().to_string(),
        format!("{:.2}", planet.life_probability),
        planet.satellites.to_string(),
        planet.image_label().to_string(),
        planet.description.clone(),
    ])
}

/// Write `encode(system)` to `path`, replacing any existing file
pub fn write_to_path<P: AsRef<Path>>(system: &StarSystem, path: P) -> Result<(), CsvError> {
    let path = path.as_ref();
    fs::write(path, encode(system)).map_err(|source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Exported system '{}' to {}", system.name, path.display());
    Ok(())
}
