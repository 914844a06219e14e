//! Plain-text output

use std::fmt::Write;

use system_manager::{StarSystem, StoreSnapshot, SystemManager};

/// One line per system, current one marked with `*`
pub fn system_list(manager: &SystemManager) -> String {
    let mut out = String::new();
    for (index, system) in manager.systems().iter().enumerate() {
        let marker = if index == manager.current_index() { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {index:>3}  {}  ({} planets, {})",
            system.name,
            system.planet_count(),
            system.star.star_type
        );
    }
    out
}

/// Star card followed by every planet card
pub fn system_details(system: &StarSystem) -> String {
    let mut out = system.star_info();
    if let Some(average) = system.average_temperature() {
        let _ = write!(
            out,
            "\nAverage planet temperature: {:.1} °C",
            average.to_celsius()
        );
    }
    let _ = write!(out, "\nSatellites: {}", system.total_satellites());
    for planet in &system.planets {
        let _ = write!(out, "\n\n[{}]\n{planet}", planet.slot);
    }
    out
}

pub fn planet_card(system: &StarSystem, index: usize) -> String {
    match system.planet(index) {
        Some(planet) => planet.to_string(),
        None => format!("No planet #{index} in {}", system.name),
    }
}

/// Both tables, one row per line
pub fn snapshot(snapshot: &StoreSnapshot) -> String {
    let mut out = String::from("systems:\n");
    for row in &snapshot.systems {
        let _ = writeln!(
            out,
            "  {:>4}  {}  star={} type={} temp={} radius={} planets={}",
            row.id,
            row.name,
            row.star_name,
            row.star_type,
            row.star_temperature,
            row.star_radius,
            row.planet_count
        );
    }
    out.push_str("planets:\n");
    for row in &snapshot.planets {
        let _ = writeln!(
            out,
            "  {:>4}  {}/{}  slot={} type={} atmosphere={} t={}°C r={}AU image={}",
            row.id,
            row.system_name,
            row.name,
            row.slot,
            row.planet_type,
            row.atmosphere,
            row.temperature_c,
            row.orbital_radius_au,
            row.image_path.as_deref().unwrap_or("-")
        );
    }
    out
}
