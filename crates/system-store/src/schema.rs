//! Table definitions and statements

pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS systems (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE,
    star_name TEXT,
    star_type TEXT,
    star_temperature REAL,
    star_radius REAL,
    planet_count INTEGER
);
CREATE TABLE IF NOT EXISTS planets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    system_name TEXT,
    name TEXT,
    temperature_c REAL,
    size_earth REAL,
    mass_earth REAL,
    orbital_radius_au REAL,
    orbital_period_days REAL,
    planet_type TEXT,
    atmosphere TEXT,
    life_probability REAL,
    satellites INTEGER,
    image_path TEXT,
    description TEXT,
    slot INTEGER NOT NULL DEFAULT 0
);
";

pub const PLANET_TABLE_INFO: &str = "PRAGMA table_info(planets)";
pub const ADD_SLOT_COLUMN: &str = "ALTER TABLE planets ADD COLUMN slot INTEGER NOT NULL DEFAULT 0";

pub const DELETE_SYSTEM: &str = "DELETE FROM systems WHERE name = ?1";
pub const DELETE_PLANETS: &str = "DELETE FROM planets WHERE system_name = ?1";

pub const INSERT_SYSTEM: &str = "
INSERT INTO systems (name, star_name, star_type, star_temperature, star_radius, planet_count)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

pub const INSERT_PLANET: &str = "
INSERT INTO planets (
    system_name, name, temperature_c, size_earth, mass_earth, orbital_radius_au,
    orbital_period_days, planet_type, atmosphere, life_probability, satellites,
    image_path, description, slot
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)";

pub const SELECT_SYSTEMS: &str = "
SELECT id, name, star_name, star_type, star_temperature, star_radius, planet_count
FROM systems ORDER BY id";

const PLANET_COLUMNS: &str = "
SELECT id, system_name, name, temperature_c, size_earth, mass_earth, orbital_radius_au,
       orbital_period_days, planet_type, atmosphere, life_probability, satellites,
       image_path, description, slot
FROM planets";

pub fn select_planets_of_system() -> String {
    format!("{PLANET_COLUMNS} WHERE system_name = ?1 ORDER BY slot, id")
}

pub fn select_all_planets() -> String {
    format!("{PLANET_COLUMNS} ORDER BY id")
}

pub const CLEAR_SYSTEMS: &str = "DELETE FROM systems";
pub const CLEAR_PLANETS: &str = "DELETE FROM planets";

pub const COUNT_SYSTEMS: &str = "SELECT COUNT(*) FROM systems";
pub const COUNT_PLANETS: &str = "SELECT COUNT(*) FROM planets WHERE system_name = ?1";
