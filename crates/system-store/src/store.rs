//! SQLite-backed system store

use std::fs;
use std::path::Path;

use rusqlite::{Connection, params};
use tracing::{debug, info};

use star_system::StarSystem;

use crate::error::StoreError;
use crate::rows::{PlanetRow, StoreSnapshot, SystemRow};
use crate::schema;

/// Durable catalogue of star systems, keyed by system name
pub struct SystemStore {
    conn: Connection,
}

impl SystemStore {
    /// Open (or create) the database file at `path`, creating parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path)?;
        info!("Opened system store at {}", path.display());
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Create both tables if they do not exist yet
    ///
    /// A `planets` table written before orbit slots were stored gets the
    /// `slot` column added; its rows keep their row id order.
    pub fn create_tables(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(schema::CREATE_TABLES)?;
        if !self.has_slot_column()? {
            self.conn.execute_batch(schema::ADD_SLOT_COLUMN)?;
            info!("Added slot column to planets table");
        }
        Ok(())
    }

    fn has_slot_column(&self) -> Result<bool, StoreError> {
        let mut columns = self.conn.prepare(schema::PLANET_TABLE_INFO)?;
        let names = columns
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names.iter().any(|name| name == "slot"))
    }

    /// Replace every row stored under `system.name` with the given system
    ///
    /// Runs in one transaction: either the old rows are gone and the new ones
    /// are in place, or nothing changed.
    pub fn upsert_system(&mut self, system: &StarSystem) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute(schema::DELETE_SYSTEM, params![system.name])?;
        tx.execute(schema::DELETE_PLANETS, params![system.name])?;

        let row = SystemRow::from_system(system);
        tx.execute(
            schema::INSERT_SYSTEM,
            params![
                row.name,
                row.star_name,
                row.star_type,
                row.star_temperature,
                row.star_radius,
                row.planet_count
            ],
        )?;

        {
            let mut insert = tx.prepare(schema::INSERT_PLANET)?;
            for planet in &system.planets {
                let p = PlanetRow::from_planet(&system.name, planet);
                insert.execute(params![
                    p.system_name,
                    p.name,
                    p.temperature_c,
                    p.size_earth,
                    p.mass_earth,
                    p.orbital_radius_au,
                    p.orbital_period_days,
                    p.planet_type,
                    p.atmosphere,
                    p.life_probability,
                    p.satellites,
                    p.image_path,
                    p.description,
                    p.slot
                ])?;
            }
        }

        tx.commit()?;
        debug!(
            "Saved system '{}' with {} planets",
            system.name,
            system.planet_count()
        );
        Ok(())
    }

    /// Every stored system in insertion order, planets ordered by slot
    pub fn load_all(&self) -> Result<Vec<StarSystem>, StoreError> {
        let system_rows = self.system_rows()?;
        let sql = schema::select_planets_of_system();
        let mut select_planets = self.conn.prepare(&sql)?;

        let mut systems = Vec::with_capacity(system_rows.len());
        for row in system_rows {
            let planets = select_planets
                .query_map(params![row.name], PlanetRow::from_sql)?
                .map(|planet| planet.map(|p| p.to_planet()))
                .collect::<Result<Vec<_>, _>>()?;
            systems.push(StarSystem::new(row.name.clone(), row.to_star(), planets));
        }

        debug!("Loaded {} systems from store", systems.len());
        Ok(systems)
    }

    /// Delete every row in both tables
    pub fn clear_all(&self) -> Result<(), StoreError> {
        self.conn.execute(schema::CLEAR_PLANETS, [])?;
        self.conn.execute(schema::CLEAR_SYSTEMS, [])?;
        info!("Cleared system store");
        Ok(())
    }

    pub fn system_count(&self) -> Result<usize, StoreError> {
        let count: i64 = self.conn.query_row(schema::COUNT_SYSTEMS, [], |r| r.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Number of planet rows stored under `system_name`
    pub fn planet_count(&self, system_name: &str) -> Result<usize, StoreError> {
        let count: i64 =
            self.conn
                .query_row(schema::COUNT_PLANETS, params![system_name], |r| r.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Raw contents of both tables
    pub fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        let sql = schema::select_all_planets();
        let mut select = self.conn.prepare(&sql)?;
        let planets = select
            .query_map([], PlanetRow::from_sql)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StoreSnapshot {
            systems: self.system_rows()?,
            planets,
        })
    }

    fn system_rows(&self) -> Result<Vec<SystemRow>, StoreError> {
        let mut select = self.conn.prepare(schema::SELECT_SYSTEMS)?;
        let rows = select
            .query_map([], SystemRow::from_sql)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Underlying connection, for inspection in tests
    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
