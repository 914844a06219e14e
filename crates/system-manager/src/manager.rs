//! The system catalogue and its current-system pointer

use std::path::Path;

use tracing::{debug, info, warn};

use star_system::{StarSystem, solar_system};
use system_csv::SkippedRow;
use system_generator::{DEFAULT_MAX_PLANETS, DEFAULT_MIN_PLANETS, SystemGenerator};
use system_store::{StoreSnapshot, SystemStore};

use crate::error::ManagerError;
use crate::settings::ManagerSettings;

/// Result of a CSV import
#[derive(Debug, Clone, PartialEq)]
pub struct Imported {
    /// Position of the imported system in the catalogue
    pub index: usize,
    /// Planet lines that were dropped while parsing
    pub skipped: Vec<SkippedRow>,
}

/// Ordered catalogue of star systems plus the current selection
///
/// The list is never empty: whenever it would be, the default Solar System is
/// added back. System names are unique within the list.
pub struct SystemManager {
    systems: Vec<StarSystem>,
    current: usize,
    store: SystemStore,
    generator: SystemGenerator,
    planet_range: (usize, usize),
}

impl SystemManager {
    /// Load the catalogue from `store`, seeding the default system if it is empty
    pub fn initialize(store: SystemStore) -> Self {
        Self::with_generator(store, SystemGenerator::from_entropy())
    }

    /// Like [`initialize`](Self::initialize) with a caller-supplied generator
    ///
    /// Default-system images resolve under the generator's image directory.
    pub fn with_generator(store: SystemStore, generator: SystemGenerator) -> Self {
        if let Err(err) = store.create_tables() {
            warn!("Failed to create store tables: {err}");
        }
        let systems = store.load_all().unwrap_or_else(|err| {
            warn!("Failed to read systems from store: {err}");
            Vec::new()
        });

        let mut manager = Self {
            systems,
            current: 0,
            store,
            generator,
            planet_range: (DEFAULT_MIN_PLANETS, DEFAULT_MAX_PLANETS),
        };
        if manager.systems.is_empty() {
            info!("Store is empty, seeding the default system");
            manager.ensure_default();
        } else {
            info!("Loaded {} systems from store", manager.systems.len());
        }
        manager
    }

    /// Open the store and build the generator described by `settings`
    pub fn open(settings: &ManagerSettings) -> Result<Self, ManagerError> {
        let store = SystemStore::open(&settings.database_path)?;
        let generator = match settings.seed {
            Some(seed) => SystemGenerator::from_seed(seed),
            None => SystemGenerator::from_entropy(),
        }
        .with_image_dir(settings.image_dir.clone());

        Ok(Self::with_generator(store, generator)
            .with_planet_range(settings.min_planets, settings.max_planets))
    }

    /// Planet count range used by [`generate_random_system`](Self::generate_random_system)
    pub fn with_planet_range(mut self, min_planets: usize, max_planets: usize) -> Self {
        self.planet_range = (min_planets, max_planets);
        self
    }

    /// Configured `(min, max)` planet count for generated systems
    pub fn planet_range(&self) -> (usize, usize) {
        self.planet_range
    }

    pub fn systems(&self) -> &[StarSystem] {
        &self.systems
    }

    pub fn current(&self) -> &StarSystem {
        &self.systems[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn switch_to(&mut self, index: usize) -> Result<(), ManagerError> {
        if index >= self.systems.len() {
            return Err(ManagerError::IndexOutOfRange {
                index,
                len: self.systems.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Add a system to the catalogue without persisting it
    ///
    /// A system with the same name as an existing entry replaces that entry in
    /// place. Returns the system's index.
    pub fn add_system(&mut self, system: StarSystem, make_current: bool) -> usize {
        let index = match self.systems.iter().position(|s| s.name == system.name) {
            Some(index) => {
                debug!("Replacing system '{}' at index {index}", system.name);
                self.systems[index] = system;
                index
            }
            None => {
                self.systems.push(system);
                self.systems.len() - 1
            }
        };
        if make_current {
            self.current = index;
        }
        index
    }

    /// Generate a system with the configured planet range, persist it and make it current
    pub fn generate_random_system(&mut self) -> Result<usize, ManagerError> {
        let (min, max) = self.planet_range;
        self.generate_random_system_with(min, max)
    }

    pub fn generate_random_system_with(
        &mut self,
        min_planets: usize,
        max_planets: usize,
    ) -> Result<usize, ManagerError> {
        let system = self
            .generator
            .generate_random_system(min_planets, max_planets)?;
        info!(
            "Generated system '{}' with {} planets",
            system.name,
            system.planet_count()
        );
        Ok(self.import_system(system))
    }

    /// Parse a CSV file, then register the system as current
    pub fn import_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<Imported, ManagerError> {
        let import = system_csv::read_from_path(path)?;
        let index = self.import_system(import.system);
        Ok(Imported {
            index,
            skipped: import.skipped,
        })
    }

    /// Persist a system and add it as current
    pub fn import_system(&mut self, system: StarSystem) -> usize {
        persist(&mut self.store, &system);
        self.add_system(system, true)
    }

    /// Write the current system to a CSV file
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), ManagerError> {
        self.export_system_csv(self.current, path)
    }

    pub fn export_system_csv<P: AsRef<Path>>(
        &self,
        index: usize,
        path: P,
    ) -> Result<(), ManagerError> {
        let system = self
            .systems
            .get(index)
            .ok_or(ManagerError::IndexOutOfRange {
                index,
                len: self.systems.len(),
            })?;
        system_csv::write_to_path(system, path)?;
        Ok(())
    }

    /// Drop every in-memory system and start over from the default system
    ///
    /// Only the default system is written back; other stored systems stay in
    /// the store.
    pub fn clear_to_default(&mut self) {
        info!("Clearing system list");
        self.systems.clear();
        self.current = 0;
        self.ensure_default();
    }

    /// Delete everything in the store; the in-memory catalogue is kept
    pub fn clear_store(&mut self) -> Result<(), ManagerError> {
        self.store.clear_all()?;
        Ok(())
    }

    /// Replace the catalogue with the store contents
    ///
    /// An empty (or unreadable) store leaves the catalogue as it is. Returns the
    /// number of systems loaded.
    pub fn reload_from_store(&mut self) -> usize {
        match self.store.load_all() {
            Ok(systems) if !systems.is_empty() => {
                info!("Reloaded {} systems from store", systems.len());
                self.systems = systems;
                self.current = 0;
                self.systems.len()
            }
            Ok(_) => {
                info!("Store is empty, keeping the current list");
                0
            }
            Err(err) => {
                warn!("Failed to reload systems from store: {err}");
                0
            }
        }
    }

    /// Select the default system, creating and persisting it if missing
    pub fn go_to_default(&mut self) -> usize {
        if let Some(index) = self.systems.iter().position(StarSystem::is_default) {
            self.current = index;
            return index;
        }
        let solar = solar_system(self.generator.image_dir());
        self.import_system(solar)
    }

    /// Reassign the image of a planet in the current system and persist it
    pub fn set_planet_image(
        &mut self,
        planet_index: usize,
        image_path: Option<String>,
    ) -> Result<(), ManagerError> {
        let current = self.current;
        let system = &mut self.systems[current];
        let len = system.planet_count();
        let planet = system
            .planet_mut(planet_index)
            .ok_or(ManagerError::PlanetIndexOutOfRange {
                index: planet_index,
                len,
            })?;
        planet.set_image(image_path);

        persist(&mut self.store, &self.systems[current]);
        Ok(())
    }

    /// Raw store contents
    pub fn store_snapshot(&self) -> Result<StoreSnapshot, ManagerError> {
        Ok(self.store.snapshot()?)
    }

    /// Seed the default system if the catalogue is empty
    pub fn ensure_default(&mut self) {
        if !self.systems.is_empty() {
            return;
        }
        let solar = solar_system(self.generator.image_dir());
        persist(&mut self.store, &solar);
        self.systems.push(solar);
        self.current = 0;
    }
}

fn persist(store: &mut SystemStore, system: &StarSystem) {
    if let Err(err) = store.upsert_system(system) {
        warn!("Failed to save system '{}': {err}", system.name);
    }
}
