//! Star system catalogue
//!
//! [`SystemManager`] owns the in-memory list of systems and the pointer to the
//! current one. Every change that should survive a restart is written through
//! to the [`SystemStore`]; store failures are logged and never undo the
//! in-memory change.

pub mod error;
pub mod logging;
pub mod manager;
pub mod settings;

pub use error::ManagerError;
pub use manager::{Imported, SystemManager};
pub use settings::{ManagerSettings, SettingsError};

// Re-export the collaborating crates' main types
pub use star_system::{DEFAULT_SYSTEM_NAME, Planet, Star, StarSystem};
pub use system_csv::{CsvError, SkippedRow};
pub use system_generator::{DEFAULT_MAX_PLANETS, DEFAULT_MIN_PLANETS, GeneratorError, SystemGenerator};
pub use system_store::{StoreError, StoreSnapshot, SystemStore};
