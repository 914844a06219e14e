//! Star system persistence
//!
//! Systems live in two SQLite tables, `systems` and `planets`, linked by the
//! system name. There is no foreign key; a save deletes every row for the name
//! and inserts fresh ones inside one transaction.

pub mod error;
pub mod rows;
pub mod schema;
pub mod store;

pub use error::StoreError;
pub use rows::{PlanetRow, StoreSnapshot, SystemRow};
pub use store::SystemStore;
