use thiserror::Error;

use system_csv::CsvError;
use system_generator::GeneratorError;
use system_store::StoreError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("no system at index {index} ({len} systems loaded)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no planet at index {index} ({len} planets in the current system)")]
    PlanetIndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Csv(#[from] CsvError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
