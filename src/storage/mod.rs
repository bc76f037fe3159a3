//! Storage layer for layak-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Mutations to a month's ledger are serialized here; the engine
//! never sees anything but read-only snapshots.

pub mod choices;
pub mod file_io;
pub mod ledgers;

pub use choices::ChoiceRepository;
pub use file_io::{read_json, write_json_atomic};
pub use ledgers::LedgerRepository;

use crate::config::paths::LayakPaths;
use crate::error::LayakError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LayakPaths,
    pub ledgers: LedgerRepository,
    pub choices: ChoiceRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LayakPaths) -> Result<Self, LayakError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            ledgers: LedgerRepository::new(paths.ledgers_file()),
            choices: ChoiceRepository::new(paths.choices_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LayakPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LayakError> {
        self.ledgers.load()?;
        self.choices.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), LayakError> {
        self.ledgers.save()?;
        self.choices.save()?;
        Ok(())
    }
}
