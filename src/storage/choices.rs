//! Saved future-choice repository
//!
//! Persists at most one chosen future-choice id per month to choices.json.
//! Ids are validated against the fixed catalog on the way in.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LayakError;
use crate::models::Month;
use crate::reference::{find_choice, FutureChoice};

use super::file_io::{read_json, write_json_atomic};

/// Serializable choice data structure: month -> choice id
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ChoiceData {
    choices: HashMap<Month, String>,
}

/// Repository for saved monthly future choices
pub struct ChoiceRepository {
    path: PathBuf,
    data: RwLock<HashMap<Month, String>>,
}

impl ChoiceRepository {
    /// Create a new choice repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load saved choices from disk, dropping ids no longer in the catalog
    pub fn load(&self) -> Result<(), LayakError> {
        let file_data: ChoiceData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for (month, id) in file_data.choices {
            if find_choice(&id).is_some() {
                data.insert(month, id);
            }
        }

        Ok(())
    }

    /// Save choices to disk
    pub fn save(&self) -> Result<(), LayakError> {
        let data = self
            .data
            .read()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = ChoiceData {
            choices: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Set the choice for a month
    pub fn set(&self, month: Month, choice_id: &str) -> Result<(), LayakError> {
        if find_choice(choice_id).is_none() {
            return Err(LayakError::UnknownChoice(choice_id.to_string()));
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(month, choice_id.to_string());
        Ok(())
    }

    /// Get the saved choice for a month, if any
    pub fn get(&self, month: Month) -> Result<Option<&'static FutureChoice>, LayakError> {
        let data = self
            .data
            .read()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&month).and_then(|id| find_choice(id)))
    }

    /// Clear the saved choice for a month; returns whether one existed
    pub fn clear(&self, month: Month) -> Result<bool, LayakError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&month).is_some())
    }

    /// All saved choices, ordered by month
    pub fn get_all(&self) -> Result<Vec<(Month, &'static FutureChoice)>, LayakError> {
        let data = self
            .data
            .read()
            .map_err(|e| LayakError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut all: Vec<_> = data
            .iter()
            .filter_map(|(month, id)| find_choice(id).map(|c| (*month, c)))
            .collect();
        all.sort_by_key(|(month, _)| month.index());
        Ok(all)
    }
}
