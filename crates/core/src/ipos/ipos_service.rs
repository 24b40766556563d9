use log::debug;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::csv_import::parse_ipo_csv;
use super::ipos_errors::IpoError;
use super::ipos_model::Ipo;
use super::ipos_traits::{IpoRepositoryTrait, IpoServiceTrait};
use crate::Result;

/// Service for reading and reloading IPO records
pub struct IpoService {
    repository: Arc<dyn IpoRepositoryTrait>,
}

impl IpoService {
    /// Creates a new IpoService instance with an injected repository
    pub fn new(repository: Arc<dyn IpoRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl IpoServiceTrait for IpoService {
    fn get_ipos(&self) -> Result<Vec<Ipo>> {
        self.repository.list()
    }

    fn reload_from_csv(&self, file_path: &Path) -> Result<usize> {
        // The previous snapshot is cleared first and the deletion commits on
        // its own; a reload that fails past this point leaves the table
        // empty until the next successful run.
        let deleted = self.repository.delete_all()?;
        debug!("Cleared {} existing IPO records", deleted);

        let content = fs::read(file_path)
            .map_err(|e| IpoError::FileRead(format!("{}: {}", file_path.display(), e)))?;
        let records = parse_ipo_csv(&content)?;
        let accepted = records.len();

        self.repository.insert_batch(records)?;
        debug!(
            "Loaded {} IPO records from {}",
            accepted,
            file_path.display()
        );
        Ok(accepted)
    }
}
