use std::{fs, path::PathBuf};

use crate::domain::Car;
use crate::errors::CatalogError;

use super::CarCatalog;

/// Reads a JSON array of car rows from disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CarCatalog for JsonFileCatalog {
    fn fetch_all(&self) -> Result<Vec<Car>, CatalogError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
