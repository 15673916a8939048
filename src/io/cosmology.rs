//! Read/write cosmology JSON files.
//!
//! The file holds raw parameters (`CosmologyParams`); `k` and `sqrtk` are always
//! re-derived on load so a file cannot carry an inconsistent curvature sign.

use std::fs::File;
use std::path::Path;

use crate::domain::Cosmology;
use crate::error::AppError;

/// Read a cosmology JSON file.
pub fn read_cosmology_json(path: &Path) -> Result<Cosmology, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open cosmology JSON '{}': {e}", path.display())))?;
    let cosmo: Cosmology = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid cosmology JSON '{}': {e}", path.display())))?;
    Ok(cosmo)
}

/// Write a cosmology JSON file.
pub fn write_cosmology_json(path: &Path, cosmo: &Cosmology) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create cosmology JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, cosmo)
        .map_err(|e| AppError::new(2, format!("Failed to write cosmology JSON: {e}")))?;
    Ok(())
}
