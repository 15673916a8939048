//! Read/write distance table JSON files.
//!
//! A distance table is the portable result of `cosmo table`:
//! - the cosmology and its resolved curvature branch
//! - the numerical settings used
//! - one row per scale factor
//!
//! The schema is defined by `domain::DistanceTable`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{Cosmology, DistanceConfig, DistanceRow, DistanceTable};
use crate::error::AppError;

/// Assemble a table from evaluated rows.
pub fn build_table(
    cosmo: &Cosmology,
    config: &DistanceConfig,
    rows: Vec<DistanceRow>,
) -> Result<DistanceTable, AppError> {
    Ok(DistanceTable {
        tool: "cosmo".to_string(),
        generated: Utc::now(),
        cosmology: cosmo.clone(),
        curvature: cosmo.curvature()?,
        config: *config,
        rows,
    })
}

/// Write a distance table JSON file.
pub fn write_table_json(path: &Path, table: &DistanceTable) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create table JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, table)
        .map_err(|e| AppError::new(2, format!("Failed to write table JSON: {e}")))?;
    Ok(())
}

/// Read a distance table JSON file.
pub fn read_table_json(path: &Path) -> Result<DistanceTable, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open table JSON '{}': {e}", path.display())))?;
    let table: DistanceTable =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid table JSON: {e}")))?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::DistanceCalculator;
    use crate::domain::{Curvature, Preset};

    #[test]
    fn table_roundtrips_through_disk() {
        let calc: DistanceCalculator = DistanceCalculator::default();
        let cosmo = Preset::Open.cosmology();
        let rows = calc.evaluate_many(&cosmo, &[1.0, 0.5]).unwrap();
        let table = build_table(&cosmo, calc.config(), rows).unwrap();
        assert_eq!(table.curvature, Curvature::Open);

        let path = std::env::temp_dir().join(format!("cosmo_table_{}.json", std::process::id()));
        write_table_json(&path, &table).unwrap();
        let back = read_table_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back.rows, table.rows);
        assert_eq!(back.cosmology, cosmo);
        assert_eq!(back.generated, table.generated);
    }

    #[test]
    fn build_rejects_invalid_curvature() {
        let cosmo = Preset::Planck15.cosmology().with_curvature_indicator(5, 0.0);
        let err = build_table(&cosmo, &DistanceConfig::default(), Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
