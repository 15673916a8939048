//! Export distance rows to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{Cosmology, DistanceRow};
use crate::error::AppError;

/// Write distance rows to a CSV file.
pub fn write_rows_csv(path: &Path, rows: &[DistanceRow], cosmo: &Cosmology) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_rows(&mut file, rows, cosmo)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV: {e}")))
}

fn write_rows<W: Write>(out: &mut W, rows: &[DistanceRow], cosmo: &Cosmology) -> std::io::Result<()> {
    writeln!(out, "a,z,chi_mpc_h,f_k_mpc_h,d_a_mpc_h,k,omega_k")?;
    for r in rows {
        writeln!(
            out,
            "{:.10},{:.10},{:.10},{:.10},{:.10},{},{}",
            r.a, r.z, r.chi, r.f_k, r.d_a, cosmo.k, cosmo.omega_k
        )?;
    }
    Ok(())
}
