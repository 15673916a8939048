//! Input/output helpers.
//!
//! - cosmology JSON read/write (`cosmology`)
//! - distance rows to CSV (`export`)
//! - distance table JSON read/write (`table`)

pub mod cosmology;
pub mod export;
pub mod table;

pub use cosmology::*;
pub use export::*;
pub use table::*;
