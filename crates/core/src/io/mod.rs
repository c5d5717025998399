//! Tabular resource loading
//!
//! Reads comma separated tables (header line + value lines) out of a resource
//! folder into key-value rows. This is a thin I/O wrapper with no interaction
//! with the kinematic solvers.

pub mod csv_reader;
pub mod resources;

pub use csv_reader::{read_csv_resource, read_csv_str, CsvError, CsvRow, CsvValue};
pub use resources::{DirectoryResources, ResourceLoader};
