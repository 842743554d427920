//! Dataset sinks: the CSV file every run writes and the optional SQLite copy.

pub mod csv;
pub mod db;
