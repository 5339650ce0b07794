pub mod csv_source;

pub use csv_source::{read_entries_csv, read_staffplan_csv};
