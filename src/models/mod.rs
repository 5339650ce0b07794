pub mod entry;
pub mod staffplan;

pub use entry::{Provenance, TimeEntry};
pub use staffplan::StaffplanOverride;
