pub mod collate;
pub mod date;
pub mod path;
pub mod time;

pub use collate::compare_de;
pub use time::minutes_to_hhmm;
