pub mod initialize;
pub mod pool;
pub mod queries;

pub use initialize::init_db;
pub use pool::DbPool;
