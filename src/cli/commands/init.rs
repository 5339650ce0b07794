use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{DbPool, init_db};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let db_path = match &cli.db {
        Some(custom) => custom.clone(),
        None => Config::load().database,
    };

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;
    success(format!("Database initialized at {}", db_path));
    Ok(())
}
