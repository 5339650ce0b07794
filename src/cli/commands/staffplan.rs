use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::insert_staffplan;
use crate::db::{DbPool, init_db};
use crate::errors::AppResult;
use crate::ingest::read_staffplan_csv;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Staffplan { file } = cmd {
        let path = expand_tilde(file);
        info(format!("Importing staffplan rows from {}", path.display()));

        let rows = read_staffplan_csv(Path::new(&path))?;

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        for row in &rows {
            insert_staffplan(&mut pool, row)?;
        }

        success(format!("Imported {} staffplan rows", rows.len()));
    }
    Ok(())
}
