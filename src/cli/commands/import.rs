use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::insert_entry;
use crate::db::{DbPool, init_db};
use crate::errors::AppResult;
use crate::ingest::read_entries_csv;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        info(format!("Importing entries from {}", path.display()));

        let entries = read_entries_csv(Path::new(&path))?;

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        for entry in &entries {
            insert_entry(&mut pool, entry)?;
        }

        success(format!("Imported {} entries", entries.len()));
    }
    Ok(())
}
