use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::print_entries_table;
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::export::logic::load_reconciled;
use crate::export::parse_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, raw } = cmd {
        let bounds = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_range(p)?),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = load_reconciled(&mut pool, bounds, *raw)?;

        let title = match period {
            Some(p) => format!("Entries for {}", p),
            None => "Entries".to_string(),
        };
        print_entries_table(&entries, &title);
    }
    Ok(())
}
