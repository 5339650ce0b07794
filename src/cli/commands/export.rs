use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouping::GroupMode;
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::export::logic::{ExportArgs, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        group_by,
        title,
        logo,
        raw,
        force,
    } = cmd
    {
        let group_by = (*group_by).unwrap_or_else(|| default_group_mode(cfg));
        let title = title.clone().unwrap_or_else(|| cfg.default_title.clone());

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(
            &mut pool,
            &ExportArgs {
                format: format.clone(),
                file: file.clone(),
                range: range.clone(),
                group_by,
                title,
                logo: logo.clone(),
                raw: *raw,
                force: *force,
            },
        )?;
    }
    Ok(())
}

fn default_group_mode(cfg: &Config) -> GroupMode {
    match cfg.default_group_by.as_str() {
        "day" => GroupMode::Day,
        "project" => GroupMode::Project,
        _ => GroupMode::Week,
    }
}
