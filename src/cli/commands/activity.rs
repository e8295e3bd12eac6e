use crate::cli::parser::{ActivityAction, Commands};
use crate::config::Config;
use crate::core::line::LineLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            ActivityAction::Add {
                line,
                seq,
                text,
                time,
            } => LineLogic::add_activity(&mut pool, line, *seq, text, *time)?,
            ActivityAction::Del { line, seq } => LineLogic::delete_activity(&mut pool, line, *seq)?,
        }
    }

    Ok(())
}
