use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::RestoreLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, force } = cmd {
        RestoreLogic::restore(cfg, file, *force)?;
    }

    Ok(())
}
