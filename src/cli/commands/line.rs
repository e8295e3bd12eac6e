use crate::cli::parser::{Commands, LineAction};
use crate::config::Config;
use crate::core::line::LineLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::fmt_seconds;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Line { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            LineAction::Add { name } => {
                LineLogic::add_line(&mut pool, name)?;
            }
            LineAction::Del { name } => LineLogic::delete_line(&mut pool, name)?,
            LineAction::List => print_lines(&mut pool, cfg)?,
            LineAction::Show { name } => print_activities(&mut pool, cfg, name)?,
        }
    }

    Ok(())
}

fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}

fn print_lines(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
    let lines = LineLogic::list_lines(pool)?;

    if lines.is_empty() {
        info("No lines defined yet. Add one with `laps line add <NAME>`.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::left("LINE"),
        Column::right("ACTIVITIES"),
        Column::right("WORK CONTENT (s)"),
    ]);

    for l in &lines {
        table.add_row(vec![
            l.name.clone(),
            l.activity_count.to_string(),
            fmt_seconds(l.work_content_sec),
        ]);
    }

    print!("{}", table.render(separator(cfg)));
    Ok(())
}

fn print_activities(pool: &mut DbPool, cfg: &Config, line: &str) -> AppResult<()> {
    let (activities, total) = LineLogic::activities(pool, line)?;

    header(format!("Line {line}"), &cfg.separator_char);

    if activities.is_empty() {
        info(format!("Line '{line}' has no activities."));
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::right("SEQ"),
        Column::left("ACTIVITY"),
        Column::right("TIME (s)"),
    ]);

    for a in &activities {
        table.add_row(vec![
            a.sequence_no.to_string(),
            a.text.clone(),
            fmt_seconds(a.time_sec),
        ]);
    }

    print!("{}", table.render(separator(cfg)));
    println!("Total work content: {} s", fmt_seconds(total));
    Ok(())
}
