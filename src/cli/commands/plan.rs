use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plan::PlanLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::allocation::{AllocationResult, BatchReport};
use crate::models::status::OperatorStatus;
use crate::ui::messages::{error, header, success, warning};
use crate::utils::colors::{color_for_status, colorize};
use crate::utils::date::resolve_date;
use crate::utils::formatting::{bold, secs2readable};
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_seconds, fmt_takt};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        date,
        shift,
        qty,
        export,
        format,
        force,
    } = cmd
    {
        let plan_date = resolve_date(date.as_deref())?;
        let shift_minutes = shift.unwrap_or(cfg.default_shift_minutes);
        let entries = PlanLogic::parse_entries(qty, plan_date, shift_minutes)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let report = PlanLogic::run(&mut pool, &entries)?;

        print_report(&report, cfg);

        if let Some(file) = export {
            ExportLogic::export(&report, *format, file, *force)?;
        }

        let failed = report.failure_count();
        if failed > 0 {
            return Err(AppError::PlanFailed(failed));
        }
    }

    Ok(())
}

fn print_report(report: &BatchReport, cfg: &Config) {
    for outcome in &report.outcomes {
        header(
            format!("{} - {}", outcome.line_id, outcome.plan_date),
            &cfg.separator_char,
        );

        match &outcome.result {
            Ok(result) => print_result(result, cfg),
            Err(e) => error(e),
        }
    }
    println!();
}

fn print_result(r: &AllocationResult, cfg: &Config) {
    println!(
        "Plan qty: {}   Shift: {} min ({})   Takt: {} s",
        r.plan_quantity,
        r.shift_minutes,
        secs2readable(r.shift_seconds),
        bold(&fmt_takt(r.takt_seconds))
    );
    println!(
        "Work content: {} s   Manpower: {} (theoretical {})   Max operator time: {} s   Efficiency: {:.1}%\n",
        fmt_seconds(r.total_work_content_seconds),
        bold(&r.final_manpower.to_string()),
        r.theoretical_manpower,
        fmt_seconds(r.max_bucket_seconds),
        r.line_efficiency()
    );

    let mut table = Table::new(vec![
        Column::left("OPERATOR"),
        Column::left("ACTIVITIES"),
        Column::right("TIME (s)"),
        Column::left("STATUS"),
    ]);

    for b in &r.buckets {
        let seqs = if b.is_empty() {
            "-".to_string()
        } else {
            b.activities
                .iter()
                .map(|a| a.sequence_no.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        table.add_colored_row(
            vec![
                b.operator_name(),
                seqs,
                fmt_seconds(b.total_time_sec),
                b.status.as_str().to_string(),
            ],
            color_for_status(b.status),
        );
    }

    print!(
        "{}",
        table.render(cfg.separator_char.chars().next().unwrap_or('-'))
    );

    if r.unresolved_overload {
        let names: Vec<String> = r.overloaded_operators().map(|b| b.operator_name()).collect();
        warning(format!(
            "Unresolved overload on {}: {} exceed takt even with one operator per activity",
            r.line_id,
            colorize(&names.join(", "), color_for_status(OperatorStatus::Overload))
        ));
    } else {
        success(format!("{} balanced with {} operator(s)", r.line_id, r.final_manpower));
    }
}
