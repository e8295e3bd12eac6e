use crate::db::db_utils::count_rows;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) LINE MASTER
    //
    let lines = count_rows(&pool.conn, "lines")?;
    let activities = count_rows(&pool.conn, "activities")?;
    println!("{}• Lines:{} {}{}{}", CYAN, RESET, GREEN, lines, RESET);
    println!("{}• Activities:{} {}{}{}", CYAN, RESET, GREEN, activities, RESET);

    //
    // 3) LAST MIGRATION
    //
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match last {
        Some(v) => println!("{}• Schema:{} {}", CYAN, RESET, v),
        None => println!("{}• Schema:{} {}(no migrations recorded){}", CYAN, RESET, GREY, RESET),
    }

    println!();
    Ok(())
}
