use crate::config::Config;
use crate::db::db_utils::is_laps_database;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::absolutize;
use rusqlite::Connection;
use std::fs;
use std::io::{self, Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = absolutize(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        if dest.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite?",
                dest.display()
            ))?
        {
            warning("Backup cancelled by user.");
            return Ok(dest);
        }

        // 4️⃣ Copy database
        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest)?;
            if compressed != dest {
                match fs::remove_file(&dest) {
                    Ok(()) => info(format!("Removed uncompressed backup: {}", dest.display())),
                    Err(e) => warning(format!("Failed to remove uncompressed backup: {e}")),
                }
            }
            compressed
        } else {
            dest
        };

        // 6️⃣ Log in DB
        if let Ok(conn) = Connection::open(src) {
            audit(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(final_path)
    }
}

/// Replace the configured database with a backup (plain SQLite or `.zip`).
pub struct RestoreLogic;

impl RestoreLogic {
    pub fn restore(cfg: &Config, source_file: &str, force: bool) -> AppResult<()> {
        if !cfg.is_developer() {
            return Err(AppError::Unauthorized("restore".to_string()));
        }

        let source = absolutize(source_file);
        if !source.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Backup not found: {}", source.display()),
            )
            .into());
        }

        let target = PathBuf::from(&cfg.database);
        let staged = target.with_extension("restore.tmp");

        // 1️⃣ Stage the incoming database next to the target
        if is_zip(&source) {
            extract_first_entry(&source, &staged)?;
        } else {
            fs::copy(&source, &staged)?;
        }

        // 2️⃣ Validate before touching the live file
        if !is_laps_database(&staged) {
            let _ = fs::remove_file(&staged);
            return Err(AppError::Config(format!(
                "{} is not a LAPS database",
                source.display()
            )));
        }

        if target.exists()
            && !force
            && !confirm(&format!("Replace database '{}'?", target.display()))?
        {
            let _ = fs::remove_file(&staged);
            warning("Restore cancelled by user.");
            return Ok(());
        }

        // 3️⃣ Keep the previous database around
        if target.exists() {
            let previous = target.with_extension("pre-restore.sqlite");
            fs::copy(&target, &previous)?;
            info(format!("Previous database saved as {}", previous.display()));
        }

        fs::rename(&staged, &target).or_else(|_| {
            fs::copy(&staged, &target)?;
            fs::remove_file(&staged)
        })?;

        if let Ok(conn) = Connection::open(&target) {
            audit(
                &conn,
                "restore",
                &source.to_string_lossy(),
                "Database restored",
            );
        }

        success(format!("Database restored from {}", source.display()));
        Ok(())
    }
}

fn confirm(question: &str) -> AppResult<bool> {
    warning(question);
    print!("[y/N] > ");
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "laps.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}

fn extract_first_entry(zip_path: &Path, dest: &Path) -> AppResult<()> {
    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(io::Error::other)?;

    if archive.len() == 0 {
        return Err(AppError::Config(format!(
            "{} contains no files",
            zip_path.display()
        )));
    }

    let mut entry = archive.by_index(0).map_err(io::Error::other)?;
    let mut out = fs::File::create(dest)?;
    io::copy(&mut entry, &mut out)?;
    Ok(())
}
