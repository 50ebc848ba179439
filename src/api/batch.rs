//! Batch workflows: interactive tagging of a directory's archives, and
//! catalog-driven tagging of a whole book directory.
use std::fs;
use std::path::Path;

use tracing::{error, info, warn};

use super::BatchReport;
use super::prompt::{Selection, choose_entry, prompt_metadata};
use crate::core::volume::sort_by_volume;
use crate::error::Result;
use crate::io::catalog::Catalog;
use crate::io::console::Console;
use crate::io::fs::{
    Listing, display_name, list_archives, list_dirs, list_dirs_and_files, resolve_directory,
};
use crate::io::tagger::{ProcessRunner, Tagger};
use crate::types::Tone;

/// Default catalog file name, looked up in the working directory.
pub const DEFAULT_CATALOG: &str = "manga.json";

fn file_name_str(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// Tag the archives of `dir` one by one, in volume order.
///
/// With `only`, every other archive is passed over silently (numbering
/// still reflects the full batch). Tool failures are logged and counted;
/// the batch moves on to the next archive.
pub fn process_directory<C, R>(
    console: &mut C,
    tagger: &mut Tagger<R>,
    dir: &Path,
    only: Option<&str>,
) -> Result<BatchReport>
where
    C: Console,
    R: ProcessRunner,
{
    let mut archives = list_archives(dir, &tagger.config().extension)?;
    sort_by_volume(&mut archives, |p| file_name_str(p));

    let attempts = tagger.config().prompt_attempts;
    let total = archives.len();
    let mut report = BatchReport::default();
    let mut matched = false;

    info!("Starting batch in directory: {:?} ({} archives)", dir, total);

    for (idx, path) in archives.iter().enumerate() {
        let name = display_name(path);
        if only.is_some_and(|wanted| wanted != name) {
            continue;
        }
        matched = true;

        console.line(
            Tone::Heading,
            &format!("Working on file {}/{}: {}", idx + 1, total, name),
        );
        let answer = console.prompt("Do you want to skip to the next file? (y/n) ")?;
        if answer.trim().eq_ignore_ascii_case("y") {
            info!("Skipped by user: {}", name);
            report.skipped += 1;
            continue;
        }

        let record = prompt_metadata(console, attempts)?;
        if record.is_empty() {
            warn!("Skipping file {} due to missing metadata.", name);
            console.line(
                Tone::Notice,
                &format!("No metadata to update; skipped {}.", name),
            );
            report.skipped += 1;
            continue;
        }

        let target = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
        match tagger.write_tags(&record, &target) {
            Ok(()) => {
                report.processed += 1;
                info!("Tagged: {:?}", target);
                console.line(Tone::Plain, &format!("Tagging completed for file: {}", name));
                if tagger.config().print_after_write {
                    console.line(Tone::Heading, &format!("Updated tags for file: {}", name));
                    if let Err(e) = tagger.print_tags(&target) {
                        error!("Error while printing updated metadata for file: {}", name);
                        error!("Error message: {}", e);
                    }
                }
            }
            Err(e) => {
                report.errors += 1;
                error!("Error while tagging file: {}", name);
                error!("Error message: {}", e);
                console.line(Tone::Notice, &format!("Tagging failed for {}: {}", name, e));
            }
        }
    }

    if let (Some(wanted), false) = (only, matched) {
        console.line(
            Tone::Notice,
            &format!("No archive named '{}' in {}.", wanted, dir.display()),
        );
    }

    console.line(Tone::Plain, "Job completed.");
    report.log_summary();
    Ok(report)
}

/// Tag every archive below `dir` with the catalog entry named after the
/// directory.
pub fn process_catalog_directory<C, R>(
    console: &mut C,
    tagger: &mut Tagger<R>,
    dir: &Path,
    catalog: &Catalog,
) -> Result<BatchReport>
where
    C: Console,
    R: ProcessRunner,
{
    let book = display_name(dir);
    let mut report = BatchReport::default();

    let Some(entry) = catalog.lookup(&book) else {
        console.line(
            Tone::Notice,
            &format!("No metadata found for '{}' in the catalog.", book),
        );
        report.skipped += 1;
        return Ok(report);
    };

    let record = entry.to_record();
    if record.is_empty() {
        warn!("Skipping directory {} due to missing metadata.", book);
        console.line(
            Tone::Notice,
            &format!("No metadata to update; skipped {}.", book),
        );
        report.skipped += 1;
        return Ok(report);
    }

    console.line(
        Tone::Heading,
        &format!("Updating metadata for directory: {}", book),
    );
    match tagger.write_tags_recursive(&record, dir) {
        Ok(()) => {
            report.processed += 1;
            info!("Tagged directory: {:?}", dir);
            if tagger.config().permissions.enabled {
                if let Err(e) = tagger.normalize_permissions(dir) {
                    error!("Error while fixing permissions for directory: {}", book);
                    error!("Error message: {}", e);
                }
            }
        }
        Err(e) => {
            report.errors += 1;
            error!("Error while tagging directory: {}", book);
            error!("Error message: {}", e);
            console.line(Tone::Notice, &format!("Tagging failed for {}: {}", book, e));
        }
    }

    report.log_summary();
    Ok(report)
}

/// Interactive entry point: tag `directory` when given, otherwise let the
/// user pick a directory or a single archive under `cwd`.
///
/// Returns `None` when nothing was processed (empty listing or `exit`).
pub fn run_session<C, R>(
    console: &mut C,
    tagger: &mut Tagger<R>,
    cwd: &Path,
    directory: Option<&Path>,
) -> Result<Option<BatchReport>>
where
    C: Console,
    R: ProcessRunner,
{
    if let Some(directory) = directory {
        let dir = resolve_directory(directory)?;
        return process_directory(console, tagger, &dir, None).map(Some);
    }

    let extension = tagger.config().extension.clone();
    let listing = list_dirs_and_files(cwd, &extension)?;
    if listing.is_empty() {
        console.line(
            Tone::Notice,
            &format!(
                "No directories or .{} files found in the current working directory.",
                extension
            ),
        );
        return Ok(None);
    }

    let attempts = tagger.config().prompt_attempts;
    match choose_entry(console, &listing, attempts)? {
        None => {
            console.line(Tone::Plain, "Exiting.");
            Ok(None)
        }
        Some(Selection::Directory(path)) => {
            let dir = resolve_directory(&path)?;
            process_directory(console, tagger, &dir, None).map(Some)
        }
        Some(Selection::File(path)) => {
            let name = display_name(&path);
            process_directory(console, tagger, cwd, Some(&name)).map(Some)
        }
    }
}

/// Catalog entry point: load the catalog (prompting for its path when not
/// given), pick the book directory, and tag it.
pub fn run_catalog_session<C, R>(
    console: &mut C,
    tagger: &mut Tagger<R>,
    cwd: &Path,
    catalog_path: Option<&Path>,
    directory: Option<&Path>,
) -> Result<Option<BatchReport>>
where
    C: Console,
    R: ProcessRunner,
{
    let catalog_path = match catalog_path {
        Some(path) => path.to_path_buf(),
        None => {
            let answer = console.prompt(&format!(
                "Input path to the catalog (or press return to use the default '{}'): ",
                DEFAULT_CATALOG
            ))?;
            let answer = answer.trim();
            cwd.join(if answer.is_empty() { DEFAULT_CATALOG } else { answer })
        }
    };
    let catalog = Catalog::from_json_file(&catalog_path)?;
    info!(
        "Loaded catalog {:?} with {} books",
        catalog_path,
        catalog.books.len()
    );

    let directory = match directory {
        Some(dir) => dir.to_path_buf(),
        None => {
            let answer = console.prompt(
                "Enter the directory path to process (leave blank to list directories): ",
            )?;
            let answer = answer.trim();
            if answer.is_empty() {
                let listing = Listing {
                    directories: list_dirs(cwd)?,
                    files: Vec::new(),
                };
                match choose_entry(console, &listing, tagger.config().prompt_attempts)? {
                    Some(Selection::Directory(dir)) => dir,
                    _ => {
                        console.line(Tone::Plain, "Exiting.");
                        return Ok(None);
                    }
                }
            } else {
                cwd.join(answer)
            }
        }
    };

    let dir = resolve_directory(&directory)?;
    process_catalog_directory(console, tagger, &dir, &catalog).map(Some)
}
