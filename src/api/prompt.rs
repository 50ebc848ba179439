//! Interactive prompts: the numbered chooser and per-archive metadata entry.
//!
//! Every prompt loop is bounded by `attempts`; running out yields
//! `Error::TooManyAttempts` instead of asking forever.
use std::path::PathBuf;

use tracing::warn;

use crate::core::metadata::{MetadataRecord, parse_date_part};
use crate::core::volume::extract_volume;
use crate::error::{Error, Result};
use crate::io::console::Console;
use crate::io::fs::{Listing, display_name};
use crate::types::{DatePart, Field, Tone};

/// What the user picked from the chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Directory(PathBuf),
    File(PathBuf),
}

/// Show directories (numbered first) and archives (numbering continues),
/// then read a choice. `exit` in any case returns `None`.
pub fn choose_entry<C: Console>(
    console: &mut C,
    listing: &Listing,
    attempts: u32,
) -> Result<Option<Selection>> {
    let attempts = attempts.max(1);
    let dir_count = listing.directories.len();

    for _ in 0..attempts {
        if !listing.directories.is_empty() {
            console.line(Tone::Heading, "Directories:");
            for (i, dir) in listing.directories.iter().enumerate() {
                console.menu_entry(i + 1, &display_name(dir), Tone::Directory);
            }
        }
        if !listing.files.is_empty() {
            console.line(Tone::Heading, "Files:");
            for (i, file) in listing.files.iter().enumerate() {
                console.menu_entry(dir_count + i + 1, &display_name(file), Tone::File);
            }
        }

        let answer = console.prompt(
            "Enter the number of the directory or file you want to work on, or type 'exit' to quit: ",
        )?;
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=dir_count).contains(&n) => {
                return Ok(Some(Selection::Directory(listing.directories[n - 1].clone())));
            }
            Ok(n) if n > dir_count && n <= listing.len() => {
                return Ok(Some(Selection::File(listing.files[n - dir_count - 1].clone())));
            }
            Ok(_) => console.line(Tone::Notice, "Invalid choice. Please enter a valid number."),
            Err(_) => console.line(Tone::Notice, "Invalid input. Please enter a valid number."),
        }
    }

    Err(Error::TooManyAttempts {
        what: "selection".to_string(),
        attempts,
    })
}

/// Ask for year, month, day, title and comments.
///
/// Empty answers skip a field. Out-of-range or non-numeric date parts are
/// asked again. A volume found in the title is recorded right after it.
pub fn prompt_metadata<C: Console>(console: &mut C, attempts: u32) -> Result<MetadataRecord> {
    let attempts = attempts.max(1);
    let mut record = MetadataRecord::new();

    for part in DatePart::ALL {
        let mut accepted = false;
        for _ in 0..attempts {
            let raw = console.prompt(&format!("Enter the {}: ", part))?;
            match parse_date_part(part, &raw) {
                Ok(Some(value)) => {
                    record.insert(part.field(), value.to_string());
                    accepted = true;
                    break;
                }
                Ok(None) => {
                    accepted = true;
                    break;
                }
                Err(e) => console.line(Tone::Notice, &e.to_string()),
            }
        }
        if !accepted {
            return Err(Error::TooManyAttempts {
                what: part.to_string(),
                attempts,
            });
        }
    }

    let title = console.prompt("Enter the title: ")?;
    if record.insert(Field::Title, title.as_str()) {
        if let Some(volume) = extract_volume(&title) {
            record.insert(Field::Volume, volume);
        }
    }

    let comments = console.prompt("Enter the comments: ")?;
    record.insert(Field::Comments, comments);

    if record.has_impossible_date() {
        warn!(
            "{}-{}-{} is not a calendar date; writing it anyway",
            record.text(Field::Year).unwrap_or_default(),
            record.text(Field::Month).unwrap_or_default(),
            record.text(Field::Day).unwrap_or_default()
        );
    }

    Ok(record)
}
