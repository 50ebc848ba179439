//! End-to-end runs of the `cbztag` binary with piped input.

use std::fs::{self, File};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cbztag() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cbztag"))
}

fn library(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        File::create(dir.path().join(name)).unwrap();
    }
    dir
}

#[test]
fn help_mentions_the_tool() {
    cbztag()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("comictagger").and(predicate::str::contains("--catalog")));
}

/// A bad target is reported, not treated as a crash.
#[test]
fn missing_directory_exits_cleanly() {
    let lib = library(&[]);
    cbztag()
        .arg("-d")
        .arg(lib.path().join("nowhere"))
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn file_as_directory_is_rejected() {
    let lib = library(&["v1.cbz"]);
    cbztag()
        .arg("-d")
        .arg(lib.path().join("v1.cbz"))
        .assert()
        .success()
        .stdout(predicate::str::contains("is not a directory"));
}

#[test]
fn empty_working_directory() {
    let lib = library(&["notes.txt"]);
    cbztag()
        .current_dir(lib.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No directories or .cbz files found in the current working directory.",
        ));
}

/// End of input at the chooser behaves like Ctrl-C.
#[test]
fn end_of_input_exits() {
    let lib = library(&["Hero v1.cbz"]);
    cbztag()
        .current_dir(lib.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ").and(predicate::str::contains("Exiting.")));
}

#[test]
fn exit_at_the_chooser() {
    let lib = library(&["Hero v1.cbz"]);
    cbztag()
        .current_dir(lib.path())
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting."));
}

/// A tool that cannot be launched fails the file, and the batch still ends.
#[test]
fn unavailable_tool_is_reported_per_file() {
    let lib = library(&["Hero v1.cbz"]);
    cbztag()
        .arg("-d")
        .arg(lib.path())
        .arg("--tool")
        .arg(lib.path().join("no-such-tagger"))
        .write_stdin("n\n2021\n\n\nHero v1\n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Working on file 1/1: Hero v1.cbz")
                .and(predicate::str::contains("Tagging failed for Hero v1.cbz"))
                .and(predicate::str::contains("Job completed.")),
        );
}

#[test]
fn unreadable_config_fails() {
    let lib = library(&[]);
    let config = lib.path().join("cbztag.json");
    fs::write(&config, "{ broken").unwrap();
    cbztag()
        .current_dir(lib.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config"));
}
