#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs::{self, File};
use std::path::Path;

use cbztag::{Console, ConsoleError, Invocation, ProcessRunner, RunStatus, Tone};
use tempfile::TempDir;

/// Console that answers prompts from a script and records all output.
pub struct ScriptedConsole {
    answers: VecDeque<Option<String>>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| Some(a.to_string())).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Simulate Ctrl-C once the scripted answers run out.
    pub fn then_interrupt(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|l| l.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.output.iter().filter(|l| l.contains(needle)).count()
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        self.prompts.push(message.to_string());
        match self.answers.pop_front() {
            Some(Some(answer)) => Ok(answer),
            Some(None) => Err(ConsoleError::Interrupted),
            None => Err(ConsoleError::Closed),
        }
    }

    fn line(&mut self, _tone: Tone, text: &str) {
        self.output.push(text.to_string());
    }
}

/// Runner that records invocations instead of launching anything.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: Vec<Invocation>,
    /// Exit codes handed out in order; once empty every call succeeds
    pub exit_codes: VecDeque<Option<i32>>,
    /// Pretend the program is not installed
    pub missing: bool,
}

impl RecordingRunner {
    pub fn failing_first(codes: &[i32]) -> Self {
        Self {
            exit_codes: codes.iter().map(|c| Some(*c)).collect(),
            ..Default::default()
        }
    }

    pub fn missing() -> Self {
        Self {
            missing: true,
            ..Default::default()
        }
    }

    /// Payload argument of every write invocation, in call order.
    pub fn payloads(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter(|c| c.args_lossy().iter().any(|a| a == "--overwrite"))
            .map(|c| {
                let args = c.args_lossy();
                args[args.len() - 2].clone()
            })
            .collect()
    }

    /// Last argument (the target path's file name) of every write.
    pub fn written_names(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter(|c| c.args_lossy().iter().any(|a| a == "--overwrite"))
            .map(|c| {
                let target = c.args.last().cloned().unwrap_or_default();
                Path::new(&target)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> std::io::Result<RunStatus> {
        self.calls.push(invocation.clone());
        if self.missing {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            ));
        }
        let code = self.exit_codes.pop_front().unwrap_or(Some(0));
        Ok(RunStatus { code })
    }
}

/// Scratch directory holding empty archives with the given names.
pub fn library(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in names {
        File::create(dir.path().join(name)).expect("create archive");
    }
    dir
}

pub fn subdir(root: &Path, name: &str, archives: &[&str]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("create dir");
    for archive in archives {
        File::create(dir.join(archive)).expect("create archive");
    }
}

/// Answers for one archive: don't skip, then date, title and comments.
pub fn answers_for<'a>(
    year: &'a str,
    month: &'a str,
    day: &'a str,
    title: &'a str,
    comments: &'a str,
) -> Vec<&'a str> {
    vec!["n", year, month, day, title, comments]
}
