//! Driver for the external tagging tool.
//!
//! Commands are always built as argument vectors and launched without a
//! shell, so the encoded payload reaches the tool as exactly one argument.
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::encode::encode;
use crate::core::metadata::MetadataRecord;
use crate::core::params::TaggerConfig;

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Failed { program: String, status: RunStatus },
    #[error("no metadata to update")]
    EmptyPayload,
}

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Arguments as text, for logs and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args_lossy() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a finished process; `code` is `None` when it was killed
/// by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => f.write_str("no exit status (terminated by signal)"),
        }
    }
}

/// Process-runner port. Blocks until the process exits.
pub trait ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> std::io::Result<RunStatus>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &mut R {
    fn run(&mut self, invocation: &Invocation) -> std::io::Result<RunStatus> {
        (**self).run(invocation)
    }
}

/// Runs commands with `std::process::Command`, inheriting stdio so the
/// tool's own output reaches the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> std::io::Result<RunStatus> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()?;
        Ok(RunStatus {
            code: status.code(),
        })
    }
}

pub struct Tagger<R> {
    config: TaggerConfig,
    runner: R,
}

impl<R: ProcessRunner> Tagger<R> {
    pub fn new(config: TaggerConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// `tool [-R] -s -t <code> --overwrite <flag> <payload> <target>`
    pub fn write_invocation(&self, payload: &str, target: &Path, recursive: bool) -> Invocation {
        let mut inv = Invocation::new(&self.config.tool);
        if recursive {
            inv = inv.arg("-R");
        }
        inv.arg("-s")
            .arg("-t")
            .arg(&self.config.format_code)
            .arg("--overwrite")
            .arg(&self.config.metadata_flag)
            .arg(payload)
            .arg(target)
    }

    /// `tool -p --type <code> <target>`
    pub fn print_invocation(&self, target: &Path) -> Invocation {
        Invocation::new(&self.config.tool)
            .arg("-p")
            .arg("--type")
            .arg(&self.config.format_code)
            .arg(target)
    }

    /// Write `record` into a single archive.
    pub fn write_tags(&mut self, record: &MetadataRecord, target: &Path) -> Result<(), TaggerError> {
        self.write(record, target, false)
    }

    /// Write `record` into every archive below `dir`.
    pub fn write_tags_recursive(
        &mut self,
        record: &MetadataRecord,
        dir: &Path,
    ) -> Result<(), TaggerError> {
        self.write(record, dir, true)
    }

    fn write(
        &mut self,
        record: &MetadataRecord,
        target: &Path,
        recursive: bool,
    ) -> Result<(), TaggerError> {
        if record.is_empty() {
            return Err(TaggerError::EmptyPayload);
        }
        let payload = encode(record);
        let inv = self.write_invocation(&payload, target, recursive);
        self.run_checked(&inv)
    }

    /// Ask the tool to print the tags currently stored in `target`.
    pub fn print_tags(&mut self, target: &Path) -> Result<(), TaggerError> {
        let inv = self.print_invocation(target);
        self.run_checked(&inv)
    }

    /// Normalize archive modes and ownership below `dir`. Both commands are
    /// attempted; the first failure is returned.
    pub fn normalize_permissions(&mut self, dir: &Path) -> Result<(), TaggerError> {
        let pattern = format!("*.{}", self.config.extension);
        let chmod = Invocation::new("find")
            .arg(dir)
            .arg("-type")
            .arg("f")
            .arg("-iname")
            .arg(pattern)
            .arg("-exec")
            .arg("chmod")
            .arg(&self.config.permissions.file_mode)
            .arg("{}")
            .arg("+");
        let chown = Invocation::new("chown")
            .arg("-R")
            .arg(&self.config.permissions.owner)
            .arg(dir);

        let first = self.run_checked(&chmod);
        if let Err(e) = &first {
            warn!("Permission fix-up failed for {:?}: {}", dir, e);
        }
        let second = self.run_checked(&chown);
        if let Err(e) = &second {
            warn!("Ownership fix-up failed for {:?}: {}", dir, e);
        }
        first.and(second)
    }

    fn run_checked(&mut self, inv: &Invocation) -> Result<(), TaggerError> {
        debug!("Running: {}", inv);
        let status = self.runner.run(inv).map_err(|source| TaggerError::Spawn {
            program: inv.program.clone(),
            source,
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(TaggerError::Failed {
                program: inv.program.clone(),
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Invocation>,
        exit_codes: Vec<Option<i32>>,
    }

    impl ProcessRunner for Recorder {
        fn run(&mut self, invocation: &Invocation) -> std::io::Result<RunStatus> {
            self.calls.push(invocation.clone());
            let code = if self.exit_codes.is_empty() {
                Some(0)
            } else {
                self.exit_codes.remove(0)
            };
            Ok(RunStatus { code })
        }
    }

    struct Missing;

    impl ProcessRunner for Missing {
        fn run(&mut self, _: &Invocation) -> std::io::Result<RunStatus> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
        }
    }

    fn record() -> MetadataRecord {
        let mut record = MetadataRecord::new();
        record.insert(Field::Year, "2021");
        record.insert(Field::Title, "Hero, Vol. 5");
        record.insert(Field::Volume, "5");
        record
    }

    #[test]
    fn write_uses_argument_vector() {
        let mut tagger = Tagger::new(TaggerConfig::default(), Recorder::default());
        let target = PathBuf::from("/comics/Hero v05.cbz");
        tagger.write_tags(&record(), &target).unwrap();
        let calls = &tagger.runner().calls;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "comictagger");
        assert_eq!(
            calls[0].args_lossy(),
            vec![
                "-s",
                "-t",
                "cr",
                "--overwrite",
                "-m",
                "year=2021,title=Hero^, Vol. 5,volume=5",
                "/comics/Hero v05.cbz",
            ]
        );
    }

    #[test]
    fn recursive_write_and_print() {
        let mut tagger = Tagger::new(TaggerConfig::default(), Recorder::default());
        tagger.write_tags_recursive(&record(), Path::new("Berserk")).unwrap();
        tagger.print_tags(Path::new("x.cbz")).unwrap();
        let calls = &tagger.runner().calls;
        assert_eq!(calls[0].args_lossy()[0], "-R");
        assert_eq!(
            calls[1].args_lossy(),
            vec!["-p", "--type", "cr", "x.cbz"]
        );
    }

    #[test]
    fn empty_record_never_runs() {
        let mut tagger = Tagger::new(TaggerConfig::default(), Recorder::default());
        let err = tagger
            .write_tags(&MetadataRecord::new(), Path::new("x.cbz"))
            .unwrap_err();
        assert!(matches!(err, TaggerError::EmptyPayload));
        assert!(tagger.runner().calls.is_empty());
    }

    #[test]
    fn non_zero_exit_is_reported() {
        let runner = Recorder {
            exit_codes: vec![Some(3)],
            ..Default::default()
        };
        let mut tagger = Tagger::new(TaggerConfig::default(), runner);
        let err = tagger.write_tags(&record(), Path::new("x.cbz")).unwrap_err();
        assert_eq!(err.to_string(), "comictagger exited with exit status 3");
    }

    #[test]
    fn spawn_failure_is_reported() {
        let mut tagger = Tagger::new(TaggerConfig::default(), Missing);
        let err = tagger.print_tags(Path::new("x.cbz")).unwrap_err();
        assert!(matches!(err, TaggerError::Spawn { .. }));
    }

    #[test]
    fn permission_fixup_runs_both_commands() {
        let runner = Recorder {
            exit_codes: vec![Some(1), Some(0)],
            ..Default::default()
        };
        let mut tagger = Tagger::new(TaggerConfig::default(), runner);
        assert!(tagger.normalize_permissions(Path::new("/books/Berserk")).is_err());
        let calls = &tagger.runner().calls;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program, "find");
        assert_eq!(
            calls[0].args_lossy(),
            vec!["/books/Berserk", "-type", "f", "-iname", "*.cbz", "-exec", "chmod", "644", "{}", "+"]
        );
        assert_eq!(calls[1].program, "chown");
        assert_eq!(calls[1].args_lossy(), vec!["-R", "1000:1000", "/books/Berserk"]);
    }
}
