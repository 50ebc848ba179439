use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cbztag::{Console, Error, SystemRunner, Tagger, Tone, run_catalog_session, run_session};

use super::args::CliArgs;
use super::errors::AppError;
use super::terminal::TerminalConsole;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);
    yansi::whenever(yansi::Condition::TTY_AND_COLOR);

    let config = args.tagger_config()?;
    let cwd = env::current_dir().map_err(AppError::CurrentDir)?;
    let mut console = TerminalConsole::new().map_err(AppError::from)?;
    let mut tagger = Tagger::new(config, SystemRunner);

    let outcome = match &args.catalog {
        Some(catalog) => run_catalog_session(
            &mut console,
            &mut tagger,
            &cwd,
            catalog.as_deref(),
            args.directory.as_deref(),
        ),
        None => run_session(&mut console, &mut tagger, &cwd, args.directory.as_deref()),
    };

    match outcome {
        Ok(Some(report)) => {
            info!(
                "Session finished: processed={} skipped={} errors={}",
                report.processed, report.skipped, report.errors
            );
        }
        Ok(None) => {}
        Err(Error::Interrupted) => console.line(Tone::Plain, "\nExiting."),
        // Bad targets end this run but are not a crash
        Err(
            e @ (Error::NotFound(_)
            | Error::NotADirectory(_)
            | Error::PermissionDenied(_)
            | Error::InvalidArgument { .. }
            | Error::Catalog(_)
            | Error::TooManyAttempts { .. }),
        ) => {
            error!("{}", e);
            console.line(Tone::Notice, &e.to_string());
        }
        Err(e) => return Err(AppError::from(e).into()),
    }

    Ok(())
}
