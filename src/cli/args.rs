use clap::Parser;
use std::path::PathBuf;

use cbztag::TaggerConfig;

use super::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "cbztag",
    version,
    about = "Tired of the default metadata source in comictagger? Do it yourself!"
)]
pub struct CliArgs {
    /// Directory to process (skips the interactive chooser)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Tag a whole book directory from a JSON catalog. Without a value the
    /// catalog path is asked for (default: manga.json)
    #[arg(long, value_name = "CATALOG", num_args = 0..=1)]
    pub catalog: Option<Option<PathBuf>>,

    /// JSON file with tagger settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tagging tool executable
    #[arg(long)]
    pub tool: Option<String>,

    /// Tag schema code (e.g. cr for ComicRack)
    #[arg(long)]
    pub format_code: Option<String>,

    /// Flag the tool uses for the metadata payload (-m or --metadata)
    #[arg(long, allow_hyphen_values = true)]
    pub metadata_flag: Option<String>,

    /// Archive extension to look for
    #[arg(long)]
    pub extension: Option<String>,

    /// After catalog tagging, chmod the archives and chown the directory
    #[arg(long, default_value_t = false)]
    pub fix_permissions: bool,

    /// Do not print the tags back after writing them
    #[arg(long, default_value_t = false)]
    pub no_print: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn tagger_config(&self) -> Result<TaggerConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => TaggerConfig::from_json_file(path).map_err(|source| AppError::Config {
                path: path.clone(),
                source,
            })?,
            None => TaggerConfig::default(),
        };

        if let Some(tool) = &self.tool {
            config.tool = tool.clone();
        }
        if let Some(code) = &self.format_code {
            config.format_code = code.clone();
        }
        if let Some(flag) = &self.metadata_flag {
            config.metadata_flag = flag.clone();
        }
        if let Some(ext) = &self.extension {
            config.extension = ext.trim_start_matches('.').to_string();
        }
        if self.fix_permissions {
            config.permissions.enabled = true;
        }
        if self.no_print {
            config.print_after_write = false;
        }
        Ok(config)
    }
}
