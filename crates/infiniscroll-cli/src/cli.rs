use clap::{Args, Parser, Subcommand, ValueEnum};
use infiniscroll_core::{AppConfig, ScrollResult, SourceKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "infiniscroll")]
#[command(about = "Infinitely scrolling viewer for paged quote and patient lists", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Collection to page through
    #[arg(long, value_enum, global = true)]
    pub source: Option<SourceArg>,

    /// Base URL of the selected source's API
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Bearer token for the patients API
    #[arg(long, env = "INFINISCROLL_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[arg(long, global = true)]
    pub clinic_id: Option<u32>,

    #[arg(long, global = true)]
    pub state_id: Option<u32>,

    #[arg(long, global = true)]
    pub country_id: Option<u32>,

    /// Rows of lookahead before the end of the list starts the next load
    #[arg(long, value_name = "ROWS", global = true)]
    pub prefetch: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load pages without the UI and print them as JSON
    ///
    /// Pages loaded before a failing page are still printed, with the failure
    /// in `state.last_error`. The command only fails when nothing was loaded.
    Fetch(FetchArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct FetchArgs {
    /// Maximum number of pages to load
    #[arg(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Quotes,
    Patients,
}

impl From<SourceArg> for SourceKind {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Quotes => SourceKind::Quotes,
            SourceArg::Patients => SourceKind::Patients,
        }
    }
}

impl Cli {
    /// Reads the config file, then lets flags and env override it.
    pub fn resolve_config(&self) -> ScrollResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(source) = self.source {
            config.source = source.into();
        }
        if let Some(base_url) = &self.base_url {
            match config.source {
                SourceKind::Quotes => config.quotes_base_url = Some(base_url.clone()),
                SourceKind::Patients => config.patients_base_url = Some(base_url.clone()),
            }
        }
        if self.token.is_some() {
            config.token = self.token.clone();
        }
        if self.clinic_id.is_some() {
            config.clinic_id = self.clinic_id;
        }
        if self.state_id.is_some() {
            config.state_id = self.state_id;
        }
        if self.country_id.is_some() {
            config.country_id = self.country_id;
        }
        if self.prefetch.is_some() {
            config.prefetch_distance = self.prefetch;
        }
    }
}
