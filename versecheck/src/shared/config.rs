use anyhow::{anyhow, Context, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tracing::error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/analyze";

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("config"))]
pub struct ConfigOptions {
    /// The URL of the analysis endpoint.
    #[arg(
        long,
        env = "VERSECHECK_ENDPOINT",
        default_value = DEFAULT_ENDPOINT,
        global(true)
    )]
    endpoint: String,

    /// Override the working directory, where reports are written by default.
    #[arg(long, short = 'C', global(true))]
    working_dir: Option<String>,

    /// The run-id ties the log output and report files of a single run together.
    /// In the case that the run-id is re-used, the old values will be overwritten.
    #[arg(long, global(true), env = "VERSECHECK_RUN_ID")]
    run_id: Option<String>,
}

impl ConfigOptions {
    pub fn generate_run_id() -> String {
        let id = nanoid::nanoid!(4, &nanoid::alphabet::SAFE);
        let now = chrono::Local::now();
        let current_time = now.format("%Y%m%d");
        format!("{}-{}", current_time, id)
    }

    pub fn get_run_id(&self) -> String {
        self.run_id.clone().unwrap_or_else(Self::generate_run_id)
    }

    pub fn load_config(&self) -> Result<FoundConfig> {
        let current_dir = std::env::current_dir();
        let working_dir = match (current_dir, &self.working_dir) {
            (Ok(cwd), None) => cwd,
            (_, Some(dir)) => PathBuf::from(&dir),
            _ => {
                error!(target: "user", "Unable to get a working dir");
                return Err(anyhow!("Unable to get a working dir"));
            }
        };

        let endpoint = Url::parse(&self.endpoint)
            .with_context(|| format!("'{}' is not a valid endpoint URL", self.endpoint))?;

        Ok(FoundConfig {
            endpoint,
            working_dir,
            run_id: self.get_run_id(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct FoundConfig {
    pub endpoint: Url,
    pub working_dir: PathBuf,
    pub run_id: String,
}
