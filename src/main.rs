use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use resume_desk::analyzer::{AnalyzerClient, SelectedFile};
use resume_desk::config::{Config, PageKind};
use resume_desk::logging::init_tracing;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageArg {
    Counter,
    Analyzer,
}

impl From<PageArg> for PageKind {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Counter => PageKind::Counter,
            PageArg::Analyzer => PageKind::Analyzer,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "resume-desk", version, about = "Resume ATS analyzer in your terminal")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the analysis endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Preselect a resume file
    #[arg(long)]
    file: Option<String>,

    /// Page to open first
    #[arg(long, value_enum)]
    page: Option<PageArg>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;

    if let Some(endpoint) = &cli.endpoint {
        config.analyzer.endpoint = endpoint.clone();
    }
    if let Some(page) = cli.page {
        config.ui.initial_page = page.into();
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let initial_file = cli
        .file
        .as_deref()
        .map(|input| SelectedFile::pick(input, &config.analyzer.accept))
        .transpose()
        .context("--file rejected")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let client = AnalyzerClient::new(&config.analyzer)?;

    tracing::info!(endpoint = %config.analyzer.endpoint, "starting resume-desk");
    resume_desk::ui::run(&config, client, runtime.handle().clone(), initial_file)?;

    runtime.shutdown_background();
    Ok(())
}
