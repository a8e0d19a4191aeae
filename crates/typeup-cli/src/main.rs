use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use typeup_config::Config;
use typeup_engine::{ParsedDoc, io, parse_document};

/// Exit status when the document converted but produced warnings under
/// `--strict`.
const EXIT_WARNINGS: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "typeup", version)]
#[command(about = "Convert typeup documents to HTML")]
struct Cli {
    /// Input document (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output HTML file (writes stdout when omitted)
    output: Option<PathBuf>,

    /// Configuration file to use instead of ~/.config/typeup/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not print metadata or warnings
    #[arg(short, long)]
    quiet: bool,

    /// Exit with an error status when the document produced warnings
    #[arg(long)]
    strict: bool,

    /// Write a default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

/// What to report once the document is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reporting {
    metadata: bool,
    warnings: bool,
    fail_on_warnings: bool,
}

impl Reporting {
    /// Command-line flags win over the configuration file.
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            metadata: config.print_metadata && !cli.quiet,
            warnings: config.print_warnings && !cli.quiet,
            fail_on_warnings: config.fail_on_warnings || cli.strict,
        }
    }

    fn report(&self, parsed: &ParsedDoc) {
        if self.metadata {
            for (key, value) in &parsed.document.meta {
                eprintln!("{key} = {value}");
            }
        }
        if self.warnings {
            for warning in &parsed.diagnostics {
                eprintln!("warning: {warning}");
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    if cli.init_config {
        init_config(&config_path)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&config_path, cli.config.is_some())?;
    let reporting = Reporting::resolve(&cli, &config);

    let src = io::read_source(cli.input.as_deref()).context("Failed to read input")?;
    let parsed = parse_document(&src);

    let output = cli
        .output
        .clone()
        .or_else(|| cli.input.as_deref().and_then(|input| config.output_for(input)));
    io::write_output(output.as_deref(), &parsed.document.to_html())
        .context("Failed to write output")?;
    if let Some(output) = &output {
        log::info!("Wrote {}", output.display());
    }

    reporting.report(&parsed);

    if reporting.fail_on_warnings && !parsed.diagnostics.is_empty() {
        log::error!("{} warning(s) in strict mode", parsed.diagnostics.len());
        return Ok(ExitCode::from(EXIT_WARNINGS));
    }
    Ok(ExitCode::SUCCESS)
}

/// A missing file at the default location means defaults; a missing file
/// that was asked for explicitly is an error.
fn load_config(path: &Path, explicit: bool) -> Result<Config> {
    match Config::load_from_path(path)? {
        Some(config) => {
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        None if explicit => bail!("Config file not found: {}", path.display()),
        None => Ok(Config::default()),
    }
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists at {}", path.display());
    }
    Config::default().save_to_path(path)?;
    eprintln!("Wrote default configuration to {}", path.display());
    Ok(())
}
