use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use inliner::{config::Config, driver::transform_file};
use log::{LevelFilter, error};

/// Rewrite imports of in-tree Python modules into self-contained inlined code
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Python files to transform
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Only modules located below this directory are inlined
    #[arg(short, long)]
    boundary: Option<PathBuf>,

    /// Additional directory to search for modules (repeatable)
    #[arg(long = "src", value_name = "DIR")]
    src: Vec<PathBuf>,

    /// Also print every transformed program to stdout
    #[arg(short = 'o', long)]
    stdout: bool,

    /// Do not emit a print() echo for inlined imports
    #[arg(long)]
    no_echo: bool,

    /// Configuration file to use instead of ./inliner.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Command line flags are the last configuration layer
    fn apply_to(&self, config: &mut Config) {
        if let Some(boundary) = &self.boundary {
            config.boundary.clone_from(boundary);
        }
        config.src.extend(self.src.iter().cloned());
        if self.no_echo {
            config.echo_imports = false;
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    let mut stdout = io::stdout().lock();
    for file in &cli.files {
        let transformed = transform_file(file, &config)?;
        if cli.stdout {
            stdout.write_all(transformed.as_bytes())?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
