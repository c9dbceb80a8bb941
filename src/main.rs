use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use colored::Colorize;
use gitwatch::cli::Cli;
use gitwatch::config::WatchConfig;
use gitwatch::git::GitClient;
use gitwatch::output::{self, Verbosity};
use gitwatch::shutdown::Shutdown;
use gitwatch::watcher::Watcher;
use std::io;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    if cli.quiet {
        output::set_verbosity(Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(Verbosity::Verbose);
    }

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    which::which("git").context("git executable not found in PATH")?;

    let config = WatchConfig::new(cli.dir, cli.interval, cli.ignore_patterns)?;

    let client = GitClient::new(config.watch_dir.clone());
    client.verify_work_tree()?;

    let shutdown = Shutdown::install_handlers()?;
    Watcher::new(&config, client, shutdown).run()
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
