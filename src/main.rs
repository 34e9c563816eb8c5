mod aggregate;
mod blame;
mod cli;
mod config;
mod error;
mod fame;
mod filter;
mod git;
mod model;
mod rank;
mod render;
#[cfg(test)]
mod test_support;

use std::io::{self, BufWriter};

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Settings;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "gitfame", &mut io::stdout());
        return;
    }

    init_logging(cli.verbose);

    let result = Settings::resolve(&cli).and_then(|settings| {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        fame::run(&settings, &mut out)
    });
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
